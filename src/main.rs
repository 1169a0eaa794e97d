mod errors;
mod models;

use crate::errors::AppError;
use crate::models::AwsIpRanges;
use std::io::{ self, Write };
use csv::Writer;
use clap::Parser;

/// 下载AWS官方公布的IP地址段(ip-ranges.json)，列出IPv4和IPv6前缀以及所属的region和service。
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// 以CSV格式输出，不加该参数则输出对齐的文本表格
    #[arg(long)]
    csv: bool,
}

static IP_RANGES_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<(), AppError> {
    let body = fetch(IP_RANGES_URL).await?;
    let ip_ranges = AwsIpRanges::from_json(&body)?;

    let stdout = io::stdout();
    if args.csv {
        write_csv(&ip_ranges, stdout.lock())
    } else {
        print_table(&ip_ranges, &mut stdout.lock())
    }
}

// 发送一次GET请求，读取完整的响应体，非2xx状态码视为下载失败
async fn fetch(url: &str) -> Result<Vec<u8>, AppError> {
    let client = reqwest::Client::new();
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.bytes().await?;

    Ok(body.to_vec())
}

// 表格模式：三列左对齐，宽度25/20/10，IPv4和IPv6两段之间空一行
fn print_table(ip_ranges: &AwsIpRanges, out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "{:<25}{:<20}{:<10}", "IP Prefix", "Region", "Service")?;
    for p in &ip_ranges.prefixes {
        writeln!(out, "{:<25}{:<20}{:<10}", p.ip_prefix, p.region, p.service)?;
    }

    writeln!(out)?;
    writeln!(out, "{:<25}{:<20}{:<10}", "IPv6 Prefix", "Region", "Service")?;
    for p in &ip_ranges.ipv6_prefixes {
        writeln!(out, "{:<25}{:<20}{:<10}", p.ipv6_prefix, p.region, p.service)?;
    }

    Ok(())
}

// CSV模式：表头加每个前缀一行，先IPv4后IPv6，network_border_group不输出
fn write_csv(ip_ranges: &AwsIpRanges, out: impl Write) -> Result<(), AppError> {
    let mut wtr = Writer::from_writer(out);
    wtr.write_record(&["IP Prefix", "Region", "Service"])?;

    for p in &ip_ranges.prefixes {
        wtr.write_record(&p.row())?;
    }
    for p in &ip_ranges.ipv6_prefixes {
        wtr.write_record(&p.row())?;
    }

    wtr.flush()?;
    Ok(())
}
