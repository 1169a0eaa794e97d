use serde::Deserialize;

/// ip-ranges.json的顶层结构，字段缺失时用空值代替
#[derive(Debug, Deserialize)]
pub struct AwsIpRanges {
    #[allow(dead_code)]
    #[serde(rename = "syncToken", default)]
    pub sync_token: String,

    #[allow(dead_code)]
    #[serde(rename = "createDate", default)]
    pub create_date: String,

    #[serde(default)]
    pub prefixes: Vec<Prefix>,

    #[serde(default)]
    pub ipv6_prefixes: Vec<Ipv6Prefix>,
}

impl AwsIpRanges {
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[derive(Debug, Deserialize)]
pub struct Prefix {
    #[serde(default)]
    pub ip_prefix: String,

    #[serde(default)]
    pub region: String,

    #[serde(default)]
    pub service: String,

    // 解析保留，不参与输出
    #[allow(dead_code)]
    #[serde(default)]
    pub network_border_group: String,
}

impl Prefix {
    pub fn row(&self) -> [&str; 3] {
        [&self.ip_prefix, &self.region, &self.service]
    }
}

#[derive(Debug, Deserialize)]
pub struct Ipv6Prefix {
    #[serde(default)]
    pub ipv6_prefix: String,

    #[serde(default)]
    pub region: String,

    #[serde(default)]
    pub service: String,

    // 解析保留，不参与输出
    #[allow(dead_code)]
    #[serde(default)]
    pub network_border_group: String,
}

impl Ipv6Prefix {
    pub fn row(&self) -> [&str; 3] {
        [&self.ipv6_prefix, &self.region, &self.service]
    }
}
