use thiserror::Error;

/// 程序的三类错误：下载、解析、写输出。都无法恢复，统一汇报到顶层后退出。
#[derive(Debug, Error)]
pub enum AppError {
    /// 网络传输失败，或者HTTP状态码不是2xx
    #[error("下载ip-ranges.json失败: {0}")]
    Fetch(#[from] reqwest::Error),

    /// JSON格式错误或者字段类型不匹配
    #[error("解析ip-ranges.json失败: {0}")]
    Decode(#[from] serde_json::Error),

    /// 表格模式写stdout失败
    #[error("写入输出失败: {0}")]
    Write(#[from] std::io::Error),

    /// CSV模式写stdout失败
    #[error("写入CSV失败: {0}")]
    Csv(#[from] csv::Error),
}
