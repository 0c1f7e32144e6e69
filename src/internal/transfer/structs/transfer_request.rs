use std::path::PathBuf;

use url::Url;

/// 一次下载请求：已解析重定向的地址、目标文件与可选的期望哈希。
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub url: Url,
    pub destination: PathBuf,
    /// 设置后在下载完成时校验 SHA-256
    pub expected_digest: Option<String>,
}

impl TransferRequest {
    pub fn new(url: Url, destination: impl Into<PathBuf>) -> Self {
        Self {
            url,
            destination: destination.into(),
            expected_digest: None,
        }
    }

    pub fn with_expected_digest(mut self, digest: impl Into<String>) -> Self {
        self.expected_digest = Some(digest.into());
        self
    }
}
