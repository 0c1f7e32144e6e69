use reqwest::Client;
use reqwest::redirect::Policy;

use crate::internal::config::structs::fetcher_config::FetcherConfig;
use crate::internal::transfer::structs::fetch_error::FetchError;

/// 下载引擎使用的两个 HTTP 客户端。
#[derive(Debug, Clone)]
pub struct HttpClients {
    /// 不跟随重定向、读超时较短：用于重定向解析与能力探测。
    /// 同样关闭 gzip，探测到的 `Content-Length` 与传输时的字节数一致
    pub resolver: Client,
    /// 传输用：读超时较长，关闭 gzip 使字节偏移与文件一致
    pub transfer: Client,
}

impl HttpClients {
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let resolver = Client::builder()
            .user_agent(config.user_agent.as_str())
            .http1_only()
            .no_gzip()
            .redirect(Policy::none())
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.probe_read_timeout)
            .build()?;

        // 每个分块各占一条 HTTP/1 连接
        let transfer = Client::builder()
            .user_agent(config.user_agent.as_str())
            .http1_only()
            .no_gzip()
            .redirect(Policy::limited(config.max_redirects))
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.transfer_read_timeout)
            .build()?;

        Ok(Self { resolver, transfer })
    }
}
