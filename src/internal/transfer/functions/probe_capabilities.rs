use reqwest::Client;
use reqwest::header::{ACCEPT_RANGES, CONTENT_LENGTH, HeaderMap};
use tracing::debug;
use url::Url;

use crate::internal::transfer::structs::fetch_error::FetchError;
use crate::internal::transfer::structs::server_capabilities::ServerCapabilities;

/// 发送 HEAD 请求探测服务器是否支持 Range 以及文件总大小。
///
/// 非成功状态码视为不支持 Range。传输层错误返回 [`FetchError::ProbeFailed`]。
pub async fn probe_capabilities(client: &Client, url: &Url) -> Result<ServerCapabilities, FetchError> {
    let resp = client
        .head(url.clone())
        .send()
        .await
        .map_err(FetchError::ProbeFailed)?;

    let status = resp.status();
    if !status.is_success() {
        debug!(%url, %status, "探测响应非成功状态，视为不支持 Range");
        return Ok(ServerCapabilities::default());
    }

    let headers = resp.headers();
    let supports_ranges = headers
        .get(ACCEPT_RANGES)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("bytes"));
    let capabilities = ServerCapabilities {
        supports_ranges,
        total_size: content_length(headers),
    };
    debug!(%url, ?capabilities, "探测完成");
    Ok(capabilities)
}

/// 直接解析 `Content-Length` 头；缺失、无法解析或为 0 时返回 `None`。
///
/// HEAD 响应没有响应体，不能用 `Response::content_length`。
pub fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|&n| n > 0)
}
