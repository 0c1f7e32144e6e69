use reqwest::header::LOCATION;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::internal::transfer::structs::fetch_error::FetchError;

/// 302 与 307 视为临时重定向，其余状态码均为终点。
fn is_temporary_redirect(status: StatusCode) -> bool {
    matches!(status, StatusCode::FOUND | StatusCode::TEMPORARY_REDIRECT)
}

/// 手动跟随临时重定向，返回最终地址。
///
/// 最多跟随 `max_redirects` 次，第 `max_redirects + 1` 次重定向返回
/// [`FetchError::TooManyRedirects`]，缺少 `Location` 的重定向返回
/// [`FetchError::RedirectWithoutLocation`]。相对的 `Location` 基于当前地址解析。
/// 终点的状态码不做检查，交由后续的探测与下载处理。
pub async fn resolve_redirects(client: &Client, initial: Url, max_redirects: usize) -> Result<Url, FetchError> {
    let mut url = initial;
    let mut hops = 0usize;
    loop {
        let resp = client.get(url.clone()).send().await?;
        let status = resp.status();
        if !is_temporary_redirect(status) {
            debug!(%url, %status, hops, "重定向解析完成");
            return Ok(url);
        }

        let location = resp
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        // 只需要响应头，尽早释放连接
        drop(resp);

        let Some(location) = location else {
            warn!(%url, %status, "重定向响应缺少 Location");
            return Err(FetchError::RedirectWithoutLocation { url, status });
        };
        if hops == max_redirects {
            return Err(FetchError::TooManyRedirects {
                url,
                max: max_redirects,
            });
        }
        url = url.join(&location)?;
        hops += 1;
        debug!(hop = hops, %url, "跟随重定向");
    }
}
