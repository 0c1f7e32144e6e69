//! 本地文件的 SHA-256 校验。摘要统一为小写十六进制。

use std::path::Path;

use sha2::{Digest, Sha256};
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::internal::transfer::structs::fetch_error::FetchError;

/// 读取缓冲区：64KB
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// 流式计算文件的 SHA-256。
pub async fn compute_sha256(path: &Path) -> Result<String, FetchError> {
    let mut file = File::open(path).await.map_err(FetchError::ReadFile)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    loop {
        let n = file.read(&mut buffer).await.map_err(FetchError::ReadFile)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

/// 忽略首尾空白与大小写比较两个十六进制摘要。
pub fn digests_match(actual: &str, expected: &str) -> bool {
    actual.trim().eq_ignore_ascii_case(expected.trim())
}

/// 文件存在且摘要与期望一致时返回 `true`；文件不存在或不是普通文件返回 `false`。
pub async fn is_verified(path: &Path, expected: &str) -> Result<bool, FetchError> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        _ => return Ok(false),
    }
    let actual = compute_sha256(path).await?;
    Ok(digests_match(&actual, expected))
}
