//! 下载上下文
//!
//! 由外部提供的一行制表符分隔文本，至少三个字段：`期望哈希 \t <未使用> \t 文件名`。
//! 文件名形如 `mojang_<版本>.jar`，版本号用于拼接镜像下载地址。

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::internal::transfer::structs::fetch_error::FetchError;

static FILE_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^mojang_(.+)\.jar$").expect("文件名正则无效"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadContext {
    /// 期望的 SHA-256（十六进制）
    pub expected_digest: String,
    pub file_name: String,
    pub version: String,
}

impl DownloadContext {
    /// 解析上下文行。字段不足或为空返回 [`FetchError::ContextMissing`]，
    /// 文件名不合规返回 [`FetchError::VersionUnparseable`]。
    pub fn parse_line(line: &str) -> Result<Self, FetchError> {
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();
        if fields.len() < 3 {
            return Err(FetchError::ContextMissing(format!(
                "字段数量不足，期望至少 3 个，实际 {} 个",
                fields.len()
            )));
        }

        let expected_digest = fields[0].trim();
        if expected_digest.is_empty() {
            return Err(FetchError::ContextMissing("缺少期望哈希".to_string()));
        }
        let file_name = fields[2].trim();
        if file_name.is_empty() {
            return Err(FetchError::ContextMissing("缺少文件名".to_string()));
        }

        Ok(Self {
            expected_digest: expected_digest.to_string(),
            file_name: file_name.to_string(),
            version: parse_version(file_name)?,
        })
    }

    /// 读取上下文文件的第一行并解析。
    pub async fn load(path: &Path) -> Result<Self, FetchError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FetchError::ContextMissing(format!("{}: {e}", path.display())))?;
        let line = content
            .lines()
            .next()
            .filter(|line| !line.trim().is_empty())
            .ok_or_else(|| FetchError::ContextMissing(format!("{} 内容为空", path.display())))?;
        Self::parse_line(line)
    }

    /// 镜像下载地址：`<mirror_base>/version/<版本>/server`。
    pub fn download_url(&self, mirror_base: &str) -> Result<Url, FetchError> {
        let raw = format!(
            "{}/version/{}/server",
            mirror_base.trim_end_matches('/'),
            self.version
        );
        Ok(Url::parse(&raw)?)
    }

    pub fn destination(&self, cache_dir: &Path) -> PathBuf {
        cache_dir.join(&self.file_name)
    }
}

/// 文件名包含路径分隔符时一律拒绝，避免写出缓存目录。
fn parse_version(file_name: &str) -> Result<String, FetchError> {
    if file_name.contains(['/', '\\']) {
        return Err(FetchError::VersionUnparseable(file_name.to_string()));
    }
    FILE_NAME_PATTERN
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| FetchError::VersionUnparseable(file_name.to_string()))
}
