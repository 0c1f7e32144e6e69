//! 获取流程的统一错误类型。

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::internal::transfer::traits::download_hook::HookAbort;

#[derive(Debug, Error)]
pub enum FetchError {
    /// 下载上下文文件缺失、为空或字段不足
    #[error("找不到下载上下文: {0}")]
    ContextMissing(String),

    /// 文件名不符合 `mojang_<版本>.jar`
    #[error("无法从文件名解析版本号: {0}")]
    VersionUnparseable(String),

    #[error("无效的下载链接: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("重定向响应 {status} 缺少 Location: {url}")]
    RedirectWithoutLocation { url: Url, status: StatusCode },

    #[error("重定向次数超过上限 {max}: {url}")]
    TooManyRedirects { url: Url, max: usize },

    /// 能力探测的传输层错误，调用方据此回退到单线程下载
    #[error("探测服务器能力失败: {0}")]
    ProbeFailed(reqwest::Error),

    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("下载失败，HTTP响应码: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("响应体长度不符: 期望 {expected} 字节，实际 {actual} 字节")]
    BodyLengthMismatch { expected: u64, actual: u64 },

    #[error("创建缓存目录失败: {0}")]
    CreateCacheDir(std::io::Error),

    #[error("创建文件失败: {0}")]
    CreateFile(std::io::Error),

    #[error("打开文件失败: {0}")]
    OpenFile(std::io::Error),

    #[error("读取文件失败: {0}")]
    ReadFile(std::io::Error),

    #[error("写入文件失败: {0}")]
    WriteFile(std::io::Error),

    #[error("文件定位失败: {0}")]
    SeekFile(std::io::Error),

    #[error("预分配文件空间失败: {0}")]
    PreallocateFile(std::io::Error),

    #[error("分块 {index} 下载失败: {reason}")]
    ChunkFetchFailed { index: usize, reason: String },

    #[error("多线程下载失败，{} 个分块出错: {}", .errors.len(), join_errors(.errors))]
    TransferFailed { errors: Vec<FetchError> },

    #[error("哈希校验失败: 期望 {expected}，实际 {actual}")]
    HashMismatch { expected: String, actual: String },

    #[error("分块任务失败: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error(transparent)]
    HookAbort(#[from] HookAbort),
}

impl FetchError {
    /// 出错分块的序号，仅 [`FetchError::ChunkFetchFailed`] 有值。
    pub fn chunk_index(&self) -> Option<usize> {
        match self {
            Self::ChunkFetchFailed { index, .. } => Some(*index),
            _ => None,
        }
    }
}

fn join_errors(errors: &[FetchError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
