use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::internal::config::structs::fetcher_config::FetcherConfig;
use crate::internal::context::structs::download_context::DownloadContext;
use crate::internal::transfer::functions::resolve_redirects::resolve_redirects;
use crate::internal::transfer::structs::{
    FetchError, HttpClients, TransferCoordinator, TransferOutcome, TransferRequest,
};
use crate::internal::verify::functions::hash_file::is_verified;

/// [`ensure_artifact`] 的结果。
#[derive(Debug)]
pub enum EnsureOutcome {
    /// 缓存中已有校验通过的文件，未发起任何网络请求
    AlreadyPresent(PathBuf),
    /// 新下载并校验通过
    Downloaded {
        path: PathBuf,
        outcome: TransferOutcome,
    },
}

impl EnsureOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::AlreadyPresent(path) => path.as_path(),
            Self::Downloaded { path, .. } => path.as_path(),
        }
    }
}

/// 确保缓存目录中存在与期望哈希一致的服务端文件。
///
/// 已存在且校验通过时直接返回；否则解析镜像地址的重定向后下载到
/// `cache_dir/<文件名>`，下载完成后按期望哈希校验。
///
/// example:
/// ```rust,no_run
/// use get_server::config::FetcherConfig;
/// use get_server::context::DownloadContext;
/// use get_server::ensure_artifact;
///
/// # async fn example() -> Result<(), get_server::transfer::FetchError> {
/// let config = FetcherConfig::default();
/// let context = DownloadContext::load(&config.context_path).await?;
/// let outcome = ensure_artifact(&config, &context).await?;
/// println!("{}", outcome.path().display());
/// # Ok(())
/// # }
/// ```
pub async fn ensure_artifact(
    config: &FetcherConfig,
    context: &DownloadContext,
) -> Result<EnsureOutcome, FetchError> {
    let destination = context.destination(&config.cache_dir);
    info!("路径: {}", destination.display());
    info!("版本: {}", context.version);
    info!("哈希: {}", context.expected_digest);

    tokio::fs::create_dir_all(&config.cache_dir)
        .await
        .map_err(FetchError::CreateCacheDir)?;
    if is_verified(&destination, &context.expected_digest).await? {
        info!("文件已存在，跳过下载");
        return Ok(EnsureOutcome::AlreadyPresent(destination));
    }

    let clients = HttpClients::new(config)?;
    let initial = context.download_url(&config.mirror_base)?;
    let url = resolve_redirects(&clients.resolver, initial, config.max_redirects).await?;
    info!("链接: {url}");

    let request = TransferRequest::new(url, destination.clone())
        .with_expected_digest(context.expected_digest.clone());
    let outcome = TransferCoordinator::new(config, &clients)
        .transfer(&request)
        .await?;

    Ok(EnsureOutcome::Downloaded {
        path: destination,
        outcome,
    })
}

/// 启动检查：读取下载上下文并确保服务端文件就绪。
///
/// 任何错误只记录日志，返回 `None`，由调用方决定退出码。
pub async fn run_startup_check(config: &FetcherConfig) -> Option<EnsureOutcome> {
    info!("正在检查服务端文件");
    match load_and_ensure(config).await {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            error!("获取服务端失败: {e}");
            None
        }
    }
}

async fn load_and_ensure(config: &FetcherConfig) -> Result<EnsureOutcome, FetchError> {
    let context = DownloadContext::load(&config.context_path).await?;
    ensure_artifact(config, &context).await
}
