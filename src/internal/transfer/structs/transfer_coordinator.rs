//! 传输调度器
//!
//! 对一个已解析重定向的地址执行完整下载：
//!
//! 1. 依次执行「开始前」钩子，任一钩子中止则不发起网络请求；
//! 2. HEAD 探测服务器能力，探测失败只记录日志并回退到单线程；
//! 3. 支持 Range 且大小已知时按 [`ChunkPlanner`] 分块多线程下载，否则单线程下载；
//! 4. 汇总耗时与速度，可选地校验 SHA-256，最后执行「完成后」钩子。
//!
//! 进度同时通过钩子与 [`TransferCoordinator::progress`] 返回的响应式属性发布。
//! 调度器独占钩子容器，分块任务只通过共享的原子计数器上报字节数。

pub(crate) mod multi_stream;
mod single_stream;

use tracing::{info, warn};

use crate::internal::config::structs::fetcher_config::FetcherConfig;
use crate::internal::states::reactive_core::ReactiveProperty;
use crate::internal::transfer::functions::probe_capabilities::probe_capabilities;
use crate::internal::transfer::traits::download_hook::DownloadHook;
use crate::internal::verify::functions::hash_file::{compute_sha256, digests_match};

use super::chunk_planner::ChunkPlanner;
use super::download_progress::DownloadProgress;
use super::fetch_error::FetchError;
use super::hook_adapters::OnProgressHookAdapter;
use super::hooks_container::DownloadHooksContainer;
use super::http_clients::HttpClients;
use super::server_capabilities::ServerCapabilities;
use super::transfer_outcome::TransferOutcome;
use super::transfer_request::TransferRequest;
use super::transfer_strategy::TransferStrategy;

pub struct TransferCoordinator {
    pub(crate) config: FetcherConfig,
    pub(crate) clients: HttpClients,
    pub(crate) planner: ChunkPlanner,
    pub(crate) hooks: DownloadHooksContainer,
    pub(crate) progress_state: ReactiveProperty<DownloadProgress>,
}

impl TransferCoordinator {
    pub fn new(config: &FetcherConfig, clients: &HttpClients) -> Self {
        Self {
            config: config.clone(),
            clients: clients.clone(),
            planner: ChunkPlanner::from_config(config),
            hooks: DownloadHooksContainer::default(),
            progress_state: ReactiveProperty::new(DownloadProgress::default()),
        }
    }

    /// 注册完整钩子；可多次调用，按注册顺序执行。
    pub fn with_hook(mut self, hook: impl DownloadHook + 'static) -> Self {
        self.hooks.add(hook);
        self
    }

    /// 注册「进度」钩子，参数为（已写入字节，总大小）。
    pub fn with_on_progress_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(u64, Option<u64>) + Send + Sync + 'static,
    {
        self.hooks.add(OnProgressHookAdapter(f));
        self
    }

    /// 下载进度的响应式属性，可在下载进行时读取或监听。
    pub fn progress(&self) -> ReactiveProperty<DownloadProgress> {
        self.progress_state.clone()
    }

    /// 执行下载，消耗调度器。
    pub async fn transfer(mut self, request: &TransferRequest) -> Result<TransferOutcome, FetchError> {
        self.hooks.run_before_start(request).await?;

        let capabilities = self.probe(request).await;
        let strategy = TransferStrategy::select(&capabilities, &self.planner);
        info!(kind = ?strategy.kind(), "选择下载方式");

        let outcome = match strategy {
            TransferStrategy::SingleStream { expected_size } => {
                self.run_single_stream(request, expected_size).await?
            }
            TransferStrategy::MultiStream { total_size, plan } => {
                self.run_multi_stream(request, total_size, plan)
                    .await?
                    .into_result()?
            }
        };
        info!(
            "下载完成，共 {} 字节，用时 {:.2} 秒，速度: {:.2} MB/s",
            outcome.bytes_transferred,
            outcome.elapsed.as_secs_f64(),
            outcome.throughput_mb()
        );

        if self.config.verify_after_download {
            if let Some(expected) = request.expected_digest.as_deref() {
                let actual = compute_sha256(&request.destination).await?;
                if !digests_match(&actual, expected) {
                    return Err(FetchError::HashMismatch {
                        expected: expected.trim().to_string(),
                        actual,
                    });
                }
                info!("哈希校验通过");
            }
        }

        self.hooks.run_after_complete(&outcome).await;
        Ok(outcome)
    }

    async fn probe(&self, request: &TransferRequest) -> ServerCapabilities {
        match probe_capabilities(&self.clients.resolver, &request.url).await {
            Ok(capabilities) => capabilities,
            Err(e) => {
                warn!("{e}，回退到单线程下载");
                ServerCapabilities::default()
            }
        }
    }

    /// 同时更新响应式属性并通知进度钩子。
    pub(crate) fn publish_progress(&mut self, bytes_done: u64, total: Option<u64>) {
        self.progress_state
            .update(DownloadProgress::new(bytes_done, total));
        self.hooks.run_on_progress(bytes_done, total);
    }
}
