//! 下载流程钩子：由 [`TransferCoordinator`](crate::transfer::TransferCoordinator) 独占持有并调用。

use async_trait::async_trait;
use thiserror::Error;

use crate::internal::transfer::structs::transfer_outcome::TransferOutcome;
use crate::internal::transfer::structs::transfer_request::TransferRequest;

/// 钩子请求中止下载时返回的错误，携带中止原因。
#[derive(Debug, Clone, Error)]
#[error("下载被钩子中止: {reason}")]
pub struct HookAbort {
    pub reason: String,
}

impl HookAbort {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// 在「开始前 / 进度 / 完成后」插入自定义逻辑。
///
/// 只关心进度时可直接用 `with_on_progress_hook` 传入闭包；
/// 其余情况实现本 trait 后通过 `with_hook` 注册，按注册顺序依次执行。
#[async_trait]
pub trait DownloadHook: Send + Sync {
    /// 发起任何网络请求之前调用。返回 `Err` 则中止本次下载。
    async fn before_start(&mut self, _request: &TransferRequest) -> Result<(), HookAbort> {
        Ok(())
    }

    /// 进度更新（累计已写入字节、总大小）。
    ///
    /// 单线程下载时每写入一段数据调用一次；多线程下载时按采样间隔调用。
    fn on_progress(&mut self, _bytes_done: u64, _total: Option<u64>) {}

    /// 下载成功（含哈希校验）后调用。
    async fn after_complete(&mut self, _outcome: &TransferOutcome) {}
}
