use crate::internal::transfer::structs::transfer_outcome::TransferOutcome;
use crate::internal::transfer::structs::transfer_request::TransferRequest;
use crate::internal::transfer::traits::download_hook::{DownloadHook, HookAbort};

/// 钩子容器，按添加顺序依次执行。
#[derive(Default)]
pub struct DownloadHooksContainer {
    hooks: Vec<Box<dyn DownloadHook>>,
}

impl DownloadHooksContainer {
    pub fn add(&mut self, hook: impl DownloadHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// 任一钩子返回 `Err` 即停止，后续钩子不再执行。
    pub async fn run_before_start(&mut self, request: &TransferRequest) -> Result<(), HookAbort> {
        for h in self.hooks.iter_mut() {
            h.before_start(request).await?;
        }
        Ok(())
    }

    pub fn run_on_progress(&mut self, bytes_done: u64, total: Option<u64>) {
        for h in self.hooks.iter_mut() {
            h.on_progress(bytes_done, total);
        }
    }

    pub async fn run_after_complete(&mut self, outcome: &TransferOutcome) {
        for h in self.hooks.iter_mut() {
            h.after_complete(outcome).await;
        }
    }
}
