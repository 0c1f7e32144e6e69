use std::time::Duration;

use crate::internal::transfer::structs::fetch_error::FetchError;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Single,
    Multi,
}

/// 一次传输的结果汇总。
///
/// 多线程下载时，失败分块的错误全部收集在 `chunk_errors` 中（按分块序号排序），
/// 由 [`TransferOutcome::into_result`] 转为 [`FetchError::TransferFailed`]。
#[derive(Debug)]
pub struct TransferOutcome {
    pub bytes_transferred: u64,
    pub elapsed: Duration,
    pub strategy: StrategyKind,
    pub chunk_errors: Vec<FetchError>,
}

impl TransferOutcome {
    pub fn new(bytes_transferred: u64, elapsed: Duration, strategy: StrategyKind) -> Self {
        Self {
            bytes_transferred,
            elapsed,
            strategy,
            chunk_errors: Vec::new(),
        }
    }

    /// 平均速度（MB/s）。
    pub fn throughput_mb(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64().max(f64::EPSILON);
        self.bytes_transferred as f64 / BYTES_PER_MB / secs
    }

    pub fn into_result(self) -> Result<Self, FetchError> {
        if self.chunk_errors.is_empty() {
            Ok(self)
        } else {
            Err(FetchError::TransferFailed {
                errors: self.chunk_errors,
            })
        }
    }
}
