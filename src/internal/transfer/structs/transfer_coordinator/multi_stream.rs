//! 多线程分块下载：预分配文件、每个分块一个任务、按固定间隔采样进度。

mod range_fetch_worker;

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use tokio::fs::OpenOptions;
use tokio::task::JoinSet;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use crate::internal::transfer::structs::chunk_range::ChunkRange;
use crate::internal::transfer::structs::fetch_error::FetchError;
use crate::internal::transfer::structs::transfer_outcome::{StrategyKind, TransferOutcome};
use crate::internal::transfer::structs::transfer_request::TransferRequest;

use super::TransferCoordinator;

pub(crate) use range_fetch_worker::RangeFetchWorker;

impl TransferCoordinator {
    /// 所有分块任务结束后才返回。失败分块的错误收集在结果的 `chunk_errors` 中，
    /// 其余分块照常完成写入。
    pub(super) async fn run_multi_stream(
        &mut self,
        request: &TransferRequest,
        total_size: u64,
        plan: Vec<ChunkRange>,
    ) -> Result<TransferOutcome, FetchError> {
        info!(total_size, workers = plan.len(), "多线程下载中");
        let started = Instant::now();
        preallocate(&request.destination, total_size).await?;

        let bytes_done = Arc::new(AtomicU64::new(0));
        let mut tasks = JoinSet::new();
        for range in plan {
            let worker = RangeFetchWorker {
                client: self.clients.transfer.clone(),
                url: request.url.clone(),
                destination: request.destination.clone(),
                buffer_size: self.config.buffer_size,
                bytes_done: Arc::clone(&bytes_done),
            };
            tasks.spawn(async move { (range.index, worker.fetch(range).await) });
        }

        let total = Some(total_size);
        let mut ticker = tokio::time::interval(self.config.progress_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut chunk_errors = Vec::new();

        loop {
            tokio::select! {
                joined = tasks.join_next() => match joined {
                    Some(Ok((index, Ok(written)))) => debug!(index, written, "分块下载完成"),
                    Some(Ok((_, Err(e)))) => {
                        error!("线程下载失败: {e}");
                        chunk_errors.push(e);
                    }
                    Some(Err(join_error)) => {
                        error!("分块任务异常退出: {join_error}");
                        chunk_errors.push(FetchError::TaskJoin(join_error));
                    }
                    None => break,
                },
                _ = ticker.tick() => {
                    let done = bytes_done.load(Ordering::Relaxed);
                    self.publish_progress(done, total);
                }
            }
        }

        let transferred = bytes_done.load(Ordering::Relaxed);
        self.publish_progress(transferred, total);
        chunk_errors.sort_by_key(FetchError::chunk_index);

        Ok(TransferOutcome {
            bytes_transferred: transferred,
            elapsed: started.elapsed(),
            strategy: StrategyKind::Multi,
            chunk_errors,
        })
    }
}

/// 创建（不截断）目标文件并把长度设为总大小，已有的更长文件会被截短。
async fn preallocate(path: &Path, total_size: u64) -> Result<(), FetchError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(path)
        .await
        .map_err(FetchError::CreateFile)?;
    file.set_len(total_size)
        .await
        .map_err(FetchError::PreallocateFile)?;
    Ok(())
}
