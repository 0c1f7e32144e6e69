//! 单线程整文件下载。

use std::time::Instant;

use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::info;

use crate::internal::transfer::functions::probe_capabilities::content_length;
use crate::internal::transfer::structs::download_progress::DownloadProgress;
use crate::internal::transfer::structs::fetch_error::FetchError;
use crate::internal::transfer::structs::transfer_outcome::{StrategyKind, TransferOutcome};
use crate::internal::transfer::structs::transfer_request::TransferRequest;

use super::TransferCoordinator;

impl TransferCoordinator {
    /// 整文件 GET，流式写入目标文件（截断已有内容），每写入一段数据发布一次进度。
    ///
    /// 总大小优先取 GET 响应的 `Content-Length`，缺失时用探测结果 `expected_size`，仅用于进度。
    /// 实际字节数超过总大小时，总大小随之增长，进度不会超过 100%。
    pub(super) async fn run_single_stream(
        &mut self,
        request: &TransferRequest,
        expected_size: Option<u64>,
    ) -> Result<TransferOutcome, FetchError> {
        let started = Instant::now();
        let resp = self
            .clients
            .transfer
            .get(request.url.clone())
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus(status));
        }

        let mut total = content_length(resp.headers()).or(expected_size);
        info!(total = ?total, "单线程下载中");

        let file = File::create(&request.destination)
            .await
            .map_err(FetchError::CreateFile)?;
        let mut writer = BufWriter::with_capacity(self.config.buffer_size, file);
        let mut stream = resp.bytes_stream();
        let mut bytes_done: u64 = 0;
        let mut logged_decile = 0;

        self.publish_progress(0, total);
        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result?;
            if chunk.is_empty() {
                continue;
            }
            writer
                .write_all(&chunk)
                .await
                .map_err(FetchError::WriteFile)?;
            bytes_done += chunk.len() as u64;
            if total.is_some_and(|t| bytes_done > t) {
                total = Some(bytes_done);
            }
            self.publish_progress(bytes_done, total);

            if let Some(decile) = DownloadProgress::new(bytes_done, total).decile() {
                if decile > logged_decile {
                    logged_decile = decile;
                    info!("下载进度: {}%", decile * 10);
                }
            }
        }
        writer.flush().await.map_err(FetchError::WriteFile)?;

        Ok(TransferOutcome::new(
            bytes_done,
            started.elapsed(),
            StrategyKind::Single,
        ))
    }
}
