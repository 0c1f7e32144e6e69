use std::io::SeekFrom;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::StreamExt;
use reqwest::header::RANGE;
use reqwest::{Client, StatusCode};
use tokio::fs::OpenOptions;
use tokio::io::{AsyncSeekExt, AsyncWriteExt, BufWriter};
use url::Url;

use crate::internal::transfer::structs::chunk_range::ChunkRange;
use crate::internal::transfer::structs::fetch_error::FetchError;

/// 单个分块的下载任务。
///
/// 每个任务独立打开目标文件（不创建、不截断），只定位一次，
/// 之后经缓冲顺序写入；与其他任务只共享已写入字节的计数器。
pub(crate) struct RangeFetchWorker {
    pub(crate) client: Client,
    pub(crate) url: Url,
    pub(crate) destination: PathBuf,
    pub(crate) buffer_size: usize,
    pub(crate) bytes_done: Arc<AtomicU64>,
}

impl RangeFetchWorker {
    /// 返回本分块写入的字节数。任何错误都包装为 [`FetchError::ChunkFetchFailed`]。
    pub(crate) async fn fetch(self, range: ChunkRange) -> Result<u64, FetchError> {
        self.fetch_range(range)
            .await
            .map_err(|e| FetchError::ChunkFetchFailed {
                index: range.index,
                reason: e.to_string(),
            })
    }

    async fn fetch_range(&self, range: ChunkRange) -> Result<u64, FetchError> {
        let resp = self
            .client
            .get(self.url.clone())
            .header(RANGE, range.header_value())
            .send()
            .await?;
        // 服务器忽略 Range 时会返回 200 和完整文件
        let status = resp.status();
        if status != StatusCode::PARTIAL_CONTENT {
            return Err(FetchError::UnexpectedStatus(status));
        }

        let mut file = OpenOptions::new()
            .write(true)
            .open(&self.destination)
            .await
            .map_err(FetchError::OpenFile)?;
        file.seek(SeekFrom::Start(range.start))
            .await
            .map_err(FetchError::SeekFile)?;
        let mut writer = BufWriter::with_capacity(self.buffer_size, file);

        let expected = range.len();
        let mut written: u64 = 0;
        let mut stream = resp.bytes_stream();
        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result?;
            let len = chunk.len() as u64;
            if written + len > expected {
                return Err(FetchError::BodyLengthMismatch {
                    expected,
                    actual: written + len,
                });
            }
            writer
                .write_all(&chunk)
                .await
                .map_err(FetchError::WriteFile)?;
            written += len;
            self.bytes_done.fetch_add(len, Ordering::Relaxed);
        }
        writer.flush().await.map_err(FetchError::WriteFile)?;

        if written != expected {
            return Err(FetchError::BodyLengthMismatch {
                expected,
                actual: written,
            });
        }
        Ok(written)
    }
}
