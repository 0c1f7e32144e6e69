use crate::internal::config::structs::fetcher_config::{
    DEFAULT_MAX_WORKERS, DEFAULT_MIN_CHUNK_SIZE, DEFAULT_MIN_WORKERS, FetcherConfig,
};
use crate::internal::transfer::structs::chunk_range::ChunkRange;

/// 分块规划器：根据文件总大小决定并发数，并切分出互不重叠、首尾相接的字节区间。
///
/// 并发数为 `clamp(总大小 / 最小分块, 下限, 上限)`，且不超过总字节数，
/// 保证每个区间至少一个字节。平均分配后的余数并入最后一块。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlanner {
    min_chunk_size: u64,
    min_workers: usize,
    max_workers: usize,
}

impl Default for ChunkPlanner {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CHUNK_SIZE, DEFAULT_MIN_WORKERS, DEFAULT_MAX_WORKERS)
    }
}

impl ChunkPlanner {
    /// 参数会被修正为合法值：最小分块与下限至少为 1，上限不小于下限。
    pub fn new(min_chunk_size: u64, min_workers: usize, max_workers: usize) -> Self {
        let min_workers = min_workers.max(1);
        Self {
            min_chunk_size: min_chunk_size.max(1),
            min_workers,
            max_workers: max_workers.max(min_workers),
        }
    }

    pub fn from_config(config: &FetcherConfig) -> Self {
        Self::new(config.min_chunk_size, config.min_workers, config.max_workers)
    }

    /// 给定总大小下的分块数量。总大小为 0 时返回 0。
    pub fn worker_count(&self, total_size: u64) -> usize {
        let by_size = total_size / self.min_chunk_size;
        let clamped = by_size.clamp(self.min_workers as u64, self.max_workers as u64);
        clamped.min(total_size) as usize
    }

    pub fn plan(&self, total_size: u64) -> Vec<ChunkRange> {
        let count = self.worker_count(total_size);
        if count == 0 {
            return Vec::new();
        }
        let chunk_size = total_size / count as u64;
        (0..count)
            .map(|index| {
                let start = index as u64 * chunk_size;
                let end = if index == count - 1 {
                    total_size - 1
                } else {
                    start + chunk_size - 1
                };
                ChunkRange::new(index, start, end)
            })
            .collect()
    }
}
