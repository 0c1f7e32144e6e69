/// 单个下载任务负责的字节区间 `[start, end]`，两端均包含。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRange {
    /// 分块序号，从 0 开始
    pub index: usize,
    pub start: u64,
    pub end: u64,
}

impl ChunkRange {
    pub fn new(index: usize, start: u64, end: u64) -> Self {
        Self { index, start, end }
    }

    /// 区间字节数。区间至少包含一个字节。
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// `Range` 请求头的值，如 `bytes=0-1023`。
    pub fn header_value(&self) -> String {
        format!("bytes={}-{}", self.start, self.end)
    }
}
