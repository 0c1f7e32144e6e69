/// 下载进度快照：已写入字节数与总大小。
///
/// 通过 [`TransferCoordinator::progress`](crate::transfer::TransferCoordinator::progress) 读取或监听。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadProgress {
    /// 已写入目标文件的字节数
    pub bytes_done: u64,
    /// 文件总大小（字节），未知时为 `None`
    pub total: Option<u64>,
}

impl DownloadProgress {
    pub fn new(bytes_done: u64, total: Option<u64>) -> Self {
        Self { bytes_done, total }
    }

    /// 进度百分比（0～100）；总大小为 0 或未知时返回 `f64::NAN`。
    pub fn pct(&self) -> f64 {
        self.total
            .filter(|&t| t > 0)
            .map(|t| (self.bytes_done as f64 / t as f64) * 100.0)
            .unwrap_or(f64::NAN)
    }

    /// 当前所处的十分位（0～10），用于按 10% 步进输出日志。
    pub fn decile(&self) -> Option<u64> {
        self.total
            .filter(|&t| t > 0)
            .map(|t| (self.bytes_done.min(t) * 10) / t)
    }
}
