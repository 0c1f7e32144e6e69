/// 能力探测结果。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerCapabilities {
    /// 探测响应成功且声明 `Accept-Ranges: bytes`
    pub supports_ranges: bool,
    /// 声明的总大小；缺失、无法解析或为 0 时为 `None`
    pub total_size: Option<u64>,
}

impl ServerCapabilities {
    /// 可用于多线程下载的总大小：需同时支持 Range 且大小已知。
    pub fn ranged_size(&self) -> Option<u64> {
        self.total_size.filter(|_| self.supports_ranges)
    }
}
