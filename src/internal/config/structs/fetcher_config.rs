use std::path::{Path, PathBuf};
use std::time::Duration;

/// 默认镜像站点
pub const DEFAULT_MIRROR_BASE: &str = "https://bmclapi2.bangbang93.com";

/// 默认缓存目录（相对当前工作目录）
pub const DEFAULT_CACHE_DIR: &str = "cache";

/// 默认下载上下文文件路径
pub const DEFAULT_CONTEXT_PATH: &str = "META-INF/download-context";

/// 默认最大重定向次数
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// 默认连接超时：10秒
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// 探测与重定向解析的读超时：10秒
pub const DEFAULT_PROBE_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// 传输阶段的读超时：30秒
pub const DEFAULT_TRANSFER_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// 单个分块的最小平均大小：8MB
pub const DEFAULT_MIN_CHUNK_SIZE: u64 = 8 * 1024 * 1024;

/// 多线程下载的最少线程数
pub const DEFAULT_MIN_WORKERS: usize = 2;

/// 多线程下载的最多线程数
pub const DEFAULT_MAX_WORKERS: usize = 8;

/// 写盘缓冲区大小：8KB
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// 多线程下载的进度采样间隔
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(500);

/// 覆盖镜像站点的环境变量
pub const ENV_MIRROR_BASE: &str = "GET_SERVER_MIRROR";
/// 覆盖缓存目录的环境变量
pub const ENV_CACHE_DIR: &str = "GET_SERVER_CACHE_DIR";
/// 覆盖下载上下文路径的环境变量
pub const ENV_CONTEXT_PATH: &str = "GET_SERVER_CONTEXT";

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// 镜像站点根地址，下载链接为 `<mirror_base>/version/<版本>/server`
    pub mirror_base: String,
    pub cache_dir: PathBuf,
    pub context_path: PathBuf,
    /// 重定向解析允许的最大跳转次数
    pub max_redirects: usize,
    pub connect_timeout: Duration,
    pub probe_read_timeout: Duration,
    pub transfer_read_timeout: Duration,
    /// 单个分块的最小平均大小（字节）
    pub min_chunk_size: u64,
    pub min_workers: usize,
    pub max_workers: usize,
    /// 每个写入句柄的缓冲区大小（字节）
    pub buffer_size: usize,
    pub progress_interval: Duration,
    /// 下载完成后按期望哈希再校验一次
    pub verify_after_download: bool,
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            mirror_base: DEFAULT_MIRROR_BASE.to_string(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            context_path: PathBuf::from(DEFAULT_CONTEXT_PATH),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            probe_read_timeout: DEFAULT_PROBE_READ_TIMEOUT,
            transfer_read_timeout: DEFAULT_TRANSFER_READ_TIMEOUT,
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE,
            min_workers: DEFAULT_MIN_WORKERS,
            max_workers: DEFAULT_MAX_WORKERS,
            buffer_size: DEFAULT_BUFFER_SIZE,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            verify_after_download: true,
            user_agent: concat!("get_server/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetcherConfig {
    /// 以默认值为基础，读取 `GET_SERVER_*` 环境变量覆盖镜像、缓存目录与上下文路径。
    ///
    /// 空字符串视为未设置。
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(mirror) = non_empty_env(ENV_MIRROR_BASE) {
            config.mirror_base = mirror;
        }
        if let Some(dir) = non_empty_env(ENV_CACHE_DIR) {
            config.cache_dir = PathBuf::from(dir);
        }
        if let Some(path) = non_empty_env(ENV_CONTEXT_PATH) {
            config.context_path = PathBuf::from(path);
        }
        config
    }

    pub fn with_mirror_base(mut self, mirror_base: impl Into<String>) -> Self {
        self.mirror_base = mirror_base.into();
        self
    }

    pub fn with_cache_dir(mut self, cache_dir: impl AsRef<Path>) -> Self {
        self.cache_dir = cache_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_context_path(mut self, context_path: impl AsRef<Path>) -> Self {
        self.context_path = context_path.as_ref().to_path_buf();
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// 设置分块参数：最小平均分块大小与线程数上下限。
    pub fn with_chunking(mut self, min_chunk_size: u64, min_workers: usize, max_workers: usize) -> Self {
        self.min_chunk_size = min_chunk_size;
        self.min_workers = min_workers;
        self.max_workers = max_workers;
        self
    }

    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn with_verify_after_download(mut self, verify: bool) -> Self {
        self.verify_after_download = verify;
        self
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
