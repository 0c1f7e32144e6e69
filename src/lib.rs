/// 内部实现模块
mod internal;


/// 导出核心入口函数
pub use internal::entrance::ensure_artifact::*;

/// 运行配置：镜像、缓存目录、超时与分块参数
pub mod config {
    pub use crate::internal::config::structs::fetcher_config::*;
}

/// 外部下载上下文（期望哈希与文件名）
pub mod context {
    pub use crate::internal::context::structs::download_context::DownloadContext;
}

/// 本地文件哈希校验
pub mod verify {
    pub use crate::internal::verify::functions::hash_file::*;
}

/// 响应式状态（下载进度的发布与监听）
pub mod states {
    pub use crate::internal::states::reactive_core::*;
}

/// 下载引擎：重定向解析、能力探测、分块规划与传输调度
pub mod transfer {
    use crate::internal;
    // 结构体模型
    pub use internal::transfer::structs::*;
    // 重定向与探测
    pub use internal::transfer::functions::probe_capabilities::{
        content_length, probe_capabilities,
    };
    pub use internal::transfer::functions::resolve_redirects::resolve_redirects;
    // 钩子
    pub use internal::transfer::traits::download_hook::{DownloadHook, HookAbort};
}
