use crate::internal::transfer::structs::chunk_planner::ChunkPlanner;
use crate::internal::transfer::structs::chunk_range::ChunkRange;
use crate::internal::transfer::structs::server_capabilities::ServerCapabilities;
use crate::internal::transfer::structs::transfer_outcome::StrategyKind;

/// 本次下载采用的传输方式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferStrategy {
    /// 单连接顺序下载；`expected_size` 仅用于进度展示
    SingleStream { expected_size: Option<u64> },
    /// 多连接分块下载，`plan` 覆盖 `[0, total_size)`
    MultiStream {
        total_size: u64,
        plan: Vec<ChunkRange>,
    },
}

impl TransferStrategy {
    /// 支持 Range、大小已知且规划出至少两个分块时选择多线程，否则单线程。
    pub fn select(capabilities: &ServerCapabilities, planner: &ChunkPlanner) -> Self {
        let expected_size = capabilities.total_size;
        let Some(total_size) = capabilities.ranged_size() else {
            return Self::SingleStream { expected_size };
        };
        let plan = planner.plan(total_size);
        if plan.len() < 2 {
            return Self::SingleStream { expected_size };
        }
        Self::MultiStream { total_size, plan }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::SingleStream { .. } => StrategyKind::Single,
            Self::MultiStream { .. } => StrategyKind::Multi,
        }
    }
}
