pub mod chunk_planner;
pub mod chunk_range;
pub mod download_progress;
pub mod fetch_error;
pub mod hook_adapters;
pub mod hooks_container;
pub mod http_clients;
pub mod server_capabilities;
pub mod transfer_coordinator;
pub mod transfer_outcome;
pub mod transfer_request;
pub mod transfer_strategy;

pub use chunk_planner::ChunkPlanner;
pub use chunk_range::ChunkRange;
pub use download_progress::DownloadProgress;
pub use fetch_error::FetchError;
pub use http_clients::HttpClients;
pub use server_capabilities::ServerCapabilities;
pub use transfer_coordinator::TransferCoordinator;
pub use transfer_outcome::{StrategyKind, TransferOutcome};
pub use transfer_request::TransferRequest;
pub use transfer_strategy::TransferStrategy;
