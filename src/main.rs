use std::process::ExitCode;

use get_server::config::FetcherConfig;
use get_server::run_startup_check;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let config = FetcherConfig::from_env();
    match run_startup_check(&config).await {
        Some(_) => ExitCode::SUCCESS,
        None => ExitCode::FAILURE,
    }
}

/// 默认 info 级别，可用 `RUST_LOG` 覆盖。
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
