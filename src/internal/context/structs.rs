pub mod download_context;
