pub mod fetcher_config;
