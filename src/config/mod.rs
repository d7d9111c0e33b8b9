pub mod app_config;
pub mod chain_config;
pub mod poller_config;
pub mod sheets_config;
