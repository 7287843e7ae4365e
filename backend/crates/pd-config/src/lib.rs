mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod store_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use store_config::StoreConfig;

pub const CONFIG_DIR_ENV: &str = "PD_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".pd";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_LOGIN_EMAIL: &str = "admin@example.com";
const DEFAULT_LOGIN_PASSWORD: &str = "password";
const DEFAULT_LOGIN_TOKEN: &str = "sample-jwt-token-would-go-here";

const DEFAULT_SEED_SAMPLE_DATA: bool = true;
const DEFAULT_ID_OFFSET: u64 = 1288;
const MAX_ID_OFFSET: u64 = u32::MAX as u64;
