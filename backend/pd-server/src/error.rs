use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] pd_config::ConfigError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Static directory {path} does not exist")]
    StaticDir { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
