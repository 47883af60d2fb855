use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Invalid severity: {0:?} (expected one of success, error, info, warning)")]
    InvalidSeverity(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, NotifyError>;
