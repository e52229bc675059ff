use thiserror::Error;

#[derive(Error, Debug)]
pub enum KindredError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, KindredError>;

// Helper conversions
impl From<config::ConfigError> for KindredError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}
