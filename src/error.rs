use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdminError>;

/// Errors surfaced by the admin operations. The FFI layer never exposes
/// these directly; it logs them and returns null/false to the caller.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    #[error("Invalid client handle")]
    InvalidHandle,

    #[error("Cluster metadata incomplete: {0}")]
    Metadata(String),
}

impl AdminError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::Metadata(msg.into())
    }
}
