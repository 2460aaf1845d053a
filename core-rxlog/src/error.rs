use bridge_traits::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Capability missing: {capability} - {message}")]
    CapabilityMissing { capability: String, message: String },

    #[error("Log sink error: {0}")]
    Sink(#[from] BridgeError),
}

pub type Result<T> = std::result::Result<T, Error>;
