use thiserror::Error;

/// Errors that can occur when talking to the Portkey gateway.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Gateway error: {status} - {message}")]
    Service { status: u16, message: String },

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unexpected response shape: {0}")]
    ResponseShape(String),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),
}

impl Error {
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Error::Service {
            status,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Error::Auth(message.into())
    }

    pub fn response_shape(message: impl Into<String>) -> Self {
        Error::ResponseShape(message.into())
    }
}
