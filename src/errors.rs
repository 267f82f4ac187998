use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("Failed to serialize notification: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to send message to queue: {0}")]
    Queue(#[source] BoxError),

    #[error("Invalid hook configuration: {0}")]
    ConfigError(String),

    #[error("Failed to decode transport payload: {0}")]
    DecodeError(String),
}

impl HookError {
    /// Wraps any queue client failure, keeping it reachable through `source()`.
    pub fn queue<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        HookError::Queue(Box::new(error))
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<aws_sdk_sqs::error::SdkError<E, R>> for HookError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    fn from(error: aws_sdk_sqs::error::SdkError<E, R>) -> Self {
        HookError::queue(error)
    }
}

impl From<base64::DecodeError> for HookError {
    fn from(error: base64::DecodeError) -> Self {
        HookError::DecodeError(error.to_string())
    }
}

impl From<std::string::FromUtf8Error> for HookError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        HookError::DecodeError(error.to_string())
    }
}
