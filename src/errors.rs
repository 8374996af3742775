use aws_sdk_sns::error::{BuildError, DisplayErrorContext, SdkError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Failed to deliver message to topic: {0}")]
    Delivery(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse invocation event: {0}")]
    Parse(String),

    #[error("Failed to build message attribute: {0}")]
    Attribute(String),
}

impl From<serde_json::Error> for NotifierError {
    fn from(error: serde_json::Error) -> Self {
        NotifierError::Parse(error.to_string())
    }
}

impl From<BuildError> for NotifierError {
    fn from(error: BuildError) -> Self {
        NotifierError::Attribute(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<SdkError<E, R>> for NotifierError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    fn from(error: SdkError<E, R>) -> Self {
        NotifierError::Delivery(DisplayErrorContext(&error).to_string())
    }
}
