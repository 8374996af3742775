//! Topic notifier - a Lambda function that publishes a notification to an SNS topic.
//!
//! Each invocation builds a timestamped message with a fixed subject and
//! publishes it to the configured topic. The event's optional `type` field is
//! attached as the `notificationType` message attribute (falling back to
//! `"default"`), unless attribute tagging is switched off in configuration.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - SNS for fan-out to topic subscribers
//! - aws-sdk-sns for the publish call
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use topic_notifier::clients::SnsPublisher;
//! use topic_notifier::core::config::AppConfig;
//! use topic_notifier::core::models::InvocationEvent;
//! use topic_notifier::notifier::Notifier;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     topic_notifier::setup_logging();
//!
//!     let config = AppConfig {
//!         topic_arn: "arn:aws:sns:us-east-1:123456789012:notifications".to_string(),
//!         attach_classification: true,
//!     };
//!     let shared_config = aws_config::from_env().load().await;
//!     let notifier = Notifier::new(config, SnsPublisher::new(&shared_config));
//!
//!     let event = InvocationEvent {
//!         notification_type: Some("alert".to_string()),
//!     };
//!     let ack = notifier.publish(&event).await?;
//!     println!("Published message {:?}", ack.message_id);
//!
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod core;
pub mod errors;
pub mod notifier;

pub use errors::NotifierError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs integration. The level comes from `RUST_LOG` and defaults to `info`.
/// Calling it more than once is harmless; later calls are ignored.
///
/// # Example
///
/// ```
/// topic_notifier::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
