//! Notifier: turns an invocation event into a published topic message

pub mod handler;

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::clients::TopicPublisher;
use crate::core::config::AppConfig;
use crate::core::models::{InvocationEvent, NotificationRequest, PublishAcknowledgment};
use crate::errors::NotifierError;

pub use handler::handler;

type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct Notifier<P> {
    config: AppConfig,
    publisher: P,
    clock: Clock,
}

impl<P: TopicPublisher> Notifier<P> {
    pub fn new(config: AppConfig, publisher: P) -> Self {
        Self {
            config,
            publisher,
            clock: Arc::new(Utc::now),
        }
    }

    /// Replaces the wall clock used to stamp message bodies.
    #[must_use]
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Builds a fresh request for `event` and publishes it.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::Delivery`] unchanged from the publisher when
    /// the broker call fails.
    #[tracing::instrument(level = "info", skip(self, event))]
    pub async fn publish(
        &self,
        event: &InvocationEvent,
    ) -> Result<PublishAcknowledgment, NotifierError> {
        let request = NotificationRequest::build(event, &self.config, (self.clock)());
        info!(
            topic_arn = %request.topic_arn,
            classification = %request.classification,
            attach_classification = request.attach_classification,
            "Publishing notification"
        );

        let ack = self.publisher.publish(&request).await.map_err(|e| {
            error!("Publish failed: {}", e);
            e
        })?;

        info!(
            message_id = ack.message_id.as_deref().unwrap_or(""),
            sequence_number = ack.sequence_number.as_deref().unwrap_or(""),
            "Publish acknowledged: {:?}",
            ack
        );
        Ok(ack)
    }
}

impl<P: fmt::Debug> fmt::Debug for Notifier<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("config", &self.config)
            .field("publisher", &self.publisher)
            .finish_non_exhaustive()
    }
}
