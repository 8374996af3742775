//! SNS client module
//!
//! Wraps the single `Publish` call the notifier makes. No retries: a failed
//! call is returned to the caller as-is.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_sns::Client;
use aws_sdk_sns::operation::publish::PublishOutput;
use aws_sdk_sns::types::MessageAttributeValue;

use crate::core::models::{NotificationRequest, PublishAcknowledgment};
use crate::errors::NotifierError;

/// Anything that can put a [`NotificationRequest`] on a topic.
#[async_trait]
pub trait TopicPublisher: Send + Sync {
    /// # Errors
    ///
    /// Returns [`NotifierError::Delivery`] if the broker rejects the message
    /// or cannot be reached.
    async fn publish(
        &self,
        request: &NotificationRequest,
    ) -> Result<PublishAcknowledgment, NotifierError>;
}

/// SNS-backed publisher. Build once per process and share by reference.
#[derive(Debug, Clone)]
pub struct SnsPublisher {
    client: Client,
}

impl SnsPublisher {
    #[must_use]
    pub fn new(shared_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(shared_config),
        }
    }

    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TopicPublisher for SnsPublisher {
    async fn publish(
        &self,
        request: &NotificationRequest,
    ) -> Result<PublishAcknowledgment, NotifierError> {
        let attributes = sns_attributes(request)?;

        let output = self
            .client
            .publish()
            .topic_arn(&request.topic_arn)
            .message(&request.message)
            .subject(&request.subject)
            .set_message_attributes(attributes)
            .send()
            .await?;

        Ok(acknowledgment_from(&output))
    }
}

/// Maps the request's attributes onto SNS types, or `None` when there are none.
///
/// # Errors
///
/// Returns [`NotifierError::Attribute`] if the SDK rejects an attribute.
pub fn sns_attributes(
    request: &NotificationRequest,
) -> Result<Option<HashMap<String, MessageAttributeValue>>, NotifierError> {
    let attributes = request.message_attributes();
    if attributes.is_empty() {
        return Ok(None);
    }

    let mut mapped = HashMap::with_capacity(attributes.len());
    for (name, attribute) in attributes {
        let value = MessageAttributeValue::builder()
            .data_type(attribute.data_type)
            .string_value(attribute.string_value)
            .build()?;
        mapped.insert(name.to_string(), value);
    }
    Ok(Some(mapped))
}

#[must_use]
pub fn acknowledgment_from(output: &PublishOutput) -> PublishAcknowledgment {
    PublishAcknowledgment {
        message_id: output.message_id().map(str::to_string),
        sequence_number: output.sequence_number().map(str::to_string),
    }
}
