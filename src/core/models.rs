use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::AppConfig;

pub const NOTIFICATION_SUBJECT: &str = "New message from publisher";
pub const CLASSIFICATION_ATTRIBUTE: &str = "notificationType";
pub const DEFAULT_CLASSIFICATION: &str = "default";
pub const STRING_DATA_TYPE: &str = "String";

/// Human-readable stamp embedded in every message body.
///
/// Resolution is one second, matching the publisher's historical message
/// format; two invocations inside the same second carry the same body text.
/// Each invocation still reads the clock afresh.
const TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Payload a publisher invocation receives. Only `type` is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvocationEvent {
    #[serde(rename = "type", default)]
    pub notification_type: Option<String>,
}

impl InvocationEvent {
    #[must_use]
    pub fn classification(&self) -> &str {
        self.notification_type
            .as_deref()
            .unwrap_or(DEFAULT_CLASSIFICATION)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageAttribute {
    pub data_type: String,
    pub string_value: String,
}

#[derive(Debug, Clone)]
pub struct NotificationRequest {
    pub message: String,
    pub subject: String,
    pub topic_arn: String,
    pub classification: String,
    pub attach_classification: bool,
}

impl NotificationRequest {
    #[must_use]
    pub fn build(event: &InvocationEvent, config: &AppConfig, now: DateTime<Utc>) -> Self {
        Self {
            message: format!("Message at {}", now.format(TIMESTAMP_FORMAT)),
            subject: NOTIFICATION_SUBJECT.to_string(),
            topic_arn: config.topic_arn.clone(),
            classification: event.classification().to_string(),
            attach_classification: config.attach_classification,
        }
    }

    /// Attributes to send alongside the message; empty when classification
    /// tagging is disabled.
    #[must_use]
    pub fn message_attributes(&self) -> Vec<(&'static str, MessageAttribute)> {
        if !self.attach_classification {
            return Vec::new();
        }
        vec![(
            CLASSIFICATION_ATTRIBUTE,
            MessageAttribute {
                data_type: STRING_DATA_TYPE.to_string(),
                string_value: self.classification.clone(),
            },
        )]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishAcknowledgment {
    pub message_id: Option<String>,
    pub sequence_number: Option<String>,
}
