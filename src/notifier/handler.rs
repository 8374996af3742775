use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::Notifier;
use crate::clients::TopicPublisher;
use crate::core::models::{InvocationEvent, PublishAcknowledgment};
use crate::errors::NotifierError;

pub use self::function_handler as handler;

/// Lambda handler for the publisher entrypoint.
///
/// # Errors
///
/// Fails the invocation if the payload is not an event object or the publish
/// call is rejected. Nothing is retried here.
pub async fn function_handler<P: TopicPublisher>(
    notifier: &Notifier<P>,
    event: LambdaEvent<Value>,
) -> Result<PublishAcknowledgment, Error> {
    #[cfg(feature = "debug-logs")]
    info!("Publisher Lambda received event payload: {:?}", event.payload);
    #[cfg(not(feature = "debug-logs"))]
    info!(
        request_id = %event.context.request_id,
        "Publisher Lambda received event"
    );

    let invocation = parse_event(event.payload).map_err(|e| {
        error!("Event parse error: {}", e);
        e
    })?;

    Ok(notifier.publish(&invocation).await?)
}

/// Reads the optional `type` field; a `null` payload counts as an empty event.
///
/// # Errors
///
/// Returns [`NotifierError::Parse`] for non-object payloads or a non-string `type`.
pub fn parse_event(payload: Value) -> Result<InvocationEvent, NotifierError> {
    match payload {
        Value::Null => Ok(InvocationEvent::default()),
        Value::Object(_) => Ok(serde_json::from_value(payload)?),
        other => Err(NotifierError::Parse(format!(
            "expected an event object, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_event_reads_type() {
        let event = parse_event(json!({"type": "alert", "source": "cron"})).unwrap();
        assert_eq!(event.classification(), "alert");
    }

    #[test]
    fn test_parse_event_defaults_when_missing_or_null() {
        assert_eq!(parse_event(json!({})).unwrap().classification(), "default");
        assert_eq!(parse_event(json!({"type": null})).unwrap().classification(), "default");
        assert_eq!(parse_event(Value::Null).unwrap().classification(), "default");
    }

    #[test]
    fn test_parse_event_rejects_malformed_payloads() {
        assert!(matches!(parse_event(json!([1, 2])), Err(NotifierError::Parse(_))));
        assert!(matches!(parse_event(json!({"type": 7})), Err(NotifierError::Parse(_))));
    }
}
