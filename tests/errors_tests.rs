use std::error::Error;
use topic_notifier::errors::NotifierError;

#[test]
fn test_notifier_error_implements_error_trait() {
    fn assert_error<T: Error + Send + Sync>(_: &T) {}

    let error = NotifierError::Parse("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_notifier_error_display() {
    let error = NotifierError::Delivery("AuthorizationError".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to deliver message to topic: AuthorizationError"
    );

    let error = NotifierError::Config("SNS_TOPIC_ARN is not set".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid configuration: SNS_TOPIC_ARN is not set"
    );
}

#[test]
fn test_notifier_error_from_conversions() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(
        NotifierError::from(json_err),
        NotifierError::Parse(_)
    ));
}

#[test]
fn test_notifier_error_converts_to_lambda_error() {
    let err: lambda_runtime::Error = NotifierError::Delivery("throttled".to_string()).into();
    assert_eq!(err.to_string(), "Failed to deliver message to topic: throttled");
}
