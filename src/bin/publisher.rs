use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use topic_notifier::clients::SnsPublisher;
use topic_notifier::core::config::AppConfig;
use topic_notifier::notifier::{Notifier, handler};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    topic_notifier::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    // One client for the life of the process; invocations borrow it.
    let shared_config = aws_config::from_env().load().await;
    let notifier = Notifier::new(config, SnsPublisher::new(&shared_config));
    info!(
        topic_arn = %notifier.config().topic_arn,
        attach_classification = notifier.config().attach_classification,
        "Publisher initialised"
    );

    let notifier = &notifier;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(notifier, event).await
    }))
    .await
}
