use std::env;

use crate::errors::NotifierError;

pub const TOPIC_ARN_VAR: &str = "SNS_TOPIC_ARN";
/// Name used by older deployments of the publisher stack.
pub const LEGACY_TOPIC_VAR: &str = "SNStopic";
pub const ATTRIBUTE_TOGGLE_VAR: &str = "NOTIFICATION_TYPE_ATTRIBUTE";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub topic_arn: String,
    /// Send the classification as a `notificationType` message attribute.
    pub attach_classification: bool,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if no topic is configured or the attribute toggle is
    /// not a recognised boolean.
    pub fn from_env() -> Result<Self, NotifierError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifierError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let topic_arn = lookup(TOPIC_ARN_VAR)
            .or_else(|| lookup(LEGACY_TOPIC_VAR))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                NotifierError::Config(format!("{TOPIC_ARN_VAR} (or {LEGACY_TOPIC_VAR}) is not set"))
            })?;

        let attach_classification = match lookup(ATTRIBUTE_TOGGLE_VAR) {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                NotifierError::Config(format!("{ATTRIBUTE_TOGGLE_VAR}: invalid boolean '{raw}'"))
            })?,
            None => true,
        };

        Ok(Self {
            topic_arn,
            attach_classification,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
