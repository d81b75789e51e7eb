use thiserror::Error;

/// Structured error hierarchy for Headline Spark.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum SparkError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    #[error("event log: {0}")]
    Event(#[from] EventError),

    // Generic fallthrough (wraps anyhow for interop)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("provider {provider} request failed: {message}")]
    Request { provider: String, message: String },

    #[error("provider {provider} authentication failed")]
    Auth { provider: String },
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("append failed: {0}")]
    Append(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, SparkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_displays_correctly() {
        let err = SparkError::Config(ConfigError::Validation("temperature out of range".into()));
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn llm_auth_names_provider() {
        let err = SparkError::Llm(LlmError::Auth {
            provider: "deepseek".into(),
        });
        assert!(err.to_string().contains("deepseek"));
    }

    #[test]
    fn anyhow_interop() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let spark_err: SparkError = anyhow_err.into();
        assert!(spark_err.to_string().contains("something went wrong"));
    }

    #[test]
    fn event_error_displays_correctly() {
        let err = SparkError::Event(EventError::Append("disk full".into()));
        assert!(err.to_string().contains("disk full"));
    }
}
