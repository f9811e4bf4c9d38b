use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("Invalid argument for '{field}': '{value}' ({reason})")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ShapeError {
    pub fn invalid_argument(field: &str, value: &str, reason: impl Into<String>) -> Self {
        ShapeError::InvalidArgument {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ShapeError::InvalidArgument { .. } => ErrorCategory::Input,
            ShapeError::MissingConfig { .. }
            | ShapeError::InvalidConfigValue { .. }
            | ShapeError::ConfigError { .. } => ErrorCategory::Configuration,
            ShapeError::IoError(_) | ShapeError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI, derived from severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ShapeError::InvalidArgument { field, .. } => {
                format!("Use a whole number for {}, e.g. 10", field)
            }
            ShapeError::MissingConfig { field } => format!(
                "Provide --{} on the command line or set it under [shape] in the config file",
                field
            ),
            ShapeError::InvalidConfigValue { field, .. } => {
                format!("Check the value of '{}' in the config file", field)
            }
            ShapeError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            ShapeError::IoError(_) => "Check file permissions and that the path exists".to_string(),
            ShapeError::SerializationError(_) => {
                "Retry; if it persists, report it as a bug".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ShapeError::InvalidArgument { field, value, .. } => {
                format!("'{}' is not a valid {}", value, field)
            }
            ShapeError::MissingConfig { field } => format!("No {} was given", field),
            ShapeError::InvalidConfigValue { field, value, reason } => {
                format!("Config value '{}' for {} is not allowed: {}", value, field, reason)
            }
            ShapeError::ConfigError { message } => format!("Could not read configuration: {}", message),
            ShapeError::IoError(e) => format!("File or output error: {}", e),
            ShapeError::SerializationError(e) => format!("Could not encode output: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let err = ShapeError::invalid_argument("length", "abc", "not a number");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);

        let err = ShapeError::MissingConfig {
            field: "width".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 2);

        let err = ShapeError::from(std::io::Error::other("disk full"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_every_failure_exits_non_zero() {
        let errors = [
            ShapeError::invalid_argument("length", "x", "not a number"),
            ShapeError::MissingConfig {
                field: "length".to_string(),
            },
            ShapeError::InvalidConfigValue {
                field: "output.format".to_string(),
                value: "xml".to_string(),
                reason: "unsupported".to_string(),
            },
            ShapeError::ConfigError {
                message: "bad toml".to_string(),
            },
            ShapeError::from(std::io::Error::other("closed pipe")),
            ShapeError::from(serde_json::from_str::<i64>("nope").unwrap_err()),
        ];

        for err in &errors {
            assert!(
                (1..=3).contains(&err.exit_code()),
                "{:?} exits with {}",
                err,
                err.exit_code()
            );
        }
    }

    #[test]
    fn test_messages_name_the_field() {
        let err = ShapeError::invalid_argument("width", "7.5", "not a whole number");
        assert!(err.to_string().contains("width"));
        assert!(err.user_friendly_message().contains("7.5"));
        assert!(err.recovery_suggestion().contains("whole number for width"));
    }
}
