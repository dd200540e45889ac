use std::fmt;

#[derive(Debug)]
pub enum ClientError {
    Transport {
        operation: String,
        source: reqwest::Error,
    },
    UnexpectedStatus {
        operation: String,
        status: u16,
        body: String,
    },
    Decode {
        status: u16,
        body: String,
        reason: String,
    },
    Config(ConfigError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidBaseUrl { url: String, reason: String },
    InvalidNumber { variable: String, value: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport { operation, source } => {
                write!(f, "Request '{operation}' failed before a response: {source}")
            }
            ClientError::UnexpectedStatus {
                operation,
                status,
                body,
            } => write!(
                f,
                "Request '{operation}' returned unexpected status {status}: {}",
                body.trim()
            ),
            ClientError::Decode {
                status,
                body,
                reason,
            } => write!(
                f,
                "Failed to decode response body (status {status}): {reason}; raw body: {}",
                body.trim()
            ),
            ClientError::Config(err) => write!(f, "Configuration error: {err}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl { url, reason } => {
                write!(f, "Invalid base URL '{url}': {reason}")
            }
            ConfigError::InvalidNumber { variable, value } => {
                write!(f, "{variable} must be a non-negative integer (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Transport { source, .. } => Some(source),
            ClientError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for ClientError {
    fn from(err: ConfigError) -> Self {
        ClientError::Config(err)
    }
}

impl ClientError {
    pub fn transport(operation: &str, source: reqwest::Error) -> Self {
        ClientError::Transport {
            operation: operation.to_string(),
            source,
        }
    }

    /// Status code of the response that caused the error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::UnexpectedStatus { status, .. } | ClientError::Decode { status, .. } => {
                Some(*status)
            }
            ClientError::Transport { .. } | ClientError::Config(_) => None,
        }
    }
}
