use std::fmt;

/// Result type for Tabula operations
pub type Result<T> = std::result::Result<T, TabulaError>;

/// Main error type for the Tabula harness
#[derive(Debug, Clone)]
pub enum TabulaError {
    /// Malformed line in a run-configuration file
    ConfigParse {
        line: String,
    },

    /// Required configuration key is absent
    MissingKey(String),

    /// Configuration value could not be coerced to the requested type
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// Unknown agent name in configuration
    UnknownAgent(String),

    /// Unknown environment name in configuration
    UnknownEnvironment(String),

    /// Maze layout could not be used (empty file, ragged rows, ...)
    InvalidLayout(String),

    /// Action index outside the environment's action space
    InvalidAction {
        action: usize,
        action_count: usize,
    },

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for TabulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabulaError::ConfigParse { line } => {
                write!(f, "Malformed configuration line: {:?}", line)
            }
            TabulaError::MissingKey(key) => write!(f, "Missing configuration key: {}", key),
            TabulaError::InvalidValue { key, value, expected } => {
                write!(f, "Invalid value for {}: {:?} (expected {})", key, value, expected)
            }
            TabulaError::UnknownAgent(name) => write!(f, "Unknown agent name: {}", name),
            TabulaError::UnknownEnvironment(name) => {
                write!(f, "Unknown environment name: {}", name)
            }
            TabulaError::InvalidLayout(msg) => write!(f, "Invalid maze layout: {}", msg),
            TabulaError::InvalidAction { action, action_count } => {
                write!(f, "Invalid action {}: must be less than {}", action, action_count)
            }
            TabulaError::IoError(msg) => write!(f, "IO error: {}", msg),
            TabulaError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for TabulaError {}

// Conversion from std::io::Error
impl From<std::io::Error> for TabulaError {
    fn from(err: std::io::Error) -> Self {
        TabulaError::IoError(err.to_string())
    }
}

// Conversion from bincode::Error
impl From<bincode::Error> for TabulaError {
    fn from(err: bincode::Error) -> Self {
        TabulaError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl TabulaError {
    pub fn invalid_value<K, V>(key: K, value: V, expected: &'static str) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        TabulaError::InvalidValue {
            key: key.into(),
            value: value.into(),
            expected,
        }
    }
}
