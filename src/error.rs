//! Error handling for fancy-forge
//!
//! Generation itself is total and never fails. Errors only come from building a
//! custom catalog, reading configuration, and the command-line front end.

use thiserror::Error;

/// Main error type for fancy-forge
#[derive(Error, Debug, Clone)]
pub enum ForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Catalog error ({section}): {message}")]
    Catalog { section: String, message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl ForgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a catalog error for the given catalog section
    pub fn catalog(section: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Catalog {
            section: section.into(),
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or FANCY_FORGE_* variables", message)
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Catalog { section, message } => {
                format!("❌ Symbol catalog is invalid ({}): {}\n💡 Every template needs exactly one {{{{text}}}} marker", section, message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}", path_info, message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

impl From<std::io::Error> for ForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<serde_json::Error> for ForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("JSON encoding failed: {}", err))
    }
}

impl From<tokio::task::JoinError> for ForgeError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("generation task failed: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ForgeError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::ForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::ForgeError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::ForgeError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::ForgeError::validation(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! catalog_error {
    ($section:expr, $msg:expr) => {
        $crate::error::ForgeError::catalog($section, $msg)
    };
    ($section:expr, $fmt:expr, $($arg:tt)*) => {
        $crate::error::ForgeError::catalog($section, format!($fmt, $($arg)*))
    };
}
