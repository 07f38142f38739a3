use std::fmt;

use crate::error::AppError;

/// A blocking alert shown to the user: a title and a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new("Success", message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("Validation", message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new("Info", message)
    }

    /// Error notice carrying the server's message when it sent one, else `fallback`.
    pub fn from_error(err: &AppError, fallback: &str) -> Self {
        Self::error(err.server_message().unwrap_or(fallback))
    }

    pub fn is_error(&self) -> bool {
        self.title == "Error"
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.title, self.message)
    }
}
