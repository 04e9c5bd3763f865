//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on the contact directory or the
/// birthday store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// A value failed format validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No contact with this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact exists but does not carry this phone number
    #[error("Phone {phone} not found for contact {name}")]
    PhoneNotFound { name: String, phone: String },

    /// No birthday registered under this name
    #[error("User not found: {0}")]
    UserNotFound(String),
}

impl AssistantError {
    /// Whether this error comes from a failed lookup rather than bad input.
    pub fn is_not_found(&self) -> bool {
        !matches!(self, Self::Validation(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AssistantError
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
