use std::fmt::Display;

use thiserror::Error;

/// Failures raised while binding a delimited list parameter.
///
/// A blank value is not a failure; it binds as "no value".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("Parameter cannot be bound as a list of scalars: {0}")]
    UnsupportedTargetType(String),

    #[error("Cannot convert '{token}' to {target}: {reason}")]
    Conversion {
        token: String,
        target: &'static str,
        reason: String,
    },
}

impl BindError {
    pub fn unsupported_target_type(message: impl Into<String>) -> Self {
        BindError::UnsupportedTargetType(message.into())
    }

    pub fn conversion<T>(token: &str, reason: impl Display) -> Self {
        BindError::Conversion {
            token: token.to_string(),
            target: short_type_name::<T>(),
            reason: reason.to_string(),
        }
    }

    /// The token that failed conversion, if any
    pub fn token(&self) -> Option<&str> {
        match self {
            BindError::Conversion { token, .. } => Some(token),
            BindError::UnsupportedTargetType(_) => None,
        }
    }
}

// "uuid::Uuid" -> "Uuid", "alloc::string::String" -> "String"
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    match full.find('<') {
        Some(_) => full,
        None => full.rsplit("::").next().unwrap_or(full),
    }
}
