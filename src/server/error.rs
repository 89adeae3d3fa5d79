use thiserror::Error;

/// Raised by a [`ServerOption`](super::ServerOption) whose captured value
/// violates the option's constraint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OptionError {
    #[error("invalid value `{value}` for option `{option}`: {constraint}")]
    InvalidValue {
        option: &'static str,
        value: String,
        constraint: String,
    },
}

impl OptionError {
    pub fn invalid_value(
        option: &'static str,
        value: impl ToString,
        constraint: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            option,
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }

    /// Name of the option that rejected its value.
    pub fn option(&self) -> &'static str {
        match self {
            Self::InvalidValue { option, .. } => option,
        }
    }

    /// The rejected value, rendered as text.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidValue { value, .. } => value,
        }
    }
}
