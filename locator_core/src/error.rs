use thiserror::Error;

pub type LocatorResult<T> = Result<T, LocatorError>;

/// Registry-wide error.
///
/// Every variant is a programmer error: callers should surface it, not retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocatorError {
    #[error("locator for `{capability}` used before init()")]
    InvalidState { capability: &'static str },

    #[error("service type `{type_name}` is not managed by this database")]
    UnmanagedType { type_name: &'static str },

    #[error("service type `{type_name}` is already managed by this database")]
    DuplicateType { type_name: &'static str },

    #[error("no locator serves capability `{name}`")]
    UnknownCapability { name: String },

    #[error("config error: {0}")]
    Config(String),
}
