use thiserror::Error;

pub type Result<T> = std::result::Result<T, OsiError>;

/// Validation failures for user supplied layer numbers and category names.
///
/// The `Display` text is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OsiError {
    #[error("Invalid layer number: {0}. Must be 1–7.")]
    InvalidLayer(u8),

    #[error("'{0}' is not a layer number. Must be 1–7.")]
    NotANumber(String),

    #[error("Unknown protocol category: '{0}'")]
    UnknownCategory(String),
}
