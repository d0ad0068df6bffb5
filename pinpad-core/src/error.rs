/// Reasons a string is not a valid PIN candidate.
///
/// Length is checked before content, so a string that is both too short and
/// non-numeric reports [`PinError::WrongLength`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PinError {
    /// The candidate does not have exactly [`crate::PIN_LENGTH`] characters.
    #[error("PIN must be exactly 4 digits")]
    WrongLength { len: usize },

    /// The candidate contains a character outside `0`–`9`.
    #[error("PIN must contain only numbers")]
    NonDigit,
}

/// Errors produced by a [`crate::Storage`] implementation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StorageError {
    /// The backing store could not be reached or its state is unusable.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A record violated a uniqueness constraint.
    #[error("duplicate {field}: {value}")]
    Duplicate { field: &'static str, value: String },
}
