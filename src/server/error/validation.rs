use thiserror::Error;

/// A schema rule violated by a candidate record.
///
/// Only the first failing rule is reported; its `Display` output is the
/// `message` returned to the client.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field}: Path `{field}` is required.")]
    Required { field: &'static str },

    #[error("{field}: must be at least {min} characters long.")]
    TooShort { field: &'static str, min: usize },

    #[error("{field}: must be at most {max} characters long.")]
    TooLong { field: &'static str, max: usize },

    #[error("minMaxExample: Too few stars, got {0}")]
    TooFewStars(i32),

    #[error("minMaxExample: Too many stars, got {0}")]
    TooManyStars(i32),

    #[error("enumExample: {0} is not supported")]
    NotSupported(String),

    #[error("customValidatorExample: {0} is not an even number!")]
    NotEven(i32),

    #[error("dateExample: cannot be earlier than the current date!")]
    DateInPast,

    #[error("dateExample: only dates in the 21st century are accepted!")]
    DateTooLate,

    #[error("FK_neve: no document with id {0} exists in the one-side collection")]
    UnknownOwner(i32),

    #[error("name: a document named '{0}' already exists")]
    DuplicateName(String),

    #[error("Unknown sorting field '{0}'")]
    UnknownSortField(String),
}
