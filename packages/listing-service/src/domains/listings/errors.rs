use thiserror::Error;

/// Caller input that failed one or more validation rules.
///
/// Carries every message that applied, in rule order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .messages.join("; "))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    pub fn single(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

/// Errors raised while creating or listing listings
#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Insert did not return a listing id")]
    MissingId,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ListingError {
    /// Whether the persistence layer, rather than the caller, is at fault.
    pub fn is_storage_fault(&self) -> bool {
        matches!(self, ListingError::MissingId | ListingError::Database(_))
    }
}
