//! Error types for serious-core.

use thiserror::Error;

/// Result type alias using SchedulerError.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors raised while building the scheduler from its parameters.
#[derive(Debug, Error, PartialEq)]
pub enum SchedulerError {
    #[error("reviews parameter must be at least 1, got {0}")]
    InvalidReviewsParam(u32),

    #[error("hours parameter must be a positive number, got {0}")]
    InvalidHoursParam(f64),
}

/// Errors that end a review session early.
///
/// `E` is the error type of the storage backend driving the session.
#[derive(Debug, Error)]
pub enum SessionError<E>
where
    E: std::error::Error + 'static,
{
    #[error("storage error: {0}")]
    Store(#[source] E),

    #[error("prompt error: {0}")]
    Prompt(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_reviews_param() {
        let error = SchedulerError::InvalidReviewsParam(0);
        assert_eq!(
            error.to_string(),
            "reviews parameter must be at least 1, got 0"
        );
    }

    #[test]
    fn test_error_display_prompt() {
        let error: SessionError<std::fmt::Error> = SessionError::Prompt(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input closed",
        ));
        assert_eq!(error.to_string(), "prompt error: input closed");
    }
}
