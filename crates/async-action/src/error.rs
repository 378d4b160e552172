use thiserror::Error;

/// Boxed failure value accepted from an action.
///
/// Plain `&str` and `String` failures convert through the std `From`
/// impls, so actions are not forced to define an error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A failed action, normalized to a message plus the raw failure value.
///
/// There is exactly one error kind: "the action failed". The original
/// failure is preserved as the [`source`](std::error::Error::source) of
/// this error.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ActionError {
    message: String,
    #[source]
    source: BoxError,
}

impl ActionError {
    pub fn new(raw: impl Into<BoxError>) -> Self {
        let source = raw.into();
        Self {
            message: source.to_string(),
            source,
        }
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn message_from_error_value() {
        let err = ActionError::new(io::Error::other("disk full"));
        assert_eq!(err.message(), "disk full");
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn message_from_plain_string() {
        let err = ActionError::new("plain string");
        assert_eq!(err.message(), "plain string");
    }

    #[test]
    fn source_preserves_original() {
        let err = ActionError::new(io::Error::other("disk full"));
        let source = err.source().expect("source should be set");
        assert!(source.downcast_ref::<io::Error>().is_some());
    }
}
