use thiserror::Error;

/// Errors that can occur during notification delivery.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}

pub type Result<T> = std::result::Result<T, NotifyError>;
