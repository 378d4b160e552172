//! Run an async operation once, remember its last error, and tell the
//! user how it went.
//!
//! This crate provides:
//! - [`ActionExecutor`]: wraps a fallible async action, sends one
//!   notification per call, and exposes the most recent failure
//! - [`ActionOptions`]: the success/error messages shown to the user
//! - [`ActionError`]: the normalized failure kept as the held error state
//!
//! ```
//! use async_action::ActionExecutor;
//! use async_action_notify::LogNotifier;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut executor = ActionExecutor::new(LogNotifier::new());
//! let value = executor
//!     .execute(|| async { Ok::<_, std::io::Error>(42) })
//!     .await;
//! assert_eq!(value, Some(42));
//! assert!(executor.last_error().is_none());
//! # }
//! ```

pub mod error;
pub mod executor;

pub use error::{ActionError, BoxError};
pub use executor::{ActionExecutor, ActionOptions};
