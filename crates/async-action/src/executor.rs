use crate::error::{ActionError, BoxError};
use async_action_notify::{Notification, Notify};
use std::future::Future;
use tracing::{error, warn};

/// Messages used by the two notification branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOptions {
    /// Body of the notification sent when an action succeeds.
    pub success_message: String,
    /// Title of the notification sent when an action fails.
    pub error_message: String,
}

impl Default for ActionOptions {
    fn default() -> Self {
        Self {
            success_message: "Operation completed successfully!".to_string(),
            error_message: "An error occurred".to_string(),
        }
    }
}

/// Runs fallible async actions and remembers how the last one went.
///
/// Every [`execute`](Self::execute) call sends exactly one notification
/// through the injected backend: a neutral one carrying
/// [`ActionOptions::success_message`] on success, a destructive one titled
/// [`ActionOptions::error_message`] on failure. Failures are converted to
/// data - `execute` never propagates them - and the most recent failure is
/// readable through [`last_error`](Self::last_error) until the next
/// successful call clears it.
pub struct ActionExecutor<N> {
    notifier: N,
    options: ActionOptions,
    last_error: Option<ActionError>,
}

impl<N: Notify> ActionExecutor<N> {
    /// Executor with the default messages.
    pub fn new(notifier: N) -> Self {
        Self::with_options(notifier, ActionOptions::default())
    }

    pub fn with_options(notifier: N, options: ActionOptions) -> Self {
        Self {
            notifier,
            options,
            last_error: None,
        }
    }

    /// Runs `action` once and reports the outcome.
    ///
    /// Returns `Some(value)` if the action resolved, `None` if it failed.
    /// The failure itself is stored rather than returned; any value with a
    /// textual form can be used as the action's error type.
    ///
    /// The `&mut self` receiver means one executor cannot have two calls
    /// in flight at once; callers sharing an executor across tasks must
    /// serialize access themselves. The action is never retried and never
    /// cancelled: `execute` waits as long as the action takes.
    pub async fn execute<T, F, Fut, E>(&mut self, action: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<BoxError>,
    {
        match action().await {
            Ok(value) => {
                self.last_error = None;
                self.send(Notification::message(self.options.success_message.as_str()));
                Some(value)
            }
            Err(raw) => {
                let raw: BoxError = raw.into();
                error!("Error in async action: {}", raw);

                let err = ActionError::new(raw);
                self.send(Notification::alert(
                    self.options.error_message.as_str(),
                    err.message(),
                ));
                self.last_error = Some(err);
                None
            }
        }
    }

    /// The failure recorded by the most recent `execute` call, if any.
    pub fn last_error(&self) -> Option<&ActionError> {
        self.last_error.as_ref()
    }

    pub fn options(&self) -> &ActionOptions {
        &self.options
    }

    fn send(&self, notification: Notification) {
        if let Err(e) = self.notifier.notify(notification) {
            warn!("Failed to deliver notification: {}", e);
        }
    }
}
