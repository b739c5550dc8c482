//! Sequential multi-service workflows without rollback.
//!
//! A [`Saga`] runs its steps strictly in order and remembers which ones
//! took effect. When a later step fails, the earlier ones stay committed:
//! the error is wrapped in [`AdminError::PartialFailure`] so the caller can
//! see exactly which side effects are in place. A failure of the very first
//! step is returned unchanged, since nothing was committed.

use std::future::Future;

use crate::error::AdminError;

/// In-progress multi-step workflow for one merchant.
#[derive(Debug)]
pub struct Saga {
    workflow: &'static str,
    merchant_id: i64,
    completed: Vec<&'static str>,
}

impl Saga {
    /// Starts a workflow named `workflow` for `merchant_id`.
    #[must_use]
    pub const fn new(workflow: &'static str, merchant_id: i64) -> Self {
        Self {
            workflow,
            merchant_id,
            completed: Vec::new(),
        }
    }

    /// Runs one step and records it as committed on success.
    ///
    /// # Errors
    ///
    /// Returns the step's error, wrapped in [`AdminError::PartialFailure`]
    /// if earlier steps already committed.
    pub async fn step<T, F>(&mut self, name: &'static str, action: F) -> Result<T, AdminError>
    where
        F: Future<Output = Result<T, AdminError>>,
    {
        match action.await {
            Ok(value) => {
                tracing::info!(
                    workflow = self.workflow,
                    merchant_id = self.merchant_id,
                    step = name,
                    "step committed"
                );
                self.completed.push(name);
                Ok(value)
            }
            Err(source) => {
                tracing::error!(
                    workflow = self.workflow,
                    merchant_id = self.merchant_id,
                    step = name,
                    committed = ?self.completed,
                    error = %source,
                    "step failed"
                );
                if self.completed.is_empty() {
                    Err(source)
                } else {
                    Err(AdminError::PartialFailure {
                        workflow: self.workflow,
                        completed: self.completed.clone(),
                        failed: name,
                        source: Box::new(source),
                    })
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_step_failure_is_returned_unchanged() {
        let mut saga = Saga::new("approve_merchant", 1);
        let result: Result<(), _> = saga
            .step("kyc_completed", async {
                Err(AdminError::Validation("nope".to_string()))
            })
            .await;
        assert!(matches!(result, Err(AdminError::Validation(_))));
    }

    #[tokio::test]
    async fn later_failure_reports_committed_steps() {
        let mut saga = Saga::new("approve_merchant", 1);
        let first = saga.step("kyc_completed", async { Ok(()) }).await;
        assert!(first.is_ok());

        let second: Result<(), _> = saga
            .step("activate_merchant", async {
                Err(AdminError::Internal("down".to_string()))
            })
            .await;

        let Err(AdminError::PartialFailure {
            completed, failed, ..
        }) = second
        else {
            panic!("expected partial failure");
        };
        assert_eq!(completed, vec!["kyc_completed"]);
        assert_eq!(failed, "activate_merchant");
    }
}
