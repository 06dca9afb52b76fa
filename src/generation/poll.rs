// SPDX-License-Identifier: MPL-2.0
//! Task completion polling and per-batch progress.
//!
//! Every task of a batch is polled on its own: once right away, then on a
//! fixed interval until the backend reports it completed. There is no retry
//! or backoff; a transport error ends polling for that task.

use super::backend::GenerationBackend;
use std::time::Duration;

/// Final state of one polled task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The task finished and its images are available.
    Succeeded,
    /// The task finished without producing images.
    Failed(String),
    /// Polling stopped because the backend could not be reached.
    Unreachable(String),
}

/// Polls `task_id` until it completes.
pub async fn poll_task<B>(backend: &B, task_id: &str, interval: Duration) -> TaskOutcome
where
    B: GenerationBackend,
{
    let mut checks: u32 = 0;
    loop {
        checks += 1;
        match backend.task_status(task_id).await {
            Ok(status) if status.completed => {
                tracing::debug!(task_id, checks, status = %status.status, "task completed");
                return if status.is_succeeded() {
                    TaskOutcome::Succeeded
                } else {
                    TaskOutcome::Failed(status.error.unwrap_or_else(|| "Unknown error".to_string()))
                };
            }
            Ok(status) => {
                tracing::trace!(task_id, checks, status = %status.status, "task still pending");
                tokio::time::sleep(interval).await;
            }
            Err(err) => {
                tracing::warn!(task_id, %err, "task status check failed");
                return TaskOutcome::Unreachable(err.to_string());
            }
        }
    }
}

/// Completed/total counter for the tasks of one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchProgress {
    batch_id: String,
    total: usize,
    completed: usize,
    requested_images: u32,
}

impl BatchProgress {
    #[must_use]
    pub fn new(batch_id: impl Into<String>, total: usize, requested_images: u32) -> Self {
        Self {
            batch_id: batch_id.into(),
            total,
            completed: 0,
            requested_images,
        }
    }

    /// Counts one finished task. Returns `true` exactly once, when the last
    /// task of the batch finishes.
    pub fn record(&mut self) -> bool {
        if self.completed >= self.total {
            return false;
        }
        self.completed += 1;
        self.completed == self.total
    }

    #[must_use]
    pub fn batch_id(&self) -> &str {
        &self.batch_id
    }

    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn requested_images(&self) -> u32 {
        self.requested_images
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.completed >= self.total
    }
}
