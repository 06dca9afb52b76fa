// SPDX-License-Identifier: MPL-2.0
//! Scripted in-memory backend for unit tests.

use super::backend::{BackendError, BackendResult, GenerationBackend};
use super::types::{Batch, GenerationRequest, Submission, TaskStatus};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub(crate) struct FakeBackend {
    pub submission: Mutex<Option<BackendResult<Submission>>>,
    pub statuses: Mutex<HashMap<String, VecDeque<BackendResult<TaskStatus>>>>,
    pub batches: Mutex<Vec<Batch>>,
    pub images: Mutex<HashMap<String, Vec<u8>>>,
    pub status_calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the responses `task_status(task_id)` will return, in order.
    /// The last response repeats once the queue is drained.
    pub fn script(&self, task_id: &str, responses: Vec<BackendResult<TaskStatus>>) {
        self.statuses
            .lock()
            .unwrap()
            .insert(task_id.to_string(), responses.into());
    }

    pub fn status_calls(&self) -> Vec<String> {
        self.status_calls.lock().unwrap().clone()
    }
}

pub(crate) fn pending() -> BackendResult<TaskStatus> {
    Ok(TaskStatus {
        completed: false,
        status: "processing".to_string(),
        error: None,
    })
}

pub(crate) fn done(status: &str, error: Option<&str>) -> BackendResult<TaskStatus> {
    Ok(TaskStatus {
        completed: true,
        status: status.to_string(),
        error: error.map(str::to_string),
    })
}

impl GenerationBackend for FakeBackend {
    async fn submit(&self, _request: &GenerationRequest) -> BackendResult<Submission> {
        self.submission
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(BackendError::Transport("no submission scripted".into())))
    }

    async fn task_status(&self, task_id: &str) -> BackendResult<TaskStatus> {
        self.status_calls.lock().unwrap().push(task_id.to_string());
        let mut statuses = self.statuses.lock().unwrap();
        let queue = statuses
            .get_mut(task_id)
            .ok_or_else(|| BackendError::Status(404))?;
        if queue.len() > 1 {
            queue.pop_front().unwrap_or_else(pending)
        } else {
            queue.front().cloned().unwrap_or_else(pending)
        }
    }

    async fn list_batches(&self) -> BackendResult<Vec<Batch>> {
        Ok(self.batches.lock().unwrap().clone())
    }

    async fn fetch_image(&self, filename: &str) -> BackendResult<Vec<u8>> {
        self.images
            .lock()
            .unwrap()
            .get(filename)
            .cloned()
            .ok_or(BackendError::Status(404))
    }

    fn image_url(&self, filename: &str) -> String {
        format!("http://fake/output/{filename}")
    }
}
