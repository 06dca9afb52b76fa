// SPDX-License-Identifier: MPL-2.0
//! Backend port for the generation workflow.
//!
//! The application only talks to the backend through [`GenerationBackend`],
//! so the polling and gallery logic can be exercised with an in-memory fake.

use super::types::{Batch, GenerationRequest, Submission, TaskStatus};
use std::fmt;
use std::future::Future;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The request could not be sent or the connection failed.
    Transport(String),
    /// The backend answered with a non-success HTTP status.
    Status(u16),
    /// The response body was not what the endpoint promises.
    Decode(String),
    /// The backend accepted the request but refused to create tasks.
    Rejected(String),
    /// The base URL or a derived URL is malformed.
    InvalidUrl(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Transport(msg) => write!(f, "request failed: {msg}"),
            BackendError::Status(code) => write!(f, "HTTP status: {code}"),
            BackendError::Decode(msg) => write!(f, "invalid response: {msg}"),
            BackendError::Rejected(msg) => f.write_str(msg),
            BackendError::InvalidUrl(msg) => write!(f, "invalid URL: {msg}"),
        }
    }
}

impl std::error::Error for BackendError {}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            BackendError::Status(status.as_u16())
        } else {
            BackendError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Decode(err.to_string())
    }
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Operations the generation backend exposes.
pub trait GenerationBackend: Send + Sync {
    /// Submits a batch and returns the created task ids.
    fn submit(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = BackendResult<Submission>> + Send;

    /// Fetches the current status of one task.
    fn task_status(&self, task_id: &str) -> impl Future<Output = BackendResult<TaskStatus>> + Send;

    /// Lists every batch that still has images on disk, newest first.
    fn list_batches(&self) -> impl Future<Output = BackendResult<Vec<Batch>>> + Send;

    /// Downloads the bytes of one generated image.
    fn fetch_image(&self, filename: &str) -> impl Future<Output = BackendResult<Vec<u8>>> + Send;

    /// URL an image is served from.
    fn image_url(&self, filename: &str) -> String;
}
