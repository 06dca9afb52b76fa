// SPDX-License-Identifier: MPL-2.0
//! Client side of the image-generation backend.
//!
//! - [`types`]: request and response shapes of the HTTP endpoints
//! - [`backend`]: the [`GenerationBackend`] port
//! - [`client`]: the `reqwest` implementation
//! - [`poll`]: task completion polling and batch progress

pub mod backend;
pub mod client;
pub mod poll;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use backend::{BackendError, BackendResult, GenerationBackend};
pub use client::HttpBackend;
pub use poll::{poll_task, BatchProgress, TaskOutcome};
pub use types::{
    parse_num_images, AspectRatio, Batch, BatchListing, GenerationRequest, Submission,
    SubmitResponse, TaskStatus,
};

use futures_util::stream::{self, StreamExt};

/// Downloads `filenames` with at most `concurrency` requests in flight.
///
/// Results come back in completion order, each paired with its file name.
pub async fn fetch_images<B>(
    backend: &B,
    filenames: Vec<String>,
    concurrency: usize,
) -> Vec<(String, BackendResult<Vec<u8>>)>
where
    B: GenerationBackend,
{
    stream::iter(filenames)
        .map(|filename| async move {
            let result = backend.fetch_image(&filename).await;
            (filename, result)
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await
}
