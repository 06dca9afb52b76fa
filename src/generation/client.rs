// SPDX-License-Identifier: MPL-2.0
//! HTTP implementation of [`GenerationBackend`] on top of `reqwest`.

use super::backend::{BackendError, BackendResult, GenerationBackend};
use super::types::{Batch, BatchListing, GenerationRequest, Submission, SubmitResponse, TaskStatus};
use reqwest::multipart::Form;
use reqwest::{Client, Response, Url};
use std::time::Duration;

/// Backend reached over HTTP. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Builds a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or the HTTP client cannot
    /// be built.
    pub fn new(base_url: &str, timeout: Duration) -> BackendResult<Self> {
        // A trailing slash makes `Url::join` append instead of replacing the last segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalized).map_err(|e| BackendError::InvalidUrl(e.to_string()))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("GalleryLens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> BackendResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| BackendError::InvalidUrl(e.to_string()))
    }

    fn checked(response: Response) -> BackendResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(BackendError::Status(status.as_u16()))
        }
    }
}

impl GenerationBackend for HttpBackend {
    async fn submit(&self, request: &GenerationRequest) -> BackendResult<Submission> {
        let form = Form::new()
            .text("prompt", request.prompt.clone())
            .text("aspect_ratio", request.aspect_ratio.label())
            .text("num_images", request.num_images.to_string());

        let url = self.endpoint("generate")?;
        tracing::info!(%url, images = request.num_images, "submitting generation batch");

        let response = self.client.post(url).multipart(form).send().await?;
        let body: SubmitResponse = Self::checked(response)?.json().await?;

        match body {
            SubmitResponse::Success { batch_id, task_ids } => Ok(Submission { batch_id, task_ids }),
            SubmitResponse::Error { message } => Err(BackendError::Rejected(message)),
        }
    }

    async fn task_status(&self, task_id: &str) -> BackendResult<TaskStatus> {
        let url = self.endpoint(&format!("task_status/{task_id}"))?;
        let response = self.client.get(url).send().await?;
        Ok(Self::checked(response)?.json().await?)
    }

    async fn list_batches(&self) -> BackendResult<Vec<Batch>> {
        let url = self.endpoint("images")?;
        let response = self.client.get(url).send().await?;
        let listing: BatchListing = Self::checked(response)?.json().await?;
        Ok(listing.batches)
    }

    async fn fetch_image(&self, filename: &str) -> BackendResult<Vec<u8>> {
        let url = self.image_url(filename);
        let response = self.client.get(url).send().await?;
        let bytes = Self::checked(response)?.bytes().await?;
        Ok(bytes.to_vec())
    }

    fn image_url(&self, filename: &str) -> String {
        match self.base_url.join("output/").and_then(|url| url.join(filename)) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}output/{}", self.base_url, filename),
        }
    }
}
