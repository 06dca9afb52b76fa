// SPDX-License-Identifier: MPL-2.0
//! Gallery page model: rendered batches, generation placeholders and the
//! status line.
//!
//! The model is fed by the application shell with backend results and turns
//! them into what the gallery view draws. It also answers group discovery for
//! the lightbox, since each batch is one group container.

pub mod status;

pub use status::{StatusKind, StatusLine};

use crate::generation::{
    BackendError, Batch, BatchProgress, GenerationRequest, Submission, TaskOutcome,
};
use crate::lightbox::{GroupResolver, ImageGroup, ImageRef, NavigationError};
use std::collections::HashMap;

/// One rendered batch with its image references in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchGroup {
    pub batch: Batch,
    pub images: Vec<ImageRef>,
}

impl BatchGroup {
    /// Meta line: `"{aspect_ratio} • {size} • {n} images"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} • {} • {} images",
            self.batch.aspect_ratio,
            self.batch.size,
            self.batch.images.len()
        )
    }
}

/// Placeholder group shown at the top while a batch is generating.
#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonGroup {
    pub label: String,
    pub card_height: f32,
    pub cards: usize,
}

/// What the shell should do after a task finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFollowUp {
    /// Nothing to fetch.
    None,
    /// New images exist, reload the listing.
    ReloadListing,
}

/// State of the gallery page.
#[derive(Debug, Default)]
pub struct Gallery {
    groups: Vec<BatchGroup>,
    skeleton: Option<SkeletonGroup>,
    status: Option<StatusLine>,
    submitting: bool,
    listing_loaded: bool,
    progress: HashMap<String, BatchProgress>,
}

impl Gallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form submitted: show the spinner, clear the status line and put
    /// placeholder cards at the top.
    pub fn begin_submission(&mut self, request: &GenerationRequest) {
        self.submitting = true;
        self.status = None;
        self.skeleton = Some(SkeletonGroup {
            label: request.skeleton_label().to_string(),
            card_height: request.aspect_ratio.skeleton_height(),
            cards: request.num_images as usize,
        });
    }

    /// The backend accepted the batch. Starts tracking its tasks.
    pub fn submission_accepted(&mut self, submission: &Submission, requested_images: u32) {
        self.submitting = false;
        self.status = Some(StatusLine::success(
            "status-batch-created",
            vec![("batch_id", submission.batch_id.clone())],
        ));
        self.progress.insert(
            submission.batch_id.clone(),
            BatchProgress::new(
                submission.batch_id.clone(),
                submission.task_ids.len(),
                requested_images,
            ),
        );
    }

    /// The backend refused the batch or could not be reached.
    pub fn submission_failed(&mut self, err: &BackendError) {
        self.submitting = false;
        self.skeleton = None;
        self.status = Some(StatusLine::error("status-error", err.to_string()));
    }

    /// Records the outcome of one task of `batch_id`.
    pub fn task_finished(&mut self, batch_id: &str, outcome: &TaskOutcome) -> TaskFollowUp {
        let follow_up = match outcome {
            TaskOutcome::Succeeded => TaskFollowUp::ReloadListing,
            TaskOutcome::Failed(message) => {
                self.status = Some(StatusLine::error("status-task-failed", message.clone()));
                TaskFollowUp::None
            }
            TaskOutcome::Unreachable(message) => {
                self.status = Some(StatusLine::error("status-poll-error", message.clone()));
                TaskFollowUp::None
            }
        };

        let batch_done = self
            .progress
            .get_mut(batch_id)
            .is_some_and(BatchProgress::record);

        if batch_done {
            if let Some(progress) = self.progress.remove(batch_id) {
                tracing::info!(batch_id, tasks = progress.total(), "batch finished");
                self.status = Some(StatusLine::success(
                    "status-batch-completed",
                    vec![
                        ("batch_id", progress.batch_id().to_string()),
                        ("count", progress.requested_images().to_string()),
                    ],
                ));
            }
        }

        follow_up
    }

    /// Replaces every group with a fresh listing and drops the placeholders.
    ///
    /// `image_url` maps a file name to the URL it is served from.
    pub fn replace_batches<F>(&mut self, batches: Vec<Batch>, image_url: F)
    where
        F: Fn(&str) -> String,
    {
        self.groups = batches
            .into_iter()
            .map(|batch| {
                let images = batch
                    .images
                    .iter()
                    .map(|filename| {
                        ImageRef::new(&batch.id, filename, image_url(filename.as_str()))
                    })
                    .collect();
                BatchGroup { batch, images }
            })
            .collect();
        self.skeleton = None;
        self.listing_loaded = true;
    }

    /// A listing request failed. The current groups stay on screen.
    pub fn listing_failed(&mut self, err: &BackendError) {
        tracing::error!(%err, "error loading images");
    }

    #[must_use]
    pub fn groups(&self) -> &[BatchGroup] {
        &self.groups
    }

    #[must_use]
    pub fn skeleton(&self) -> Option<&SkeletonGroup> {
        self.skeleton.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// True once a listing arrived and it had no batches.
    #[must_use]
    pub fn shows_empty_notice(&self) -> bool {
        self.listing_loaded && self.groups.is_empty() && self.skeleton.is_none()
    }

    /// Every file name currently displayed, in display order.
    #[must_use]
    pub fn filenames(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|group| group.batch.images.iter().cloned())
            .collect()
    }

    /// Number of batches still being polled.
    #[must_use]
    pub fn pending_batches(&self) -> usize {
        self.progress.len()
    }
}

impl GroupResolver for Gallery {
    fn resolve(&self, target: &ImageRef) -> Result<ImageGroup, NavigationError> {
        self.groups
            .iter()
            .find(|group| group.batch.id == target.batch_id)
            .map(|group| ImageGroup::new(group.images.clone()))
            .ok_or_else(|| NavigationError::GroupNotFound {
                batch_id: target.batch_id.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::AspectRatio;

    fn batch(id: &str, images: &[&str]) -> Batch {
        Batch {
            id: id.to_string(),
            prompt: format!("prompt {id}"),
            created_at: "2025-01-01T10:00:00".to_string(),
            aspect_ratio: "4:3".to_string(),
            size: "2K".to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn url(filename: &str) -> String {
        format!("http://host/output/{filename}")
    }

    fn request(prompt: &str, num_images: u32) -> GenerationRequest {
        GenerationRequest {
            prompt: prompt.to_string(),
            aspect_ratio: AspectRatio::Wide,
            num_images,
        }
    }

    fn submission(batch_id: &str, tasks: usize) -> Submission {
        Submission {
            batch_id: batch_id.to_string(),
            task_ids: (0..tasks).map(|i| format!("task-{i}")).collect(),
        }
    }

    #[test]
    fn submission_shows_skeleton_sized_by_aspect_ratio() {
        let mut gallery = Gallery::new();
        gallery.begin_submission(&request("a fox", 3));

        let skeleton = gallery.skeleton().expect("skeleton shown");
        assert_eq!(skeleton.label, "a fox");
        assert_eq!(skeleton.cards, 3);
        assert_eq!(skeleton.card_height, 168.75);
        assert!(gallery.is_submitting());
        assert!(gallery.status().is_none());
    }

    #[test]
    fn accepted_submission_reports_batch_id() {
        let mut gallery = Gallery::new();
        gallery.begin_submission(&request("a fox", 2));
        gallery.submission_accepted(&submission("abcd1234", 2), 2);

        let status = gallery.status().expect("status set");
        assert_eq!(status.key, "status-batch-created");
        assert_eq!(status.arg("batch_id"), Some("abcd1234"));
        assert!(!gallery.is_submitting());
        assert_eq!(gallery.pending_batches(), 1);
    }

    #[test]
    fn rejected_submission_shows_error_and_clears_placeholders() {
        let mut gallery = Gallery::new();
        gallery.begin_submission(&request("a fox", 2));
        gallery.submission_failed(&BackendError::Rejected("Failed to create any tasks".into()));

        let status = gallery.status().expect("status set");
        assert!(status.is_error());
        assert_eq!(status.key, "status-error");
        assert_eq!(status.arg("message"), Some("Failed to create any tasks"));
        assert!(gallery.skeleton().is_none());
        assert!(!gallery.is_submitting());
    }

    #[test]
    fn batch_completion_message_follows_last_task() {
        let mut gallery = Gallery::new();
        gallery.submission_accepted(&submission("b1", 2), 2);

        assert_eq!(
            gallery.task_finished("b1", &TaskOutcome::Succeeded),
            TaskFollowUp::ReloadListing
        );
        assert_eq!(gallery.status().map(|s| s.key), Some("status-batch-created"));

        gallery.task_finished("b1", &TaskOutcome::Failed("boom".into()));
        let status = gallery.status().expect("status set");
        assert_eq!(status.key, "status-batch-completed");
        assert_eq!(status.arg("count"), Some("2"));
        assert_eq!(gallery.pending_batches(), 0);
    }

    #[test]
    fn task_failure_is_reported_before_completion() {
        let mut gallery = Gallery::new();
        gallery.submission_accepted(&submission("b1", 2), 2);

        let follow_up = gallery.task_finished("b1", &TaskOutcome::Failed("NSFW".into()));
        assert_eq!(follow_up, TaskFollowUp::None);
        let status = gallery.status().expect("status set");
        assert_eq!(status.key, "status-task-failed");
        assert_eq!(status.arg("message"), Some("NSFW"));

        gallery.task_finished("b1", &TaskOutcome::Unreachable("refused".into()));
        assert_eq!(gallery.status().map(|s| s.key), Some("status-batch-completed"));
    }

    #[test]
    fn unreachable_task_uses_poll_error_message() {
        let mut gallery = Gallery::new();
        gallery.submission_accepted(&submission("b1", 2), 2);
        gallery.task_finished("b1", &TaskOutcome::Unreachable("refused".into()));

        assert_eq!(gallery.status().map(|s| s.key), Some("status-poll-error"));
    }

    #[test]
    fn listing_replaces_groups_and_drops_skeleton() {
        let mut gallery = Gallery::new();
        gallery.begin_submission(&request("a fox", 1));
        gallery.replace_batches(
            vec![batch("b2", &["c.png"]), batch("b1", &["a.png", "b.png"])],
            url,
        );

        assert!(gallery.skeleton().is_none());
        assert_eq!(gallery.groups().len(), 2);
        assert_eq!(gallery.groups()[1].images[1].source, "http://host/output/b.png");
        assert_eq!(gallery.filenames(), vec!["c.png", "a.png", "b.png"]);
        assert_eq!(gallery.groups()[1].summary(), "4:3 • 2K • 2 images");
    }

    #[test]
    fn empty_listing_shows_notice() {
        let mut gallery = Gallery::new();
        assert!(!gallery.shows_empty_notice());

        gallery.replace_batches(Vec::new(), url);
        assert!(gallery.shows_empty_notice());
    }

    #[test]
    fn failed_listing_keeps_current_groups() {
        let mut gallery = Gallery::new();
        gallery.replace_batches(vec![batch("b1", &["a.png"])], url);
        gallery.listing_failed(&BackendError::Status(500));

        assert_eq!(gallery.groups().len(), 1);
    }

    #[test]
    fn resolver_returns_the_batch_of_the_target() {
        let mut gallery = Gallery::new();
        gallery.replace_batches(
            vec![batch("b1", &["a.png", "b.png"]), batch("b2", &["x.png"])],
            url,
        );

        let target = gallery.groups()[0].images[1].clone();
        let group = gallery.resolve(&target).expect("group found");
        assert_eq!(group.len(), 2);
        assert_eq!(group.position(&target), Some(1));

        let stray = ImageRef::new("gone", "z.png", url("z.png"));
        assert_eq!(
            gallery.resolve(&stray),
            Err(NavigationError::GroupNotFound {
                batch_id: "gone".to_string()
            })
        );
    }
}
