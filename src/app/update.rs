// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Component state changes synchronously here; backend calls and delays are
//! turned into [`Task`]s that report back through [`Message`].

use super::{App, Message};
use crate::config::IMAGE_FETCH_CONCURRENCY;
use crate::gallery::TaskFollowUp;
use crate::generation::{
    fetch_images, poll_task, BackendResult, Batch, GenerationBackend, GenerationRequest,
    HttpBackend, Submission, TaskOutcome,
};
use crate::lightbox::{self, Effect};
use crate::ui::form;
use crate::ui::gallery::Thumbnail;
use crate::ui::widgets::animated_spinner;
use iced::widget::image::Handle;
use iced::Task;
use std::collections::HashSet;

impl App {
    pub(super) fn handle_form(&mut self, message: form::Message) -> Task<Message> {
        match self.form.update(message) {
            form::Event::None => Task::none(),
            form::Event::Submit(request) => self.submit(request),
        }
    }

    fn submit(&mut self, request: GenerationRequest) -> Task<Message> {
        if self.gallery.is_submitting() {
            return Task::none();
        }
        self.gallery.begin_submission(&request);

        let backend = self.backend.clone();
        let requested_images = request.num_images;
        Task::perform(
            async move { backend.submit(&request).await },
            move |result| Message::SubmitCompleted {
                requested_images,
                result,
            },
        )
    }

    pub(super) fn handle_submit_completed(
        &mut self,
        requested_images: u32,
        result: BackendResult<Submission>,
    ) -> Task<Message> {
        match result {
            Ok(submission) => {
                tracing::info!(
                    batch_id = %submission.batch_id,
                    tasks = submission.task_ids.len(),
                    "batch created"
                );
                self.gallery
                    .submission_accepted(&submission, requested_images);
                let polls = submission
                    .task_ids
                    .into_iter()
                    .map(|task_id| self.poll(submission.batch_id.clone(), task_id))
                    .collect::<Vec<_>>();
                Task::batch(polls)
            }
            Err(err) => {
                tracing::warn!(error = %err, "generation request failed");
                self.gallery.submission_failed(&err);
                Task::none()
            }
        }
    }

    fn poll(&self, batch_id: String, task_id: String) -> Task<Message> {
        let backend = self.backend.clone();
        let interval = self.config.backend.poll_interval();
        Task::perform(
            async move { poll_task(&backend, &task_id, interval).await },
            move |outcome| Message::TaskFinished { batch_id, outcome },
        )
    }

    pub(super) fn handle_task_finished(
        &mut self,
        batch_id: &str,
        outcome: &TaskOutcome,
    ) -> Task<Message> {
        match self.gallery.task_finished(batch_id, outcome) {
            TaskFollowUp::ReloadListing => self.load_listing(),
            TaskFollowUp::None => Task::none(),
        }
    }

    pub(super) fn load_listing(&self) -> Task<Message> {
        let backend = self.backend.clone();
        Task::perform(
            async move { backend.list_batches().await },
            Message::BatchesLoaded,
        )
    }

    pub(super) fn handle_batches_loaded(
        &mut self,
        result: BackendResult<Vec<Batch>>,
    ) -> Task<Message> {
        match result {
            Ok(batches) => {
                let backend = &self.backend;
                self.gallery
                    .replace_batches(batches, |filename| backend.image_url(filename));
                let listed: HashSet<String> = self.gallery.filenames().into_iter().collect();
                self.thumbnails.retain(|filename, _| listed.contains(filename));
                self.fetch_missing_images()
            }
            Err(err) => {
                self.gallery.listing_failed(&err);
                Task::none()
            }
        }
    }

    /// Downloads every listed image that is neither cached nor in flight.
    fn fetch_missing_images(&mut self) -> Task<Message> {
        let missing: Vec<String> = self
            .gallery
            .filenames()
            .into_iter()
            .filter(|name| !self.thumbnails.contains_key(name) && !self.in_flight.contains(name))
            .collect();
        if missing.is_empty() {
            return Task::none();
        }
        self.in_flight.extend(missing.iter().cloned());

        let backend = self.backend.clone();
        Task::perform(
            async move { download(&backend, missing).await },
            Message::ImagesFetched,
        )
    }

    pub(super) fn handle_images_fetched(&mut self, results: Vec<(String, BackendResult<Handle>)>) {
        for (filename, result) in results {
            self.in_flight.remove(&filename);
            let thumbnail = match result {
                Ok(handle) => Thumbnail::Ready(handle),
                Err(err) => {
                    tracing::warn!(%filename, error = %err, "could not fetch image");
                    Thumbnail::Failed
                }
            };
            self.thumbnails.insert(filename, thumbnail);
        }
    }

    pub(super) fn handle_lightbox(&mut self, message: lightbox::Message) -> Task<Message> {
        match self.navigator.handle(message, &self.gallery) {
            Effect::Closed { padding_removal } => {
                let delay = self.config.lightbox.padding_removal_delay();
                Task::perform(async move { tokio::time::sleep(delay).await }, move |()| {
                    Message::Lightbox(lightbox::Message::PaddingRemovalElapsed(padding_removal))
                })
            }
            Effect::None | Effect::Opened | Effect::Navigated | Effect::PaddingRemoved => {
                Task::none()
            }
        }
    }

    pub(super) fn handle_spinner_tick(&mut self) {
        self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
    }
}

async fn download(
    backend: &HttpBackend,
    filenames: Vec<String>,
) -> Vec<(String, BackendResult<Handle>)> {
    fetch_images(backend, filenames, IMAGE_FETCH_CONCURRENCY)
        .await
        .into_iter()
        .map(|(filename, bytes)| (filename, bytes.map(Handle::from_bytes)))
        .collect()
}
