// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::Config;
use crate::generation::{BackendResult, Batch, HttpBackend, Submission, TaskOutcome};
use crate::lightbox;
use crate::ui::form;
use iced::widget::image::Handle;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages and carry the results of backend tasks.
#[derive(Debug, Clone)]
pub enum Message {
    Form(form::Message),
    Lightbox(lightbox::Message),
    /// The backend answered the generation request.
    SubmitCompleted {
        requested_images: u32,
        result: BackendResult<Submission>,
    },
    /// Polling of one task ended.
    TaskFinished {
        batch_id: String,
        outcome: TaskOutcome,
    },
    BatchesLoaded(BackendResult<Vec<Batch>>),
    /// Downloaded images, paired with their file names.
    ImagesFetched(Vec<(String, BackendResult<Handle>)>),
    /// Animation tick for the generation spinners.
    SpinnerTick,
}

/// Everything the application needs at startup, resolved by the launcher.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`).
    pub lang: Option<String>,
    pub config: Config,
    pub backend: HttpBackend,
}
