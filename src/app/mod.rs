// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the form, the gallery
//! and the lightbox.
//!
//! The `App` struct owns every component and translates their effects into
//! backend tasks. The lightbox navigator is resolved against the gallery
//! model, which knows the batch each image belongs to.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::Config;
use crate::gallery::Gallery;
use crate::generation::HttpBackend;
use crate::i18n::fluent::I18n;
use crate::lightbox::Navigator;
use crate::ui::form;
use crate::ui::gallery::Thumbnail;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    backend: HttpBackend,
    form: form::State,
    gallery: Gallery,
    navigator: Navigator,
    /// Downloaded images by file name.
    thumbnails: HashMap<String, Thumbnail>,
    /// File names with a download in progress.
    in_flight: HashSet<String>,
    /// Rotation angle for the generation spinners (in radians).
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("base_url", &self.backend.base_url().as_str())
            .field("groups", &self.gallery.groups().len())
            .field("lightbox_open", &self.navigator.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires the boot function to be `Fn`.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application state and starts loading the gallery listing.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let app = Self::with_backend(flags.lang, flags.config, flags.backend);
        let task = app.load_listing();
        (app, task)
    }

    fn with_backend(lang: Option<String>, config: Config, backend: HttpBackend) -> Self {
        Self {
            i18n: I18n::new(lang, &config),
            form: form::State::from_config(&config.form),
            navigator: Navigator::new(config.lightbox.scrollbar_width()),
            gallery: Gallery::new(),
            thumbnails: HashMap::new(),
            in_flight: HashSet::new(),
            spinner_rotation: 0.0,
            config,
            backend,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let animating = self.gallery.is_submitting() || self.gallery.skeleton().is_some();
        Subscription::batch([
            subscription::lightbox_keys(self.navigator.is_open()),
            subscription::spinner_tick(animating),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Form(message) => self.handle_form(message),
            Message::Lightbox(message) => self.handle_lightbox(message),
            Message::SubmitCompleted {
                requested_images,
                result,
            } => self.handle_submit_completed(requested_images, result),
            Message::TaskFinished { batch_id, outcome } => {
                self.handle_task_finished(&batch_id, &outcome)
            }
            Message::BatchesLoaded(result) => self.handle_batches_loaded(result),
            Message::ImagesFetched(results) => {
                self.handle_images_fetched(results);
                Task::none()
            }
            Message::SpinnerTick => {
                self.handle_spinner_tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.render()
    }
}
