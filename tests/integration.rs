// SPDX-License-Identifier: MPL-2.0
use gallery_lens::config::{self, Config};
use gallery_lens::gallery::{Gallery, TaskFollowUp};
use gallery_lens::generation::{
    fetch_images, poll_task, AspectRatio, BackendError, BackendResult, Batch, GenerationBackend,
    GenerationRequest, Submission, TaskOutcome, TaskStatus,
};
use gallery_lens::i18n::fluent::I18n;
use gallery_lens::lightbox::{
    Effect, ImageGroup, ImageRef, Message, NavKey, NavigationError, Navigator,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;
use tempfile::tempdir;

/// Backend answering from canned data.
#[derive(Default)]
struct CannedBackend {
    statuses: Mutex<HashMap<String, VecDeque<TaskStatus>>>,
    batches: Vec<Batch>,
    images: HashMap<String, Vec<u8>>,
}

impl CannedBackend {
    fn with_status(self, task_id: &str, statuses: Vec<TaskStatus>) -> Self {
        self.statuses
            .lock()
            .unwrap()
            .insert(task_id.to_string(), statuses.into());
        self
    }
}

fn status(completed: bool, status: &str, error: Option<&str>) -> TaskStatus {
    TaskStatus {
        completed,
        status: status.to_string(),
        error: error.map(str::to_string),
    }
}

impl GenerationBackend for CannedBackend {
    async fn submit(&self, request: &GenerationRequest) -> BackendResult<Submission> {
        Ok(Submission {
            batch_id: "1a2b3c4d".to_string(),
            task_ids: (0..request.num_images).map(|i| format!("task{i}")).collect(),
        })
    }

    async fn task_status(&self, task_id: &str) -> BackendResult<TaskStatus> {
        let mut statuses = self.statuses.lock().unwrap();
        let queue = statuses
            .get_mut(task_id)
            .ok_or(BackendError::Transport("connection refused".to_string()))?;
        let next = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        Ok(next.unwrap_or_else(|| status(false, "not_found", None)))
    }

    async fn list_batches(&self) -> BackendResult<Vec<Batch>> {
        Ok(self.batches.clone())
    }

    async fn fetch_image(&self, filename: &str) -> BackendResult<Vec<u8>> {
        self.images
            .get(filename)
            .cloned()
            .ok_or(BackendError::Status(404))
    }

    fn image_url(&self, filename: &str) -> String {
        format!("http://backend/output/{filename}")
    }
}

fn batch(id: &str, images: &[&str]) -> Batch {
    Batch {
        id: id.to_string(),
        prompt: format!("prompt {id}"),
        created_at: "2024-05-01T10:00:00.123456".to_string(),
        aspect_ratio: "16:9".to_string(),
        size: "1344x768".to_string(),
        images: images.iter().map(|s| (*s).to_string()).collect(),
    }
}

fn image(batch_id: &str, filename: &str) -> ImageRef {
    ImageRef::new(batch_id, filename, format!("http://backend/output/{filename}"))
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("lightbox-close"), "Fermer");
}

#[test]
fn lightbox_walks_a_three_image_group() {
    let group: ImageGroup = ["a.png", "b.png", "c.png"]
        .into_iter()
        .map(|name| image("b1", name))
        .collect();
    let resolver = move |_: &ImageRef| -> Result<ImageGroup, NavigationError> { Ok(group.clone()) };

    let mut lightbox = Navigator::new(15.0);
    assert_eq!(
        lightbox.handle(Message::Open(image("b1", "b.png")), &resolver),
        Effect::Opened
    );
    assert_eq!(lightbox.state().current_index(), 1);
    assert_eq!(lightbox.counter_text(), "2 / 3");
    assert!(!lightbox.is_previous_disabled());
    assert!(!lightbox.is_next_disabled());
    assert_eq!(lightbox.scroll_lock().padding_right(), 15.0);

    lightbox.handle(Message::NextPressed, &resolver);
    assert_eq!(lightbox.counter_text(), "3 / 3");
    assert!(lightbox.is_next_disabled());

    assert_eq!(lightbox.handle(Message::NextPressed, &resolver), Effect::None);
    assert_eq!(lightbox.counter_text(), "3 / 3");

    lightbox.handle(Message::KeyPressed(NavKey::Previous), &resolver);
    lightbox.handle(Message::KeyPressed(NavKey::Previous), &resolver);
    assert_eq!(lightbox.state().current_index(), 0);
    assert_eq!(lightbox.counter_text(), "1 / 3");
    assert!(lightbox.is_previous_disabled());

    let Effect::Closed { padding_removal } = lightbox.handle(Message::BackdropPressed, &resolver)
    else {
        panic!("backdrop press should close the lightbox");
    };
    assert!(!lightbox.is_open());
    assert_eq!(lightbox.scroll_lock().padding_right(), 15.0);

    assert_eq!(
        lightbox.handle(Message::PaddingRemovalElapsed(padding_removal), &resolver),
        Effect::PaddingRemoved
    );
    assert_eq!(lightbox.scroll_lock().padding_right(), 0.0);
}

#[test]
fn gallery_batches_are_separate_lightbox_groups() {
    let mut gallery = Gallery::new();
    gallery.replace_batches(
        vec![batch("b1", &["a.png", "b.png"]), batch("b2", &["c.png"])],
        |filename| format!("http://backend/output/{filename}"),
    );

    let mut lightbox = Navigator::new(0.0);
    lightbox.open(gallery.groups()[0].images[1].clone(), &gallery);
    assert_eq!(lightbox.counter_text(), "2 / 2");
    assert!(lightbox.is_next_disabled());

    lightbox.close();
    lightbox.open(gallery.groups()[1].images[0].clone(), &gallery);
    assert_eq!(lightbox.counter_text(), "1 / 1");
    assert!(lightbox.is_previous_disabled());
    assert!(lightbox.is_next_disabled());
    assert_eq!(
        lightbox.current_image().map(|img| img.filename.as_str()),
        Some("c.png")
    );
}

#[tokio::test]
async fn generation_round_trip_fills_the_gallery() {
    let backend = CannedBackend {
        batches: vec![batch("1a2b3c4d", &["x.png", "y.png"])],
        images: HashMap::from([("x.png".to_string(), vec![1, 2, 3])]),
        ..CannedBackend::default()
    }
    .with_status(
        "task0",
        vec![status(false, "processing", None), status(true, "succeeded", None)],
    )
    .with_status(
        "task1",
        vec![status(true, "failed", Some("Out of memory"))],
    );

    let request = GenerationRequest {
        prompt: "a lighthouse".to_string(),
        aspect_ratio: AspectRatio::Wide,
        num_images: 2,
    };
    let mut gallery = Gallery::new();
    gallery.begin_submission(&request);
    assert!(gallery.skeleton().is_some());

    let submission = backend.submit(&request).await.expect("submission accepted");
    gallery.submission_accepted(&submission, request.num_images);

    let interval = Duration::from_millis(1);
    let first = poll_task(&backend, "task0", interval).await;
    let second = poll_task(&backend, "task1", interval).await;
    assert_eq!(first, TaskOutcome::Succeeded);
    assert_eq!(second, TaskOutcome::Failed("Out of memory".to_string()));

    assert_eq!(
        gallery.task_finished(&submission.batch_id, &first),
        TaskFollowUp::ReloadListing
    );
    assert_eq!(
        gallery.task_finished(&submission.batch_id, &second),
        TaskFollowUp::None
    );
    let status = gallery.status().expect("completion status");
    assert_eq!(status.key, "status-batch-completed");
    assert_eq!(status.arg("count"), Some("2"));

    let batches = backend.list_batches().await.expect("listing");
    gallery.replace_batches(batches, |filename| backend.image_url(filename));
    assert!(gallery.skeleton().is_none());
    assert_eq!(gallery.groups().len(), 1);

    let mut fetched = fetch_images(&backend, gallery.filenames(), 2).await;
    fetched.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(fetched[0], ("x.png".to_string(), Ok(vec![1, 2, 3])));
    assert_eq!(fetched[1], ("y.png".to_string(), Err(BackendError::Status(404))));
}

#[tokio::test]
async fn unreachable_backend_ends_polling() {
    let backend = CannedBackend::default();
    let outcome = poll_task(&backend, "missing", Duration::from_millis(1)).await;
    assert_eq!(
        outcome,
        TaskOutcome::Unreachable("request failed: connection refused".to_string())
    );
}
