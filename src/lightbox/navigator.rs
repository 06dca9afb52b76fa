// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation state machine.
//!
//! Two states: closed (initial) and open. Opening snapshots the sibling group
//! of the activated image, stepping moves inside that snapshot without
//! wrapping, and closing hides the overlay while keeping the state around for
//! the next session.

use super::group::{GroupResolver, ImageGroup, ImageRef};
use super::scroll_lock::{PaddingRemoval, ScrollLock};

/// Keyboard intents understood by the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Close the overlay.
    Dismiss,
    /// Step to the previous image.
    Previous,
    /// Step to the next image.
    Next,
}

/// Messages for the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    /// An image card was activated.
    Open(ImageRef),
    /// The dedicated close control was pressed.
    CloseRequested,
    /// The backdrop around the content was pressed.
    BackdropPressed,
    /// The "previous" control was pressed.
    PreviousPressed,
    /// The "next" control was pressed.
    NextPressed,
    /// A navigation key was pressed anywhere in the window.
    KeyPressed(NavKey),
    /// The delay scheduled on close has elapsed.
    PaddingRemovalElapsed(PaddingRemoval),
}

/// Effects produced by the lightbox for the application shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// The overlay became visible.
    Opened,
    /// The current image changed while open.
    Navigated,
    /// The overlay was hidden. The shell must deliver the ticket back after
    /// the padding removal delay.
    Closed { padding_removal: PaddingRemoval },
    /// Compensation padding was removed from the background.
    PaddingRemoved,
}

/// State of the overlay. Lives for the whole application run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    is_open: bool,
    group: ImageGroup,
    current_index: usize,
    current: Option<ImageRef>,
}

impl ViewerState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn group(&self) -> &ImageGroup {
        &self.group
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    fn at_first(&self) -> bool {
        self.current_index == 0
    }

    fn at_last(&self) -> bool {
        self.current_index + 1 >= self.group.len()
    }
}

/// Everything the overlay view needs to draw the open lightbox.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls<'a> {
    pub image: &'a ImageRef,
    pub counter: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

/// The modal image navigator.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: ViewerState,
    scroll_lock: ScrollLock,
    scrollbar_width: f32,
}

impl Navigator {
    /// Creates a closed navigator that compensates `scrollbar_width` pixels
    /// when suppressing background scroll.
    #[must_use]
    pub fn new(scrollbar_width: f32) -> Self {
        Self {
            scrollbar_width,
            ..Self::default()
        }
    }

    /// Handles a lightbox message.
    ///
    /// Takes `Message` by value following Iced's `update(message)` pattern.
    pub fn handle<R>(&mut self, msg: Message, resolver: &R) -> Effect
    where
        R: GroupResolver + ?Sized,
    {
        match msg {
            Message::Open(target) => self.open(target, resolver),
            Message::CloseRequested | Message::BackdropPressed => self.close(),
            Message::PreviousPressed => self.show_previous(),
            Message::NextPressed => self.show_next(),
            Message::KeyPressed(key) => self.handle_key(key),
            Message::PaddingRemovalElapsed(ticket) => {
                if self.scroll_lock.complete_removal(ticket) {
                    Effect::PaddingRemoved
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Opens the overlay on `target`, snapshotting its sibling group.
    ///
    /// A target that no container holds is shown as a group of one.
    pub fn open<R>(&mut self, target: ImageRef, resolver: &R) -> Effect
    where
        R: GroupResolver + ?Sized,
    {
        let group = match resolver.resolve(&target) {
            Ok(group) if !group.is_empty() => group,
            Ok(_) => {
                tracing::warn!(batch = %target.batch_id, "resolved an empty image group");
                ImageGroup::single(target.clone())
            }
            Err(err) => {
                tracing::warn!(%err, "opening lightbox on a detached image");
                ImageGroup::single(target.clone())
            }
        };

        let index = group.position(&target).unwrap_or_else(|| {
            tracing::warn!(file = %target.filename, "activated image is not in its group");
            0
        });

        tracing::debug!(
            batch = %target.batch_id,
            index,
            len = group.len(),
            "lightbox opened"
        );

        self.state = ViewerState {
            is_open: true,
            group,
            current_index: index,
            current: Some(target),
        };
        self.scroll_lock.lock(self.scrollbar_width);
        Effect::Opened
    }

    /// Hides the overlay. Closing a closed overlay does nothing.
    pub fn close(&mut self) -> Effect {
        if !self.state.is_open {
            return Effect::None;
        }
        self.state.is_open = false;
        tracing::debug!("lightbox closed");

        match self.scroll_lock.unlock() {
            Some(padding_removal) => Effect::Closed { padding_removal },
            None => Effect::None,
        }
    }

    /// Steps forward one image. No-op on the last image or when closed.
    pub fn show_next(&mut self) -> Effect {
        if !self.state.is_open || self.state.at_last() {
            return Effect::None;
        }
        self.move_to(self.state.current_index + 1)
    }

    /// Steps back one image. No-op on the first image or when closed.
    pub fn show_previous(&mut self) -> Effect {
        if !self.state.is_open || self.state.at_first() {
            return Effect::None;
        }
        self.move_to(self.state.current_index - 1)
    }

    /// Keyboard bindings, inert while closed.
    pub fn handle_key(&mut self, key: NavKey) -> Effect {
        if !self.state.is_open {
            return Effect::None;
        }
        match key {
            NavKey::Dismiss => self.close(),
            NavKey::Previous => self.show_previous(),
            NavKey::Next => self.show_next(),
        }
    }

    fn move_to(&mut self, index: usize) -> Effect {
        match self.state.group.get(index) {
            Some(image) => {
                self.state.current = Some(image.clone());
                self.state.current_index = index;
                Effect::Navigated
            }
            None => Effect::None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Image currently displayed (kept after close until the next open).
    #[must_use]
    pub fn current_image(&self) -> Option<&ImageRef> {
        self.state.current.as_ref()
    }

    /// Human-readable position, e.g. `"2 / 3"`.
    #[must_use]
    pub fn counter_text(&self) -> String {
        format!(
            "{} / {}",
            self.state.current_index + 1,
            self.state.group.len()
        )
    }

    #[must_use]
    pub fn is_previous_disabled(&self) -> bool {
        self.state.at_first()
    }

    #[must_use]
    pub fn is_next_disabled(&self) -> bool {
        self.state.at_last()
    }

    /// View model for the open overlay, `None` while closed.
    #[must_use]
    pub fn controls(&self) -> Option<Controls<'_>> {
        if !self.state.is_open {
            return None;
        }
        let image = self.state.current.as_ref()?;
        Some(Controls {
            image,
            counter: self.counter_text(),
            previous_enabled: !self.is_previous_disabled(),
            next_enabled: !self.is_next_disabled(),
        })
    }

    #[must_use]
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lightbox::group::NavigationError;
    use std::collections::HashMap;

    /// In-memory stand-in for the gallery.
    struct Groups(HashMap<String, ImageGroup>);

    impl Groups {
        fn new() -> Self {
            Self(HashMap::new())
        }

        fn batch(mut self, batch: &str, names: &[&str]) -> Self {
            let group = names.iter().map(|name| image(batch, name)).collect();
            self.0.insert(batch.to_string(), group);
            self
        }
    }

    impl GroupResolver for Groups {
        fn resolve(&self, target: &ImageRef) -> Result<ImageGroup, NavigationError> {
            self.0
                .get(&target.batch_id)
                .cloned()
                .ok_or_else(|| NavigationError::GroupNotFound {
                    batch_id: target.batch_id.clone(),
                })
        }
    }

    fn image(batch: &str, name: &str) -> ImageRef {
        ImageRef::new(batch, name, format!("http://localhost/output/{name}"))
    }

    fn abc() -> Groups {
        Groups::new().batch("b1", &["a.png", "b.png", "c.png"])
    }

    #[test]
    fn new_navigator_is_closed() {
        let nav = Navigator::new(12.0);
        assert!(!nav.is_open());
        assert!(nav.controls().is_none());
        assert!(!nav.scroll_lock().is_scroll_suppressed());
    }

    #[test]
    fn open_reports_position_counter_and_controls_for_every_index() {
        let names = ["1.png", "2.png", "3.png", "4.png"];
        let groups = Groups::new().batch("b1", &names);

        for (i, name) in names.iter().enumerate() {
            let mut nav = Navigator::new(12.0);
            let effect = nav.open(image("b1", name), &groups);

            assert_eq!(effect, Effect::Opened);
            assert_eq!(nav.state().current_index(), i);
            assert_eq!(nav.counter_text(), format!("{} / {}", i + 1, names.len()));
            assert_eq!(nav.is_previous_disabled(), i == 0);
            assert_eq!(nav.is_next_disabled(), i == names.len() - 1);
        }
    }

    #[test]
    fn single_image_group_disables_both_controls() {
        let groups = Groups::new().batch("b1", &["only.png"]);
        let mut nav = Navigator::new(12.0);
        nav.open(image("b1", "only.png"), &groups);

        let controls = nav.controls().expect("overlay is open");
        assert_eq!(controls.counter, "1 / 1");
        assert!(!controls.previous_enabled);
        assert!(!controls.next_enabled);
    }

    #[test]
    fn walk_through_three_images() {
        let groups = abc();
        let mut nav = Navigator::new(12.0);

        nav.open(image("b1", "b.png"), &groups);
        let controls = nav.controls().expect("open");
        assert_eq!(nav.state().current_index(), 1);
        assert_eq!(controls.counter, "2 / 3");
        assert!(controls.previous_enabled);
        assert!(controls.next_enabled);

        assert_eq!(nav.show_next(), Effect::Navigated);
        let controls = nav.controls().expect("open");
        assert_eq!(nav.state().current_index(), 2);
        assert_eq!(controls.counter, "3 / 3");
        assert!(controls.previous_enabled);
        assert!(!controls.next_enabled);
        assert_eq!(controls.image.filename, "c.png");

        let before = nav.state().clone();
        assert_eq!(nav.show_next(), Effect::None);
        assert_eq!(nav.state(), &before);

        nav.show_previous();
        nav.show_previous();
        let controls = nav.controls().expect("open");
        assert_eq!(nav.state().current_index(), 0);
        assert_eq!(controls.counter, "1 / 3");
        assert!(!controls.previous_enabled);
        assert_eq!(nav.show_previous(), Effect::None);
    }

    #[test]
    fn repeated_next_visits_each_index_once_then_stops() {
        let names = ["1.png", "2.png", "3.png", "4.png", "5.png"];
        let groups = Groups::new().batch("b1", &names);
        let mut nav = Navigator::new(0.0);
        nav.open(image("b1", names[0]), &groups);

        let mut visited = vec![nav.state().current_index()];
        while nav.show_next() == Effect::Navigated {
            visited.push(nav.state().current_index());
        }

        assert_eq!(visited, vec![0, 1, 2, 3, 4]);
        assert_eq!(nav.show_next(), Effect::None);
        assert_eq!(nav.state().current_index(), 4);
    }

    #[test]
    fn reopening_on_another_group_drops_previous_state() {
        let groups = Groups::new()
            .batch("b1", &["a.png", "b.png", "c.png"])
            .batch("b2", &["x.png", "y.png"]);
        let mut nav = Navigator::new(12.0);
        nav.open(image("b1", "c.png"), &groups);
        nav.close();

        nav.open(image("b2", "x.png"), &groups);
        assert_eq!(nav.state().group().len(), 2);
        assert_eq!(nav.state().current_index(), 0);
        assert_eq!(nav.counter_text(), "1 / 2");
        assert!(nav.state().group().iter().all(|img| img.batch_id == "b2"));
    }

    #[test]
    fn group_snapshot_is_not_requeried_while_open() {
        let mut groups = abc();
        let mut nav = Navigator::new(12.0);
        nav.open(image("b1", "a.png"), &groups);

        groups.0.insert(
            "b1".to_string(),
            ImageGroup::single(image("b1", "fresh.png")),
        );
        nav.handle(Message::NextPressed, &groups);

        assert_eq!(nav.state().group().len(), 3);
        assert_eq!(nav.current_image().map(|i| i.filename.as_str()), Some("b.png"));
    }

    #[test]
    fn keys_are_inert_while_closed() {
        let groups = abc();
        let mut nav = Navigator::new(12.0);

        assert_eq!(nav.handle(Message::KeyPressed(NavKey::Dismiss), &groups), Effect::None);
        assert_eq!(nav.handle(Message::KeyPressed(NavKey::Next), &groups), Effect::None);
        assert!(!nav.is_open());
        assert!(!nav.scroll_lock().is_scroll_suppressed());
    }

    #[test]
    fn keys_drive_navigation_while_open() {
        let groups = abc();
        let mut nav = Navigator::new(12.0);
        nav.handle(Message::Open(image("b1", "a.png")), &groups);

        assert_eq!(nav.handle(Message::KeyPressed(NavKey::Next), &groups), Effect::Navigated);
        assert_eq!(nav.state().current_index(), 1);
        assert_eq!(
            nav.handle(Message::KeyPressed(NavKey::Previous), &groups),
            Effect::Navigated
        );
        assert_eq!(nav.state().current_index(), 0);
        assert!(matches!(
            nav.handle(Message::KeyPressed(NavKey::Dismiss), &groups),
            Effect::Closed { .. }
        ));
        assert!(!nav.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let groups = abc();
        let mut nav = Navigator::new(12.0);
        nav.open(image("b1", "a.png"), &groups);

        assert!(matches!(nav.close(), Effect::Closed { .. }));
        assert_eq!(nav.close(), Effect::None);
        assert!(!nav.is_open());
    }

    #[test]
    fn backdrop_and_close_control_both_close() {
        let groups = abc();
        for msg in [Message::BackdropPressed, Message::CloseRequested] {
            let mut nav = Navigator::new(12.0);
            nav.open(image("b1", "a.png"), &groups);
            assert!(matches!(nav.handle(msg, &groups), Effect::Closed { .. }));
        }
    }

    #[test]
    fn open_locks_scroll_and_close_releases_it_with_delayed_padding() {
        let groups = abc();
        let mut nav = Navigator::new(15.0);
        nav.open(image("b1", "a.png"), &groups);
        assert!(nav.scroll_lock().is_scroll_suppressed());
        assert_eq!(nav.scroll_lock().padding_right(), 15.0);

        let Effect::Closed { padding_removal } = nav.close() else {
            panic!("expected Closed effect");
        };
        assert!(!nav.scroll_lock().is_scroll_suppressed());
        assert_eq!(nav.scroll_lock().padding_right(), 15.0);

        let effect = nav.handle(Message::PaddingRemovalElapsed(padding_removal), &groups);
        assert_eq!(effect, Effect::PaddingRemoved);
        assert_eq!(nav.scroll_lock().padding_right(), 0.0);
    }

    #[test]
    fn reopen_before_delay_keeps_padding() {
        let groups = abc();
        let mut nav = Navigator::new(15.0);
        nav.open(image("b1", "a.png"), &groups);
        let Effect::Closed { padding_removal } = nav.close() else {
            panic!("expected Closed effect");
        };

        nav.open(image("b1", "b.png"), &groups);
        let effect = nav.handle(Message::PaddingRemovalElapsed(padding_removal), &groups);

        assert_eq!(effect, Effect::None);
        assert_eq!(nav.scroll_lock().padding_right(), 15.0);
        assert!(nav.is_open());
    }

    #[test]
    fn unknown_group_degrades_to_single_image() {
        let groups = abc();
        let mut nav = Navigator::new(12.0);
        let stray = image("missing", "lost.png");
        nav.open(stray.clone(), &groups);

        assert!(nav.is_open());
        assert_eq!(nav.counter_text(), "1 / 1");
        assert_eq!(nav.current_image(), Some(&stray));
        assert!(nav.is_previous_disabled());
        assert!(nav.is_next_disabled());
    }

    #[test]
    fn target_missing_from_its_group_falls_back_to_first_index() {
        let groups = abc();
        let mut nav = Navigator::new(12.0);
        let outsider = image("b1", "not-listed.png");
        nav.open(outsider.clone(), &groups);

        assert_eq!(nav.state().current_index(), 0);
        assert_eq!(nav.counter_text(), "1 / 3");
        assert_eq!(nav.current_image(), Some(&outsider));
        assert_eq!(nav.show_next(), Effect::Navigated);
        assert_eq!(nav.current_image().map(|i| i.filename.as_str()), Some("b.png"));
    }

    #[test]
    fn navigation_is_ignored_while_closed() {
        let groups = abc();
        let mut nav = Navigator::new(12.0);
        nav.open(image("b1", "a.png"), &groups);
        nav.close();

        assert_eq!(nav.show_next(), Effect::None);
        assert_eq!(nav.show_previous(), Effect::None);
        assert_eq!(nav.state().current_index(), 0);
    }
}
