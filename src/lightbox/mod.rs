// SPDX-License-Identifier: MPL-2.0
//! Modal lightbox for stepping through the images of one gallery group.
//!
//! The module has no UI dependency. [`Navigator`] owns the viewer state and
//! the background scroll lock. Sibling discovery is injected through
//! [`GroupResolver`], so the state machine can be driven from tests without a
//! window.

pub mod group;
pub mod navigator;
pub mod scroll_lock;

pub use group::{GroupResolver, ImageGroup, ImageRef, NavigationError};
pub use navigator::{Controls, Effect, Message, NavKey, Navigator, ViewerState};
pub use scroll_lock::{PaddingRemoval, ScrollLock};
