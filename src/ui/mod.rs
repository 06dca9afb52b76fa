// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each view
//! borrows its model and emits component messages that the application shell
//! routes back.
//!
//! - [`form`] - Generation form (prompt, aspect ratio, image count)
//! - [`gallery`] - Batch groups, placeholders and image cards
//! - [`lightbox`] - Modal overlay with previous/next/close controls
//! - [`widgets`] - Custom Iced widgets (scroll guard, spinner)
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Color helpers

pub mod design_tokens;
pub mod form;
pub mod gallery;
pub mod lightbox;
pub mod styles;
pub mod theme;
pub mod widgets;
