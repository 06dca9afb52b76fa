// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` is a desktop client for an image-generation backend, built
//! with the Iced GUI framework.
//!
//! It submits generation batches, follows their tasks until completion, shows
//! the results grouped by batch and lets the user browse each batch in a modal
//! lightbox.
//!
//! - [`lightbox`] - Modal navigator state machine, group discovery, scroll lock
//! - [`generation`] - Backend client and task polling
//! - [`gallery`] - Gallery page model
//! - [`config`] - Persisted settings
//! - [`i18n`] - Fluent localization
//! - [`ui`] - Iced views and widgets
//! - [`app`] - Application shell

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod generation;
pub mod i18n;
pub mod lightbox;
pub mod ui;
