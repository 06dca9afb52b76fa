// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the form, gallery and lightbox.

pub mod button;
pub mod container;
pub mod overlay;

pub use button::{overlay as button_overlay, primary as button_primary};
