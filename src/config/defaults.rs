// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Default base URL of the generation backend.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Default interval between two task status checks (in seconds).
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Minimum task status poll interval (in seconds).
pub const MIN_POLL_INTERVAL_SECS: u64 = 1;

/// Maximum task status poll interval (in seconds).
pub const MAX_POLL_INTERVAL_SECS: u64 = 60;

/// Default HTTP request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Number of gallery images fetched concurrently.
pub const IMAGE_FETCH_CONCURRENCY: usize = 4;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Delay before the scroll compensation padding is removed after closing.
/// Outlasts the overlay close transition.
pub const DEFAULT_PADDING_REMOVAL_DELAY_MS: u64 = 300;

/// Width of the gallery scrollbar hidden while the lightbox is open.
pub const DEFAULT_SCROLLBAR_WIDTH: f32 = 12.0;

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Number of images requested when the form is first shown.
pub const DEFAULT_NUM_IMAGES: u32 = 1;

/// Smallest image count a batch may request.
pub const MIN_NUM_IMAGES: u32 = 1;

/// Largest image count a batch may request.
pub const MAX_NUM_IMAGES: u32 = 8;

/// Label shown on skeleton groups when the prompt is empty.
pub const PLACEHOLDER_PROMPT: &str = "Generating image...";

// ==========================================================================
// Skeleton Defaults
// ==========================================================================

/// Reference width used to size skeleton cards (logical pixels).
pub const SKELETON_BASE_WIDTH: f32 = 300.0;
