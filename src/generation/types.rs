// SPDX-License-Identifier: MPL-2.0
//! Wire types exchanged with the generation backend.

use crate::config::{MIN_NUM_IMAGES, PLACEHOLDER_PROMPT, SKELETON_BASE_WIDTH};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aspect ratios accepted by the `/generate` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[default]
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "9:16")]
    Tall,
    #[serde(rename = "3:2")]
    Classic,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Standard,
        AspectRatio::Wide,
        AspectRatio::Tall,
        AspectRatio::Classic,
    ];

    /// Label as sent to the backend, e.g. `"16:9"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Standard => "4:3",
            AspectRatio::Wide => "16:9",
            AspectRatio::Tall => "9:16",
            AspectRatio::Classic => "3:2",
        }
    }

    /// Parses a label, falling back to the default ratio for unknown input.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|ratio| ratio.label() == label.trim())
            .unwrap_or_default()
    }

    /// Height over width.
    #[must_use]
    pub fn height_factor(self) -> f32 {
        match self {
            AspectRatio::Square => 1.0,
            AspectRatio::Standard => 3.0 / 4.0,
            AspectRatio::Wide => 9.0 / 16.0,
            AspectRatio::Tall => 16.0 / 9.0,
            AspectRatio::Classic => 2.0 / 3.0,
        }
    }

    /// Height of a placeholder card of the reference width.
    #[must_use]
    pub fn skeleton_height(self) -> f32 {
        SKELETON_BASE_WIDTH * self.height_factor()
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses the requested image count, falling back to one on invalid input.
///
/// Only the lower bound is enforced; the backend creates one task per image.
#[must_use]
pub fn parse_num_images(input: &str) -> u32 {
    input
        .trim()
        .parse::<u32>()
        .unwrap_or(MIN_NUM_IMAGES)
        .max(MIN_NUM_IMAGES)
}

/// A generation request as submitted by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
    pub num_images: u32,
}

impl GenerationRequest {
    /// Text shown above the placeholder cards while the batch is generating.
    #[must_use]
    pub fn skeleton_label(&self) -> &str {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            PLACEHOLDER_PROMPT
        } else {
            prompt
        }
    }
}

/// Raw response of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SubmitResponse {
    Success {
        batch_id: String,
        task_ids: Vec<String>,
    },
    Error {
        #[serde(default)]
        message: String,
    },
}

/// An accepted batch submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub batch_id: String,
    pub task_ids: Vec<String>,
}

/// Response of `GET /task_status/{id}`.
///
/// Unknown task ids come back as `{"status": "not_found"}` without a
/// `completed` flag, which reads as still pending.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TaskStatus {
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl TaskStatus {
    #[must_use]
    pub fn is_succeeded(&self) -> bool {
        self.status == "succeeded"
    }
}

/// Response of `GET /images`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct BatchListing {
    #[serde(default)]
    pub batches: Vec<Batch>,
}

/// A set of images produced by one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Batch {
    pub id: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub aspect_ratio: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Batch {
    /// `created_at` rendered as local date and time.
    ///
    /// The backend stores naive ISO-8601 timestamps. Anything that does not
    /// parse is shown verbatim.
    #[must_use]
    pub fn created_display(&self) -> String {
        let raw = self.created_at.trim();
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|timestamp| timestamp.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|_| raw.to_string())
    }
}
