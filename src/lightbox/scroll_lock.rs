// SPDX-License-Identifier: MPL-2.0
//! Background scroll suppression with scrollbar-width compensation.
//!
//! While the lightbox is open the gallery behind it must not scroll. Hiding the
//! scrollbar would make the content jump sideways, so an equal right padding
//! is applied instead. The padding is removed some time after closing, once
//! the close transition is over.
//!
//! The delayed removal is a scheduled task identified by a [`PaddingRemoval`]
//! ticket. Locking again bumps the generation, which turns every ticket that
//! is still in flight into a no-op.

/// Scroll lock state for the content behind the overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollLock {
    scroll_suppressed: bool,
    padding_right: f32,
    generation: u64,
}

/// Ticket for a deferred padding removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingRemoval {
    generation: u64,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses background scrolling and compensates for the hidden scrollbar.
    ///
    /// Any removal scheduled by a previous [`unlock`](Self::unlock) is cancelled.
    pub fn lock(&mut self, scrollbar_width: f32) {
        self.generation = self.generation.wrapping_add(1);
        self.scroll_suppressed = true;
        self.padding_right = if scrollbar_width > 0.0 {
            scrollbar_width
        } else {
            0.0
        };
    }

    /// Restores background scrolling and schedules the padding removal.
    ///
    /// Returns `None` when the lock was not held.
    pub fn unlock(&mut self) -> Option<PaddingRemoval> {
        if !self.scroll_suppressed {
            return None;
        }
        self.scroll_suppressed = false;
        self.generation = self.generation.wrapping_add(1);
        Some(PaddingRemoval {
            generation: self.generation,
        })
    }

    /// Runs a scheduled removal. Returns `true` if the padding was cleared.
    pub fn complete_removal(&mut self, ticket: PaddingRemoval) -> bool {
        if ticket.generation != self.generation || self.scroll_suppressed {
            return false;
        }
        self.padding_right = 0.0;
        true
    }

    #[must_use]
    pub fn is_scroll_suppressed(&self) -> bool {
        self.scroll_suppressed
    }

    /// Right padding to apply to the background content, in logical pixels.
    #[must_use]
    pub fn padding_right(&self) -> f32 {
        self.padding_right
    }
}
