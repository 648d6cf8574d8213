//! The running vertical offset used to position the next table.
//!
//! A small value object threaded by return value, so every state transition
//! of the composer is explicit and testable rather than hidden in closure
//! captures.

use crate::style::{BLOCK_BREAK_MARGIN, BOTTOM_MARGIN, MARGIN, PAGE_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    y: f32,
}

impl PageCursor {
    pub fn at(y: f32) -> Self {
        Self { y }
    }

    /// Cursor position on a fresh page.
    pub fn top() -> Self {
        Self::at(MARGIN)
    }

    pub fn y(self) -> f32 {
        self.y
    }

    #[must_use]
    pub fn advance(self, dy: f32) -> Self {
        Self { y: self.y + dy }
    }

    /// Vertical space left before the flowing-content bottom margin.
    pub fn remaining(self) -> f32 {
        PAGE_HEIGHT - BOTTOM_MARGIN - self.y
    }

    pub fn needs_page_break(self, required: f32) -> bool {
        required > self.remaining()
    }

    /// Atomic blocks break early: once the cursor is within the block break
    /// margin of the page bottom there is no point starting a hazard grid.
    pub fn past_block_threshold(self) -> bool {
        self.y > PAGE_HEIGHT - BLOCK_BREAK_MARGIN
    }
}
