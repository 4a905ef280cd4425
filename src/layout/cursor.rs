//! Vertical write position on the active page.

/// The current write position, measured down from the top margin.
///
/// A cursor is a plain value: every movement returns a new cursor, and the
/// page composer keeps the one for the active page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    top: f32,
    limit: f32,
    used: f32,
}

impl Cursor {
    /// A cursor at the top of a fresh page.
    ///
    /// `top` is the absolute y of the content area and `limit` its height.
    pub fn new(top: f32, limit: f32) -> Self {
        Self {
            top,
            limit,
            used: 0.0,
        }
    }

    /// Absolute y of the next line slot.
    pub fn y(&self) -> f32 {
        self.top + self.used
    }

    /// Space consumed on this page.
    pub fn used(&self) -> f32 {
        self.used
    }

    /// Space left on this page.
    pub fn remaining(&self) -> f32 {
        self.limit - self.used
    }

    /// Check if nothing has been placed on this page yet.
    pub fn at_top(&self) -> bool {
        self.used == 0.0
    }

    /// Check if a line of `height` fits below the cursor.
    pub fn fits(&self, height: f32) -> bool {
        self.used + height <= self.limit
    }

    /// Cursor moved down past a line of `height`.
    pub fn advanced(self, height: f32) -> Self {
        Self {
            used: self.used + height,
            ..self
        }
    }

    /// Cursor moved down by a gap, stopping at the bottom of the page.
    pub fn skipped(self, gap: f32) -> Self {
        Self {
            used: (self.used + gap).min(self.limit),
            ..self
        }
    }

    /// Cursor at the top of the next page.
    pub fn reset(self) -> Self {
        Self { used: 0.0, ..self }
    }
}
