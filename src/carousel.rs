//! Promo banner carousel position.

use std::time::Duration;

/// How often the carousel advances on its own.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(5);

/// Wrap-around index over a fixed number of banners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Create a carousel over `len` banners, starting at the first.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Index of the banner currently shown.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of banners.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if there is nothing to rotate.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the next banner, wrapping to the first. No-op without banners.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }

        self.index
    }

    /// Move to the previous banner, wrapping to the last. No-op without banners.
    pub fn previous(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }

        self.index
    }

    /// Change the banner count, rewinding if the current index falls off the end.
    pub fn resize(&mut self, len: usize) {
        self.len = len;

        if self.index >= len {
            self.index = 0;
        }
    }
}
