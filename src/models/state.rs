//! Slide-index state machine with modulo wraparound
//!
//! The only mutable state the carousel owns is a zero-based pointer into a
//! fixed slide sequence. Every transition wraps modulo the slide count, so
//! the index is always valid; direct jumps are validated instead because
//! they bypass the modulo arithmetic.

use crate::error::CarouselError;

/// Navigation direction for a single slide transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Step back one slide, wrapping to the last from the first
    Previous,
    /// Step forward one slide, wrapping to the first from the last
    Next,
}

/// Current-slide pointer over a fixed, non-empty slide sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideState {
    count: usize,
    current: usize,
}

impl SlideState {
    /// Creates a state machine over `count` slides, starting at slide 0.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub fn new(count: usize) -> Result<Self, CarouselError> {
        if count == 0 {
            return Err(CarouselError::EmptySlideSet);
        }
        Ok(Self { count, current: 0 })
    }

    /// Returns the number of slides
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the current slide index
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Moves one slide in the given direction, wrapping at both ends.
    ///
    /// Next is `(i + 1) mod n`; previous is `(i + n - 1) mod n`. Returns the
    /// new current index.
    pub const fn advance(&mut self, direction: Direction) -> usize {
        self.current = match direction {
            Direction::Next => (self.current + 1) % self.count,
            Direction::Previous => (self.current + self.count - 1) % self.count,
        };
        self.current
    }

    /// Jumps directly to `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a valid slide index. Pagination
    /// indicators always carry valid indices, so this only guards direct
    /// API misuse.
    pub const fn jump_to(&mut self, index: usize) -> Result<usize, CarouselError> {
        if index >= self.count {
            return Err(CarouselError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        self.current = index;
        Ok(self.current)
    }
}
