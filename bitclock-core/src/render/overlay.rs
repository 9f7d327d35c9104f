//! Digit glyph cache for the numeric overlay

use super::layout::COLUMN_COUNT;

/// Last digit drawn as text in each column
///
/// `None` means the column has not been drawn since the overlay was last
/// cleared, which forces a redraw regardless of the digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphCache {
    slots: [Option<u8>; COLUMN_COUNT],
}

impl GlyphCache {
    pub const fn new() -> Self {
        Self {
            slots: [None; COLUMN_COUNT],
        }
    }

    /// True when no column has been drawn
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied().flatten()
    }

    /// Whether `digit` differs from what column `index` shows
    pub fn is_stale(&self, index: usize, digit: u8) -> bool {
        self.get(index) != Some(digit)
    }

    pub fn store(&mut self, index: usize, digit: u8) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(digit);
        }
    }

    /// Forget every column
    pub fn invalidate(&mut self) {
        self.slots = [None; COLUMN_COUNT];
    }
}
