//! Column geometry and BCD bit assignment
//!
//! Each of the six digit columns draws a vertical stack of indicator
//! dots. A column only populates as many dots as it needs for its largest
//! legal digit, and those dots always take the low-order weights of the
//! 8-4-2-1 ladder.

use crate::config::RenderConfig;
use crate::traits::{Point, Rect};

/// Weight of each vertical slot, top to bottom
pub const SLOT_WEIGHTS: [u8; SLOT_COUNT] = [8, 4, 2, 1];

/// Vertical dot positions per column
pub const SLOT_COUNT: usize = 4;

/// Number of digit columns
pub const COLUMN_COUNT: usize = 6;

/// Digit column identity, in left-to-right order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Column {
    HourTens,
    HourOnes,
    MinuteTens,
    MinuteOnes,
    SecondTens,
    SecondOnes,
}

impl Column {
    /// All columns, left to right
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::HourTens,
        Column::HourOnes,
        Column::MinuteTens,
        Column::MinuteOnes,
        Column::SecondTens,
        Column::SecondOnes,
    ];

    /// Position in [`Column::ALL`] and in `TimeOfDay::digits`
    pub const fn index(self) -> usize {
        match self {
            Column::HourTens => 0,
            Column::HourOnes => 1,
            Column::MinuteTens => 2,
            Column::MinuteOnes => 3,
            Column::SecondTens => 4,
            Column::SecondOnes => 5,
        }
    }

    /// Largest digit this column can show
    pub const fn max_digit(self) -> u8 {
        match self {
            Column::HourTens => 2,
            Column::MinuteTens | Column::SecondTens => 5,
            Column::HourOnes | Column::MinuteOnes | Column::SecondOnes => 9,
        }
    }

    /// Number of indicator dots (bits) drawn for this column
    pub const fn bit_depth(self) -> u8 {
        match self {
            Column::HourTens => 2,
            Column::MinuteTens | Column::SecondTens => 3,
            Column::HourOnes | Column::MinuteOnes | Column::SecondOnes => 4,
        }
    }

    /// First populated slot; slots above it are never drawn
    pub const fn first_slot(self) -> usize {
        SLOT_COUNT - self.bit_depth() as usize
    }

    /// Gap to the right of this column, `None` for the last one
    const fn gap_after(self, config: &RenderConfig) -> Option<i32> {
        match self {
            Column::HourTens | Column::MinuteTens | Column::SecondTens => Some(config.gap_small),
            Column::HourOnes | Column::MinuteOnes => Some(config.gap_large),
            Column::SecondOnes => None,
        }
    }
}

/// On/off state of each populated dot of a column, top to bottom
///
/// Yields `(slot, weight, on)` for the low-order `bit_depth` slots.
pub fn dot_states(column: Column, digit: u8) -> impl Iterator<Item = (usize, u8, bool)> {
    let first = column.first_slot();
    (first..SLOT_COUNT).map(move |slot| {
        let weight = SLOT_WEIGHTS[slot];
        (slot, weight, digit & weight != 0)
    })
}

/// Placement of one digit column on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColumnLayout {
    pub column: Column,
    /// Left edge
    pub x: i32,
    pub width: i32,
    pub dot_radius: u32,
}

impl ColumnLayout {
    /// Horizontal centre of the column
    pub const fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Centre of the dot in the given vertical slot
    pub fn dot_center(&self, slot: usize, config: &RenderConfig) -> Point {
        let spacing = (config.clock_bottom - config.clock_top) / SLOT_COUNT as i32;
        let y = config.clock_top + slot as i32 * spacing + spacing / 2;
        Point::new(self.center_x(), y)
    }

    /// Overlay cell belonging to this column
    pub fn text_cell(&self, config: &RenderConfig) -> Rect {
        Rect::new(
            self.x,
            config.text_area_top,
            self.width as u32,
            config.text_area_height,
        )
    }
}

/// Lay the six columns out as one block centred horizontally
pub fn compute_layout(config: &RenderConfig) -> [ColumnLayout; COLUMN_COUNT] {
    let mut x = (config.screen_w - config.block_width()) / 2;

    Column::ALL.map(|column| {
        let layout = ColumnLayout {
            column,
            x,
            width: config.col_width,
            dot_radius: config.dot_radius,
        };
        if let Some(gap) = column.gap_after(config) {
            x += config.col_width + gap;
        }
        layout
    })
}

/// Horizontal centres of the two `:` separators (between the pairs)
pub fn separator_centers(
    layout: &[ColumnLayout; COLUMN_COUNT],
    config: &RenderConfig,
) -> [i32; 2] {
    let after = |c: Column| {
        let l = &layout[c.index()];
        l.x + l.width + config.gap_large / 2
    };
    [after(Column::HourOnes), after(Column::MinuteOnes)]
}
