//! Panel geometry, colours and backlight levels

use crate::traits::Color;

/// Panel width in landscape orientation (pixels)
pub const SCREEN_W: i32 = 320;

/// Panel height in landscape orientation (pixels)
pub const SCREEN_H: i32 = 170;

/// Background colour
pub const BG_COLOR: Color = Color::BLACK;

/// Colour of an unlit indicator dot
pub const OFF_COLOR: Color = Color::LIGHT_GREY;

/// Colour of a lit indicator dot
pub const ON_COLOR: Color = Color::WHITE;

/// Overlay digit colour
pub const TEXT_COLOR: Color = Color::WHITE;

/// Time-unavailable indicator colour
pub const ERROR_COLOR: Color = Color::RED;

/// Top edge of the dot grid
pub const CLOCK_TOP: i32 = 20;

/// Bottom edge of the dot grid (leaves room for the overlay)
pub const CLOCK_BOTTOM: i32 = 135;

/// Gap between the tens and ones column of one field
pub const CLOCK_GAP_SMALL: i32 = 8;

/// Gap between the hour, minute and second pairs
pub const CLOCK_GAP_LARGE: i32 = 20;

/// Indicator dot radius
pub const CLOCK_DOT_RADIUS: u32 = 10;

/// Width of one digit column
pub const CLOCK_COL_WIDTH: i32 = 30;

/// Top of the numeric overlay strip
pub const TEXT_AREA_TOP: i32 = 145;

/// Height of the numeric overlay strip
pub const TEXT_AREA_HEIGHT: u32 = 25;

/// Vertical centre of the overlay glyphs
pub const TEXT_Y_POSITION: i32 = 155;

/// Text shown while the time source is unavailable
pub const TIME_ERROR_TEXT: &str = "TIME?";

/// Top-right anchor of the time-unavailable indicator
pub const TIME_ERROR_ANCHOR: (i32, i32) = (SCREEN_W - 4, 4);

/// Box erased when the indicator is withdrawn (width, height)
pub const TIME_ERROR_BOX: (u32, u32) = (48, 16);

/// Number of discrete backlight levels
pub const BRIGHTNESS_LEVELS: usize = 6;

/// Backlight duty value (8-bit) for each level, dimmest first
pub const BRIGHTNESS_VALUES: [u8; BRIGHTNESS_LEVELS] = [25, 75, 125, 175, 225, 255];

/// Level applied at start-up
pub const DEFAULT_BRIGHTNESS_INDEX: u8 = 0;

/// Backlight PWM frequency
pub const PWM_FREQ_HZ: u32 = 10_000;

/// Everything the render engine needs to lay out and paint the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderConfig {
    pub screen_w: i32,
    pub col_width: i32,
    pub gap_small: i32,
    pub gap_large: i32,
    pub dot_radius: u32,
    pub clock_top: i32,
    pub clock_bottom: i32,
    pub text_area_top: i32,
    pub text_area_height: u32,
    pub text_y: i32,
    pub bg: Color,
    pub dot_on: Color,
    pub dot_off: Color,
    pub text: Color,
    pub error: Color,
    pub brightness_values: [u8; BRIGHTNESS_LEVELS],
    pub default_brightness: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_w: SCREEN_W,
            col_width: CLOCK_COL_WIDTH,
            gap_small: CLOCK_GAP_SMALL,
            gap_large: CLOCK_GAP_LARGE,
            dot_radius: CLOCK_DOT_RADIUS,
            clock_top: CLOCK_TOP,
            clock_bottom: CLOCK_BOTTOM,
            text_area_top: TEXT_AREA_TOP,
            text_area_height: TEXT_AREA_HEIGHT,
            text_y: TEXT_Y_POSITION,
            bg: BG_COLOR,
            dot_on: ON_COLOR,
            dot_off: OFF_COLOR,
            text: TEXT_COLOR,
            error: ERROR_COLOR,
            brightness_values: BRIGHTNESS_VALUES,
            default_brightness: DEFAULT_BRIGHTNESS_INDEX,
        }
    }
}

impl RenderConfig {
    /// Width of the six-column block including its gaps
    pub const fn block_width(&self) -> i32 {
        6 * self.col_width + 3 * self.gap_small + 2 * self.gap_large
    }

    /// Duty value for a brightness level, saturating at the brightest entry
    pub fn duty_for_level(&self, level: u8) -> u8 {
        let index = (level as usize).min(BRIGHTNESS_LEVELS - 1);
        self.brightness_values[index]
    }
}
