//! Incremental clock face renderer
//!
//! Indicator dots are repainted on every render: there are only twenty of
//! them and a filled circle is a single panel command. The numeric overlay
//! is diffed per column against a [`GlyphCache`], because a text redraw
//! costs an erase plus a glyph blit and five of the six digits rarely
//! change from one second to the next.

use crate::config::{
    RenderConfig, BRIGHTNESS_LEVELS, TIME_ERROR_ANCHOR, TIME_ERROR_BOX, TIME_ERROR_TEXT,
};
use crate::time::TimeOfDay;
use crate::traits::{
    Anchor, BacklightControl, ClockPanel, DisplayError, Font, Point, Rect, TextStyle,
};

use super::layout::{compute_layout, dot_states, separator_centers, ColumnLayout, COLUMN_COUNT};
use super::overlay::GlyphCache;

/// Render engine
///
/// Owns the panel and backlight. Nothing is drawn until [`initialize`]
/// has succeeded; draw calls before that return `Ok(())` without touching
/// the hardware.
///
/// [`initialize`]: RenderEngine::initialize
pub struct RenderEngine<P, B> {
    panel: P,
    backlight: B,
    config: RenderConfig,
    layout: Option<[ColumnLayout; COLUMN_COUNT]>,
    glyphs: GlyphCache,
    /// Overlay strip currently holds digits
    overlay_visible: bool,
    /// Time-unavailable indicator is on screen
    time_error_visible: bool,
    brightness: u8,
}

impl<P: ClockPanel, B: BacklightControl> RenderEngine<P, B> {
    /// Create an engine; call [`RenderEngine::initialize`] before drawing
    pub fn new(panel: P, backlight: B, config: RenderConfig) -> Self {
        Self {
            panel,
            backlight,
            brightness: config.default_brightness,
            config,
            layout: None,
            glyphs: GlyphCache::new(),
            overlay_visible: false,
            time_error_visible: false,
        }
    }

    /// Compute the column layout, light the backlight and bring the panel up
    ///
    /// The engine stays uninitialised if any step fails, so the call can be
    /// retried.
    pub fn initialize(&mut self) -> Result<(), DisplayError> {
        let layout = compute_layout(&self.config);

        self.set_brightness(self.config.default_brightness)?;
        self.panel.power_on()?;
        self.panel.fill_screen(self.config.bg)?;

        self.glyphs.invalidate();
        self.overlay_visible = false;
        self.time_error_visible = false;
        self.layout = Some(layout);
        Ok(())
    }

    /// Check if [`RenderEngine::initialize`] has completed
    pub fn is_initialized(&self) -> bool {
        self.layout.is_some()
    }

    /// Column placement, once initialised
    pub fn layout(&self) -> Option<&[ColumnLayout; COLUMN_COUNT]> {
        self.layout.as_ref()
    }

    /// Draw the clock face for `time`
    ///
    /// All dots are redrawn. With `show_overlay` the digit strip is
    /// updated column by column; without it a previously shown strip is
    /// erased and the glyph cache forgotten.
    pub fn render(&mut self, time: TimeOfDay, show_overlay: bool) -> Result<(), DisplayError> {
        let Some(layout) = self.layout else {
            return Ok(());
        };
        let digits = time.digits();

        for (column, digit) in layout.iter().zip(digits) {
            self.draw_dots(column, digit)?;
        }

        if show_overlay {
            self.draw_overlay(&layout, &digits)?;
        } else if self.overlay_visible {
            self.clear_overlay()?;
        }

        Ok(())
    }

    /// Apply a brightness level, saturating at the brightest level
    pub fn set_brightness(&mut self, level: u8) -> Result<(), DisplayError> {
        let level = level.min(BRIGHTNESS_LEVELS as u8 - 1);
        self.backlight.set_duty(self.config.duty_for_level(level))?;
        self.brightness = level;
        Ok(())
    }

    /// Brightness level last applied
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Show the time-unavailable indicator (drawn once per failure streak)
    pub fn show_time_error(&mut self) -> Result<(), DisplayError> {
        if self.layout.is_none() || self.time_error_visible {
            return Ok(());
        }
        let (x, y) = TIME_ERROR_ANCHOR;
        let style = TextStyle {
            font: Font::Status,
            anchor: Anchor::TopRight,
            fg: self.config.error,
            bg: Some(self.config.bg),
        };
        self.panel.draw_text(TIME_ERROR_TEXT, Point::new(x, y), style)?;
        self.time_error_visible = true;
        Ok(())
    }

    /// Erase the time-unavailable indicator if it is showing
    pub fn clear_time_error(&mut self) -> Result<(), DisplayError> {
        if !self.time_error_visible {
            return Ok(());
        }
        let (x, y) = TIME_ERROR_ANCHOR;
        let (w, h) = TIME_ERROR_BOX;
        self.panel
            .fill_rect(Rect::new(x - w as i32, y, w, h), self.config.bg)?;
        self.time_error_visible = false;
        Ok(())
    }

    /// Check if the time-unavailable indicator is on screen
    pub fn time_error_visible(&self) -> bool {
        self.time_error_visible
    }

    /// Check if the numeric overlay is on screen
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Get the panel
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Get the panel mutably
    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Get the backlight
    pub fn backlight(&self) -> &B {
        &self.backlight
    }

    /// Get the backlight mutably
    pub fn backlight_mut(&mut self) -> &mut B {
        &mut self.backlight
    }

    fn draw_dots(&mut self, column: &ColumnLayout, digit: u8) -> Result<(), DisplayError> {
        for (slot, _weight, on) in dot_states(column.column, digit) {
            let color = if on {
                self.config.dot_on
            } else {
                self.config.dot_off
            };
            let center = column.dot_center(slot, &self.config);
            self.panel.fill_circle(center, column.dot_radius, color)?;
        }
        Ok(())
    }

    fn draw_overlay(
        &mut self,
        layout: &[ColumnLayout; COLUMN_COUNT],
        digits: &[u8; COLUMN_COUNT],
    ) -> Result<(), DisplayError> {
        if self.glyphs.is_empty() {
            // First frame with the overlay: wipe the strip once and draw it whole
            self.clear_text_area()?;
            self.overlay_visible = true;
            for x in separator_centers(layout, &self.config) {
                self.draw_glyph(":", x)?;
            }
            for (i, (column, &digit)) in layout.iter().zip(digits).enumerate() {
                self.draw_digit(column, digit)?;
                self.glyphs.store(i, digit);
            }
            return Ok(());
        }

        for (i, (column, &digit)) in layout.iter().zip(digits).enumerate() {
            if !self.glyphs.is_stale(i, digit) {
                continue;
            }
            self.panel
                .fill_rect(column.text_cell(&self.config), self.config.bg)?;
            self.draw_digit(column, digit)?;
            self.glyphs.store(i, digit);
        }
        Ok(())
    }

    fn clear_overlay(&mut self) -> Result<(), DisplayError> {
        self.clear_text_area()?;
        self.glyphs.invalidate();
        self.overlay_visible = false;
        Ok(())
    }

    fn clear_text_area(&mut self) -> Result<(), DisplayError> {
        let area = Rect::new(
            0,
            self.config.text_area_top,
            self.config.screen_w as u32,
            self.config.text_area_height,
        );
        self.panel.fill_rect(area, self.config.bg)
    }

    fn draw_digit(&mut self, column: &ColumnLayout, digit: u8) -> Result<(), DisplayError> {
        let mut buf = [0u8; 4];
        let glyph = char::from(b'0' + digit % 10).encode_utf8(&mut buf);
        self.draw_glyph(glyph, column.center_x())
    }

    /// Draw a glyph twice, one pixel apart, for a bold stroke
    fn draw_glyph(&mut self, glyph: &str, center_x: i32) -> Result<(), DisplayError> {
        let style = TextStyle {
            font: Font::Digit,
            anchor: Anchor::MiddleCenter,
            fg: self.config.text,
            bg: None,
        };
        let y = self.config.text_y;
        self.panel.draw_text(glyph, Point::new(center_x, y), style)?;
        self.panel.draw_text(glyph, Point::new(center_x + 1, y), style)
    }
}
