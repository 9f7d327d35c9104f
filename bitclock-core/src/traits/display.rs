//! Display panel trait
//!
//! The panel only has to understand a handful of primitives: filled
//! circles for the indicator dots, filled rectangles for erasing, and
//! anchored text for the numeric overlay and status indicator.

/// Errors that can occur while driving the panel or its backlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus or controller communication failed
    Communication,
    /// Backlight output could not be updated
    Backlight,
    /// Primitive lies outside the drawable area
    OutOfBounds,
}

/// RGB565 colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
    pub const LIGHT_GREY: Self = Self(0x7BEF);
    pub const RED: Self = Self(0xF800);

    /// Raw RGB565 value
    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// Pixel coordinate (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Font selection; the panel maps these onto whatever fonts it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Overlay digits and separators
    Digit,
    /// Small status text
    Status,
}

/// Which point of the text bounding box sits on the given coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Anchor {
    MiddleCenter,
    TopRight,
}

/// Text rendering parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    pub font: Font,
    pub anchor: Anchor,
    pub fg: Color,
    /// When set, glyph cells are filled with this colour (auto-erase)
    pub bg: Option<Color>,
}

/// Display panel trait
///
/// Implementations handle the specifics of the controller and bus.
/// Drawing is immediate: there is no frame buffer to flush.
pub trait ClockPanel {
    /// Power the panel (and its backlight supply) on
    fn power_on(&mut self) -> Result<(), DisplayError>;

    /// Fill the entire panel with one colour
    fn fill_screen(&mut self, color: Color) -> Result<(), DisplayError>;

    /// Draw a filled circle
    fn fill_circle(&mut self, center: Point, radius: u32, color: Color) -> Result<(), DisplayError>;

    /// Draw a filled rectangle
    fn fill_rect(&mut self, area: Rect, color: Color) -> Result<(), DisplayError>;

    /// Draw text positioned by `style.anchor` relative to `at`
    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle) -> Result<(), DisplayError>;
}

