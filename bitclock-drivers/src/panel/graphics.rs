//! Clock panel over an embedded-graphics draw target
//!
//! Works with any RGB565 `DrawTarget` (an ST7789 driven by mipidsi on the
//! board, `MockDisplay` in tests) plus an optional panel power-enable pin.

use bitclock_core::traits::{Anchor, ClockPanel, Color, DisplayError, Font, Point, Rect, TextStyle};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{
    Dimensions, DrawTarget, Drawable, Point as GfxPoint, Primitive, Size,
};
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use embedded_hal::digital::OutputPin;

/// Font used for the overlay digits
pub const DIGIT_FONT: &MonoFont<'static> = &FONT_10X20;

/// Font used for status text
pub const STATUS_FONT: &MonoFont<'static> = &FONT_6X10;

/// Panel driver
///
/// `PWR` switches the panel supply. The controller behind `display` has
/// already been reset and initialised, so the pin must be driven high
/// before that happens; [`ClockPanel::power_on`] only reasserts it and
/// never cycles the supply.
pub struct GraphicsPanel<D, PWR> {
    display: D,
    power: PWR,
}

impl<D, PWR> GraphicsPanel<D, PWR>
where
    D: DrawTarget<Color = Rgb565>,
    PWR: OutputPin,
{
    pub fn new(display: D, power: PWR) -> Self {
        Self { display, power }
    }

    /// Get the underlying draw target
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Release the draw target and power pin
    pub fn release(self) -> (D, PWR) {
        (self.display, self.power)
    }

    fn on_screen(&self, area: &Rectangle) -> Result<(), DisplayError> {
        if self.display.bounding_box().intersection(area).is_zero_sized() {
            Err(DisplayError::OutOfBounds)
        } else {
            Ok(())
        }
    }
}

fn to_rgb565(color: Color) -> Rgb565 {
    Rgb565::from(RawU16::new(color.raw()))
}

fn to_point(p: Point) -> GfxPoint {
    GfxPoint::new(p.x, p.y)
}

fn font_for(font: Font) -> &'static MonoFont<'static> {
    match font {
        Font::Digit => DIGIT_FONT,
        Font::Status => STATUS_FONT,
    }
}

fn placement(anchor: Anchor) -> (Alignment, Baseline) {
    match anchor {
        Anchor::MiddleCenter => (Alignment::Center, Baseline::Middle),
        Anchor::TopRight => (Alignment::Right, Baseline::Top),
    }
}

impl<D, PWR> ClockPanel for GraphicsPanel<D, PWR>
where
    D: DrawTarget<Color = Rgb565>,
    PWR: OutputPin,
{
    fn power_on(&mut self) -> Result<(), DisplayError> {
        self.power.set_high().map_err(|_| DisplayError::Communication)
    }

    fn fill_screen(&mut self, color: Color) -> Result<(), DisplayError> {
        self.display
            .clear(to_rgb565(color))
            .map_err(|_| DisplayError::Communication)
    }

    fn fill_circle(&mut self, center: Point, radius: u32, color: Color) -> Result<(), DisplayError> {
        // Diameter 2r + 1 keeps the centre pixel in the middle
        let circle = Circle::with_center(to_point(center), radius * 2 + 1);
        self.on_screen(&circle.bounding_box())?;

        circle
            .into_styled(PrimitiveStyle::with_fill(to_rgb565(color)))
            .draw(&mut self.display)
            .map_err(|_| DisplayError::Communication)
    }

    fn fill_rect(&mut self, area: Rect, color: Color) -> Result<(), DisplayError> {
        let rect = Rectangle::new(
            GfxPoint::new(area.x, area.y),
            Size::new(area.width, area.height),
        );
        self.on_screen(&rect)?;

        rect.into_styled(PrimitiveStyle::with_fill(to_rgb565(color)))
            .draw(&mut self.display)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle) -> Result<(), DisplayError> {
        let mut character_style = MonoTextStyleBuilder::new()
            .font(font_for(style.font))
            .text_color(to_rgb565(style.fg));
        if let Some(bg) = style.bg {
            character_style = character_style.background_color(to_rgb565(bg));
        }

        let (alignment, baseline) = placement(style.anchor);
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(baseline)
            .build();

        Text::with_text_style(text, to_point(at), character_style.build(), text_style)
            .draw(&mut self.display)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::prelude::{OriginDimensions, Pixel};

    /// Mock power-enable pin
    struct MockPin {
        high: bool,
        /// Number of high-to-low transitions
        drops: u32,
    }

    impl MockPin {
        fn new(high: bool) -> Self {
            Self { high, drops: 0 }
        }
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            if self.high {
                self.drops += 1;
            }
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    /// Draw target whose bus always fails
    struct BrokenBus;

    impl OriginDimensions for BrokenBus {
        fn size(&self) -> Size {
            Size::new(320, 170)
        }
    }

    impl DrawTarget for BrokenBus {
        type Color = Rgb565;
        type Error = ();

        fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), ()>
        where
            I: IntoIterator<Item = Pixel<Rgb565>>,
        {
            Err(())
        }
    }

    fn panel() -> GraphicsPanel<MockDisplay<Rgb565>, MockPin> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        GraphicsPanel::new(display, MockPin::new(false))
    }

    fn white_on_black(font: Font, anchor: Anchor) -> TextStyle {
        TextStyle {
            font,
            anchor,
            fg: Color::WHITE,
            bg: Some(Color::BLACK),
        }
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(to_rgb565(Color::WHITE), Rgb565::new(31, 63, 31));
        assert_eq!(to_rgb565(Color::BLACK), Rgb565::new(0, 0, 0));
        assert_eq!(to_rgb565(Color::RED), Rgb565::new(31, 0, 0));
    }

    #[test]
    fn test_power_on_drives_pin_high() {
        let mut panel = panel();
        panel.power_on().unwrap();
        let (_, pin) = panel.release();
        assert!(pin.high);
    }

    #[test]
    fn test_power_on_keeps_powered_panel_up() {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        let mut panel = GraphicsPanel::new(display, MockPin::new(true));

        panel.power_on().unwrap();
        panel.fill_screen(Color::BLACK).unwrap();
        panel.power_on().unwrap();

        let (display, pin) = panel.release();
        assert!(pin.high);
        assert_eq!(pin.drops, 0);
        assert!(display.get_pixel(GfxPoint::new(0, 0)).is_some());
    }

    #[test]
    fn test_fill_circle() {
        let mut panel = panel();
        panel
            .fill_circle(Point::new(10, 10), 3, Color::WHITE)
            .unwrap();

        let display = panel.display();
        assert_eq!(
            display.get_pixel(GfxPoint::new(10, 10)),
            Some(Rgb565::new(31, 63, 31))
        );
        assert_eq!(display.get_pixel(GfxPoint::new(10, 20)), None);
        assert_eq!(display.get_pixel(GfxPoint::new(20, 10)), None);
    }

    #[test]
    fn test_fill_rect() {
        let mut panel = panel();
        panel
            .fill_rect(Rect::new(4, 6, 5, 2), Color::LIGHT_GREY)
            .unwrap();

        let display = panel.display();
        assert!(display.get_pixel(GfxPoint::new(4, 6)).is_some());
        assert!(display.get_pixel(GfxPoint::new(8, 7)).is_some());
        assert_eq!(display.get_pixel(GfxPoint::new(9, 6)), None);
        assert_eq!(display.get_pixel(GfxPoint::new(4, 8)), None);
    }

    #[test]
    fn test_fill_screen_clears_everything() {
        let mut panel = panel();
        panel.fill_screen(Color::BLACK).unwrap();

        let display = panel.display();
        assert_eq!(
            display.get_pixel(GfxPoint::new(0, 0)),
            Some(Rgb565::new(0, 0, 0))
        );
        assert_eq!(
            display.get_pixel(GfxPoint::new(63, 63)),
            Some(Rgb565::new(0, 0, 0))
        );
    }

    #[test]
    fn test_digit_text_centered_on_point() {
        let mut panel = panel();
        panel
            .draw_text(
                "8",
                Point::new(20, 20),
                white_on_black(Font::Digit, Anchor::MiddleCenter),
            )
            .unwrap();

        let display = panel.display();
        // Background fills the whole glyph cell around the anchor
        assert!(display.get_pixel(GfxPoint::new(20, 20)).is_some());
        assert_eq!(display.get_pixel(GfxPoint::new(40, 20)), None);
        assert_eq!(display.get_pixel(GfxPoint::new(20, 40)), None);
    }

    #[test]
    fn test_status_text_hangs_from_top_right() {
        let mut panel = panel();
        panel
            .draw_text(
                "TIME?",
                Point::new(60, 2),
                white_on_black(Font::Status, Anchor::TopRight),
            )
            .unwrap();

        let display = panel.display();
        assert!(display.get_pixel(GfxPoint::new(50, 5)).is_some());
        assert_eq!(display.get_pixel(GfxPoint::new(50, 0)), None);
        assert_eq!(display.get_pixel(GfxPoint::new(10, 5)), None);
    }

    #[test]
    fn test_offscreen_rect_rejected() {
        let mut panel = panel();
        assert_eq!(
            panel.fill_rect(Rect::new(100, 100, 4, 4), Color::WHITE),
            Err(DisplayError::OutOfBounds)
        );
        assert_eq!(
            panel.fill_circle(Point::new(-50, 10), 3, Color::WHITE),
            Err(DisplayError::OutOfBounds)
        );
    }

    #[test]
    fn test_bus_error_maps_to_communication() {
        let mut panel = GraphicsPanel::new(BrokenBus, MockPin::new(false));
        assert_eq!(
            panel.fill_screen(Color::BLACK),
            Err(DisplayError::Communication)
        );
        assert_eq!(
            panel.fill_rect(Rect::new(0, 0, 10, 10), Color::BLACK),
            Err(DisplayError::Communication)
        );
    }
}
