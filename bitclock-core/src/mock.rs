//! Test doubles shared by the unit tests

use heapless::{String, Vec};

use crate::time::{TimeError, TimeOfDay};
use crate::traits::{
    BacklightControl, ClockPanel, Color, DigitalInput, DisplayError, Level, Point, Rect,
    TextStyle, TimeSource,
};

/// One recorded panel call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    PowerOn,
    FillScreen(Color),
    Circle(Point, u32, Color),
    FillRect(Rect, Color),
    Text(String<8>, Point, TextStyle),
}

/// Panel that records every call
pub struct RecordingPanel {
    pub ops: Vec<DrawOp, 256>,
    /// When set, every call fails with this error
    pub fail_with: Option<DisplayError>,
}

impl RecordingPanel {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fail_with: None,
        }
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    fn record(&mut self, op: DrawOp) -> Result<(), DisplayError> {
        if let Some(e) = self.fail_with {
            return Err(e);
        }
        self.ops.push(op).expect("recording panel overflow");
        Ok(())
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, u32, Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Circle(p, r, c) => Some((*p, *r, *c)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, TextStyle)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(s, p, style) => Some((s.as_str(), *p, *style)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRect(r, c) => Some((*r, *c)),
            _ => None,
        })
    }
}

impl ClockPanel for RecordingPanel {
    fn power_on(&mut self) -> Result<(), DisplayError> {
        self.record(DrawOp::PowerOn)
    }

    fn fill_screen(&mut self, color: Color) -> Result<(), DisplayError> {
        self.record(DrawOp::FillScreen(color))
    }

    fn fill_circle(&mut self, center: Point, radius: u32, color: Color) -> Result<(), DisplayError> {
        self.record(DrawOp::Circle(center, radius, color))
    }

    fn fill_rect(&mut self, area: Rect, color: Color) -> Result<(), DisplayError> {
        self.record(DrawOp::FillRect(area, color))
    }

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle) -> Result<(), DisplayError> {
        let mut s = String::new();
        s.push_str(text).expect("text too long for recording panel");
        self.record(DrawOp::Text(s, at, style))
    }
}

/// Backlight that remembers every duty written
pub struct RecordingBacklight {
    pub writes: Vec<u8, 32>,
    /// When set, every write fails with this error
    pub fail_with: Option<DisplayError>,
}

impl RecordingBacklight {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            fail_with: None,
        }
    }

    pub fn last(&self) -> Option<u8> {
        self.writes.last().copied()
    }
}

impl BacklightControl for RecordingBacklight {
    fn set_duty(&mut self, duty: u8) -> Result<(), DisplayError> {
        if let Some(e) = self.fail_with {
            return Err(e);
        }
        self.writes.push(duty).expect("backlight log overflow");
        Ok(())
    }
}

/// Button whose level is set directly by the test
pub struct ScriptedButton {
    pub level: Level,
}

impl ScriptedButton {
    pub fn released() -> Self {
        Self {
            level: Level::Released,
        }
    }
}

impl DigitalInput for ScriptedButton {
    fn read_level(&mut self) -> Level {
        self.level
    }
}

/// Time source returning whatever the test put in `next`
pub struct ScriptedTime {
    pub next: Result<TimeOfDay, TimeError>,
}

impl ScriptedTime {
    pub fn at(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            next: TimeOfDay::new(hour, minute, second),
        }
    }

    pub fn set(&mut self, hour: u8, minute: u8, second: u8) {
        self.next = TimeOfDay::new(hour, minute, second);
    }
}

impl TimeSource for ScriptedTime {
    fn current_time(&mut self) -> Result<TimeOfDay, TimeError> {
        self.next
    }
}
