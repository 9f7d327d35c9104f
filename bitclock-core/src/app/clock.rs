//! Clock tick
//!
//! Order within a tick is fixed: input first, then the time source, then
//! (maybe) a render. A button press therefore shows up in the same tick's
//! render decision.

use crate::input::{InputActions, InputController};
use crate::render::RenderEngine;
use crate::time::{TimeError, TimeOfDay};
use crate::traits::{
    ActionSink, BacklightControl, ClockPanel, DigitalInput, DisplayError, TimeSource,
};

use super::state::ClockState;

/// What happened to the face during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameOutcome {
    /// The face was redrawn for this time
    Rendered(TimeOfDay),
    /// Time and overlay unchanged (or engine not started); nothing drawn
    Unchanged,
    /// The time source failed; the indicator is showing
    TimeUnavailable(TimeError),
}

/// Summary of one tick, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    pub input: InputActions,
    pub frame: FrameOutcome,
}

/// Routes button actions into the clock state and render engine
struct TickActions<'a, P, B> {
    state: &'a mut ClockState,
    engine: &'a mut RenderEngine<P, B>,
    result: Result<(), DisplayError>,
}

impl<P: ClockPanel, B: BacklightControl> ActionSink for TickActions<'_, P, B> {
    fn toggle_overlay(&mut self) {
        self.state.toggle_overlay();
    }

    fn brightness_changed(&mut self, level: u8) {
        if let Err(e) = self.engine.set_brightness(level) {
            self.result = Err(e);
        }
    }
}

/// The clock application
///
/// Owns its collaborators; the mutable clock state is passed into each
/// [`ClockApp::tick`].
pub struct ClockApp<T, P, B, I1, I2> {
    source: T,
    engine: RenderEngine<P, B>,
    input: InputController<I1, I2>,
    /// The input controller's level has not reached the backlight yet
    brightness_pending: bool,
}

impl<T, P, B, I1, I2> ClockApp<T, P, B, I1, I2>
where
    T: TimeSource,
    P: ClockPanel,
    B: BacklightControl,
    I1: DigitalInput,
    I2: DigitalInput,
{
    pub fn new(source: T, engine: RenderEngine<P, B>, input: InputController<I1, I2>) -> Self {
        Self {
            source,
            engine,
            input,
            brightness_pending: false,
        }
    }

    /// Bring the panel up and apply the input controller's brightness
    pub fn start(&mut self) -> Result<(), DisplayError> {
        self.engine.initialize()?;
        let level = self.input.brightness_level();
        if level != self.engine.brightness() {
            self.engine.set_brightness(level)?;
        }
        self.brightness_pending = false;
        Ok(())
    }

    /// Run one tick
    ///
    /// A time-source failure is not an error: the indicator is shown and
    /// the clock state is left alone so the next good tick recovers. A
    /// display error aborts the tick before the state is updated, so the
    /// same frame is attempted again next tick. A brightness level the
    /// backlight rejected is applied again on each later tick until it
    /// sticks.
    pub fn tick(&mut self, state: &mut ClockState, now_ms: u32) -> Result<TickReport, DisplayError> {
        let mut actions = TickActions {
            state: &mut *state,
            engine: &mut self.engine,
            result: Ok(()),
        };
        let input = self.input.poll(now_ms, &mut actions);
        if let Err(e) = actions.result {
            self.brightness_pending = true;
            return Err(e);
        }
        if self.brightness_pending {
            self.engine.set_brightness(self.input.brightness_level())?;
            self.brightness_pending = false;
        }

        let frame = match self.source.current_time() {
            Err(e) => {
                self.engine.show_time_error()?;
                FrameOutcome::TimeUnavailable(e)
            }
            Ok(time) => {
                self.engine.clear_time_error()?;
                if self.engine.is_initialized() && state.needs_render(time) {
                    self.engine.render(time, state.show_overlay())?;
                    state.mark_rendered(time);
                    FrameOutcome::Rendered(time)
                } else {
                    FrameOutcome::Unchanged
                }
            }
        };

        Ok(TickReport { input, frame })
    }

    /// Get the render engine
    pub fn engine(&self) -> &RenderEngine<P, B> {
        &self.engine
    }

    /// Get the render engine mutably
    pub fn engine_mut(&mut self) -> &mut RenderEngine<P, B> {
        &mut self.engine
    }

    /// Get the time source
    pub fn source_mut(&mut self) -> &mut T {
        &mut self.source
    }

    /// Get the input controller
    pub fn input_mut(&mut self) -> &mut InputController<I1, I2> {
        &mut self.input
    }
}
