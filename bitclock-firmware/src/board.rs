//! Board wiring
//!
//! Pin assignments for a Pico driving a 1.9" 170x320 ST7789 module:
//!
//! | Signal        | GPIO | Notes                          |
//! |---------------|------|--------------------------------|
//! | Panel DC      | 8    |                                |
//! | Panel CS      | 9    |                                |
//! | Panel SCK     | 10   | SPI1                           |
//! | Panel MOSI    | 11   | SPI1                           |
//! | Panel RST     | 12   |                                |
//! | Backlight     | 13   | PWM slice 6, channel B         |
//! | Panel power   | 14   | Load switch enable             |
//! | Overlay key   | 15   | Active low, internal pull-up   |
//! | Brightness key| 17   | Active low, internal pull-up   |

use core::convert::Infallible;

use bitclock_core::app::ClockApp;
use bitclock_core::config::PWM_FREQ_HZ;
use bitclock_drivers::backlight::PwmBacklight;
use bitclock_drivers::button::GpioButton;
use bitclock_drivers::panel::GraphicsPanel;
use embassy_rp::gpio::{Input, Output};
use embassy_rp::peripherals::SPI1;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::Delay;
use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;

use crate::rtc::RtcTimeSource;

/// System clock after `embassy_rp::init` with default config
pub const SYS_CLK_HZ: u32 = 125_000_000;

/// Panel SPI clock
pub const PANEL_SPI_HZ: u32 = 40_000_000;

/// Panel size in its native (portrait) orientation
pub const PANEL_WIDTH: u16 = 170;
pub const PANEL_HEIGHT: u16 = 320;

/// The 170-pixel panel sits in the middle of the controller's 240 columns
pub const PANEL_OFFSET_X: u16 = 35;
pub const PANEL_OFFSET_Y: u16 = 0;

/// Wait after enabling the panel supply before talking to the controller
pub const PANEL_POWER_SETTLE_MS: u64 = 10;

/// Panel interface scratch buffer
pub const PANEL_BUFFER_LEN: usize = 512;

/// 8-bit backlight resolution
pub const BACKLIGHT_PWM_TOP: u16 = 255;

/// Integer divider giving roughly `PWM_FREQ_HZ` at 8 bits
pub const BACKLIGHT_PWM_DIVIDER: u8 =
    (SYS_CLK_HZ / ((BACKLIGHT_PWM_TOP as u32 + 1) * PWM_FREQ_HZ)) as u8;

type PanelSpi = ExclusiveDevice<Spi<'static, SPI1, Blocking>, Output<'static>, Delay>;

/// ST7789 as brought up by mipidsi
pub type PanelDisplay =
    mipidsi::Display<SpiInterface<'static, PanelSpi, Output<'static>>, ST7789, Output<'static>>;

pub type Panel = GraphicsPanel<PanelDisplay, Output<'static>>;
pub type Backlight = PwmBacklight<BacklightPwm>;
pub type Button = GpioButton<Input<'static>>;

/// The clock application with this board's collaborators
pub type Clock = ClockApp<RtcTimeSource, Panel, Backlight, Button, Button>;

/// Backlight PWM channel
///
/// Drives channel B of a slice. Each duty change is a single slice
/// config write.
pub struct BacklightPwm {
    pwm: Pwm<'static>,
    config: PwmConfig,
}

impl BacklightPwm {
    /// Take a slice configured with [`BacklightPwm::config`]
    pub fn new(pwm: Pwm<'static>, config: PwmConfig) -> Self {
        Self { pwm, config }
    }

    /// Slice configuration for the backlight, starting dark
    pub fn config() -> PwmConfig {
        let mut config = PwmConfig::default();
        config.top = BACKLIGHT_PWM_TOP;
        config.divider = BACKLIGHT_PWM_DIVIDER.into();
        config.compare_b = 0;
        config
    }
}

impl ErrorType for BacklightPwm {
    type Error = Infallible;
}

impl SetDutyCycle for BacklightPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.config.top
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
        self.config.compare_b = duty.min(self.config.top);
        self.pwm.set_config(&self.config);
        Ok(())
    }
}
