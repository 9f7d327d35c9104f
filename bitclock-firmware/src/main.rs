//! Bitclock - BCD Clock Firmware
//!
//! Main firmware binary for RP2040 boards with a 170x320 ST7789 panel.
//! Shows the time of day as six columns of dots, one column per decimal
//! digit, with an optional numeric overlay and stepped backlight.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::Pwm;
use embassy_rp::rtc::Rtc;
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::{Delay, Timer};
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::Builder;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use bitclock_core::app::ClockApp;
use bitclock_core::config::{InputConfig, RenderConfig};
use bitclock_core::input::InputController;
use bitclock_core::render::RenderEngine;
use bitclock_drivers::backlight::PwmBacklight;
use bitclock_drivers::button::GpioButton;
use bitclock_drivers::panel::GraphicsPanel;

use crate::board::{
    BacklightPwm, PANEL_BUFFER_LEN, PANEL_HEIGHT, PANEL_OFFSET_X, PANEL_OFFSET_Y,
    PANEL_POWER_SETTLE_MS, PANEL_SPI_HZ, PANEL_WIDTH,
};
use crate::rtc::RtcTimeSource;

mod board;
mod rtc;
mod tasks;

// Panel interface buffer (must live forever)
static PANEL_BUF: StaticCell<[u8; PANEL_BUFFER_LEN]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Bitclock firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Panel supply must be up before the controller reset and init sequence
    let power = Output::new(p.PIN_14, Level::High);
    Timer::after_millis(PANEL_POWER_SETTLE_MS).await;

    // Panel on SPI1 (pins in board.rs)
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = PANEL_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, spi_config);
    let cs = Output::new(p.PIN_9, Level::High);
    let dc = Output::new(p.PIN_8, Level::Low);
    let rst = Output::new(p.PIN_12, Level::High);

    let spi_device = ExclusiveDevice::new(spi, cs, Delay).unwrap();
    let buffer = PANEL_BUF.init([0u8; PANEL_BUFFER_LEN]);
    let interface = SpiInterface::new(spi_device, dc, buffer);

    let Ok(display) = Builder::new(ST7789, interface)
        .display_size(PANEL_WIDTH, PANEL_HEIGHT)
        .display_offset(PANEL_OFFSET_X, PANEL_OFFSET_Y)
        .invert_colors(ColorInversion::Inverted)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .reset_pin(rst)
        .init(&mut Delay)
    else {
        defmt::panic!("ST7789 controller did not initialize");
    };

    let panel = GraphicsPanel::new(display, power);

    info!("Panel initialized");

    // Backlight on GPIO13 (PWM slice 6, channel B)
    let pwm_config = BacklightPwm::config();
    let pwm = Pwm::new_output_b(p.PWM_SLICE6, p.PIN_13, pwm_config.clone());
    let backlight = PwmBacklight::new(BacklightPwm::new(pwm, pwm_config));

    // Buttons pull to ground when pressed
    let overlay_key = GpioButton::new_active_low(Input::new(p.PIN_15, Pull::Up));
    let brightness_key = GpioButton::new_active_low(Input::new(p.PIN_17, Pull::Up));

    // RTC seeded from the build time
    let seed = rtc::build_time();
    let source = RtcTimeSource::new(Rtc::new(p.RTC), seed);
    info!("RTC seeded at {}", seed.format().as_str());

    let engine = RenderEngine::new(panel, backlight, RenderConfig::default());
    let input = InputController::new(overlay_key, brightness_key, InputConfig::default());
    let app = ClockApp::new(source, engine, input);

    spawner.spawn(tasks::clock_task(app)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in the clock task
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
