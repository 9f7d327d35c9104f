//! On-chip RTC time source
//!
//! The RP2040 RTC has no battery backup, so it is seeded at boot from the
//! time of day the firmware was built. Until the RTC reports running,
//! reads come back as unavailable.

use bitclock_core::time::{TimeError, TimeOfDay};
use bitclock_core::traits::TimeSource;
use defmt::*;
use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};

/// UTC time of day at build, in seconds since midnight
const BUILD_TIME: &str = env!("BITCLOCK_BUILD_TIME");

/// Time of day the firmware was built
pub fn build_time() -> TimeOfDay {
    match BUILD_TIME.parse::<u32>() {
        Ok(secs) => TimeOfDay::from_seconds_of_day(secs),
        Err(_) => TimeOfDay::MIDNIGHT,
    }
}

/// Time source backed by the RTC
pub struct RtcTimeSource {
    rtc: Rtc<'static, RTC>,
}

impl RtcTimeSource {
    /// Start the RTC at `seed`
    ///
    /// The date is arbitrary; only the time of day is ever read back.
    pub fn new(mut rtc: Rtc<'static, RTC>, seed: TimeOfDay) -> Self {
        let now = DateTime {
            year: 2024,
            month: 1,
            day: 1,
            day_of_week: DayOfWeek::Monday,
            hour: seed.hour(),
            minute: seed.minute(),
            second: seed.second(),
        };
        if let Err(e) = rtc.set_datetime(now) {
            warn!("RTC rejected seed time: {}", Debug2Format(&e));
        }
        Self { rtc }
    }
}

impl TimeSource for RtcTimeSource {
    fn current_time(&mut self) -> Result<TimeOfDay, TimeError> {
        if !self.rtc.is_running() {
            return Err(TimeError::Unavailable);
        }
        let now = self.rtc.now().map_err(|_| TimeError::Unavailable)?;
        TimeOfDay::new(now.hour, now.minute, now.second)
    }
}
