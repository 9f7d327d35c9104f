//! Clock task
//!
//! Runs the cooperative clock loop: one [`ClockApp::tick`] every
//! `TIME_UPDATE_INTERVAL_MS`, after a bounded wait for the first valid
//! time at start-up.
//!
//! [`ClockApp::tick`]: bitclock_core::app::ClockApp::tick

use bitclock_core::app::{ClockState, FrameOutcome, TickReport};
use bitclock_core::config::{TIME_SYNC_POLL_MS, TIME_SYNC_TIMEOUT_MS, TIME_UPDATE_INTERVAL_MS};
use bitclock_core::time::TimeOfDay;
use bitclock_core::traits::TimeSource;
use defmt::*;
use embassy_time::{with_timeout, Duration, Instant, Ticker, Timer};

use crate::board::Clock;

/// Clock task - owns the whole application
#[embassy_executor::task]
pub async fn clock_task(mut app: Clock) {
    info!("Clock task started");

    bring_up(&mut app);

    let sync = with_timeout(
        Duration::from_millis(TIME_SYNC_TIMEOUT_MS),
        wait_for_time(app.source_mut()),
    )
    .await;
    match sync {
        Ok(time) => info!("Time available: {}", time.format().as_str()),
        Err(_) => warn!(
            "No valid time after {} ms, starting without it",
            TIME_SYNC_TIMEOUT_MS
        ),
    }

    let mut state = ClockState::new();
    let mut time_ok = true;
    let mut ticker = Ticker::every(Duration::from_millis(TIME_UPDATE_INTERVAL_MS));
    let start = Instant::now();

    loop {
        ticker.next().await;

        if !app.engine().is_initialized() {
            bring_up(&mut app);
        }

        let now_ms = start.elapsed().as_millis() as u32;
        match app.tick(&mut state, now_ms) {
            Ok(report) => log_report(&report, &mut time_ok),
            Err(e) => warn!("Display error: {}", e),
        }
    }
}

/// Power the panel and paint the empty face
///
/// A failure leaves the engine uninitialised; the loop tries again on
/// the next tick.
fn bring_up(app: &mut Clock) {
    match app.start() {
        Ok(()) => info!(
            "Display initialized, brightness level {}",
            app.engine().brightness()
        ),
        Err(e) => warn!("Display bring-up failed: {}", e),
    }
}

/// Re-poll the time source until it delivers a time
async fn wait_for_time<T: TimeSource>(source: &mut T) -> TimeOfDay {
    loop {
        match source.current_time() {
            Ok(time) => return time,
            Err(e) => trace!("Waiting for time: {}", e),
        }
        Timer::after_millis(TIME_SYNC_POLL_MS).await;
    }
}

fn log_report(report: &TickReport, time_ok: &mut bool) {
    if report.input.overlay_toggled {
        info!("Overlay toggled");
    }
    if let Some(level) = report.input.brightness {
        info!("Brightness level {}", level);
    }

    match report.frame {
        FrameOutcome::Rendered(time) => trace!("Rendered {}", time.format().as_str()),
        FrameOutcome::Unchanged => {}
        FrameOutcome::TimeUnavailable(e) => {
            if *time_ok {
                warn!("Time source failed: {}", e);
            }
            *time_ok = false;
            return;
        }
    }

    if !*time_ok {
        info!("Time source recovered");
        *time_ok = true;
    }
}
