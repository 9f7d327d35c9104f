//! Time source trait

use crate::time::{TimeError, TimeOfDay};

/// Wall-clock provider
///
/// Must return immediately: either a complete, validated time of day or
/// an error. Network synchronisation and timezone handling live behind
/// this boundary.
pub trait TimeSource {
    fn current_time(&mut self) -> Result<TimeOfDay, TimeError>;
}
