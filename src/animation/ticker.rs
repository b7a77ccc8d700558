// src/animation/ticker.rs
//
// Fixed-interval frame scheduling for the animation driver.

use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("next frame at {interval:?} from now is beyond the clock's range")]
    Overflow { interval: Duration },
}

/// Holds the instant the next animation frame is due.
#[derive(Debug, Clone)]
pub struct FrameTicker {
    interval: Duration,
    due: Option<Instant>,
}

impl FrameTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            due: None,
        }
    }

    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    pub fn schedule_now(&mut self, now: Instant) {
        self.due = Some(now);
    }

    /// Schedules the next frame one interval after `now`. On failure the
    /// previous deadline is left untouched.
    pub fn schedule_next(&mut self, now: Instant) -> Result<(), ScheduleError> {
        let due = now
            .checked_add(self.interval)
            .ok_or(ScheduleError::Overflow {
                interval: self.interval,
            })?;
        self.due = Some(due);
        Ok(())
    }

    pub fn is_due(&self, now: Instant) -> bool {
        matches!(self.due, Some(due) if now >= due)
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ticker_is_never_due() {
        let ticker = FrameTicker::new(Duration::from_millis(50));
        assert!(!ticker.is_due(Instant::now()));
        assert_eq!(ticker.due(), None);
    }

    #[test]
    fn test_schedule_next_waits_one_interval() {
        let start = Instant::now();
        let mut ticker = FrameTicker::new(Duration::from_millis(50));
        ticker.schedule_next(start).unwrap();

        assert!(!ticker.is_due(start));
        assert!(!ticker.is_due(start + Duration::from_millis(49)));
        assert!(ticker.is_due(start + Duration::from_millis(50)));
        assert!(ticker.is_due(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_schedule_now_and_cancel() {
        let start = Instant::now();
        let mut ticker = FrameTicker::new(Duration::from_millis(50));
        ticker.schedule_now(start);
        assert!(ticker.is_due(start));

        ticker.cancel();
        assert!(!ticker.is_due(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_overflow_keeps_previous_deadline() {
        let start = Instant::now();
        let mut ticker = FrameTicker::new(Duration::MAX);
        ticker.schedule_now(start);

        let result = ticker.schedule_next(start);
        assert_eq!(
            result,
            Err(ScheduleError::Overflow {
                interval: Duration::MAX
            })
        );
        assert_eq!(ticker.due(), Some(start));
    }
}
