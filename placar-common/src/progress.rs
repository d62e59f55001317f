//! Challenge progress math
//!
//! Pure calendar arithmetic over the configured challenge window.
//! Countdown rendering and timers belong to the presentation layer; this
//! module only answers how far along the window a given instant is.

use chrono::{DateTime, Utc};
use serde::Serialize;

const DAY_SECONDS: f64 = 86_400.0;

/// Progress through the challenge window at some instant.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChallengeProgress {
    /// Percent of the window elapsed, clamped to 0..=100
    pub pct: f64,
    /// Whole days remaining, floored at zero
    pub days_left: i64,
    /// Current 1-based day number, clamped to the window length
    pub current_day: i64,
}

/// Compute progress of `now` through the `start..end` window.
pub fn challenge_progress(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> ChallengeProgress {
    let total = (end - start).num_seconds().max(1) as f64;
    let elapsed = (now - start).num_seconds() as f64;
    let remaining = (end - now).num_seconds() as f64;

    let total_days = (total / DAY_SECONDS).ceil() as i64;
    let pct = (elapsed / total * 100.0).clamp(0.0, 100.0);
    let days_left = ((remaining / DAY_SECONDS).ceil() as i64).max(0);
    let current_day = ((elapsed / DAY_SECONDS).ceil() as i64).clamp(0, total_days);

    ChallengeProgress {
        pct,
        days_left,
        current_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 17, 23, 59, 59).unwrap(),
        )
    }

    #[test]
    fn before_the_window_everything_clamps_low() {
        let (start, end) = window();
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let progress = challenge_progress(start, end, now);
        assert_eq!(progress.pct, 0.0);
        assert_eq!(progress.current_day, 0);
        assert!(progress.days_left > 45);
    }

    #[test]
    fn mid_window_day_counting() {
        let (start, end) = window();
        let now = Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap();
        let progress = challenge_progress(start, end, now);
        assert_eq!(progress.current_day, 10);
        assert!(progress.pct > 0.0 && progress.pct < 100.0);
        assert!(progress.days_left > 0);
    }

    #[test]
    fn after_the_window_everything_clamps_high() {
        let (start, end) = window();
        let now = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
        let progress = challenge_progress(start, end, now);
        assert_eq!(progress.pct, 100.0);
        assert_eq!(progress.days_left, 0);
        assert_eq!(progress.current_day, 45);
    }
}
