//! Injectable time source
//!
//! The runner samples the clock once per invocation to synthesize the
//! `Date:` header. Threading the clock in as a capability keeps invocations
//! deterministic under test.

use chrono::{DateTime, Utc};

/// Time capability for the runner.
pub trait Clock: Send + Sync {
    /// Current wall-clock time.
    fn now(&self) -> DateTime<Utc>;
}

/// The process-ambient system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Format an instant as an IMF-fixdate HTTP date, e.g.
/// `Thu, 04 Jul 2019 12:30:00 GMT`.
pub fn http_date(instant: DateTime<Utc>) -> String {
    instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Whole seconds since the Unix epoch for an instant.
pub fn unix_seconds(instant: DateTime<Utc>) -> i64 {
    instant.timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 7, 4, 12, 30, 0).unwrap()
    }

    #[test]
    fn http_date_is_imf_fixdate() {
        assert_eq!(http_date(fixed()), "Thu, 04 Jul 2019 12:30:00 GMT");
    }

    #[test]
    fn unix_seconds_truncates_to_whole_seconds() {
        let instant = fixed() + chrono::Duration::milliseconds(750);
        assert_eq!(unix_seconds(instant), fixed().timestamp());
    }

    #[test]
    fn fixed_clock_returns_its_instant() {
        let clock = FixedClock(fixed());
        assert_eq!(clock.now(), fixed());
    }
}
