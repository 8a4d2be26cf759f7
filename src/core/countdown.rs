const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// The four rendered countdown slots, each zero-padded to at least two digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountdownFields {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl CountdownFields {
    pub fn zero() -> Self {
        Self::from_parts(0, 0, 0, 0)
    }

    fn from_parts(days: i64, hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            days: format!("{:02}", days),
            hours: format!("{:02}", hours),
            minutes: format!("{:02}", minutes),
            seconds: format!("{:02}", seconds),
        }
    }

    /// Time left from `now_ms` until `target_ms`, truncated to whole units.
    /// A target in the past renders as all zeros.
    pub fn between(target_ms: i64, now_ms: i64) -> Self {
        let left = target_ms - now_ms;
        if left < 0 {
            return Self::zero();
        }
        Self::from_parts(
            left / DAY_MS,
            (left % DAY_MS) / HOUR_MS,
            (left % HOUR_MS) / MINUTE_MS,
            (left % MINUTE_MS) / SECOND_MS,
        )
    }

    pub fn as_array(&self) -> [&str; 4] {
        [&self.days, &self.hours, &self.minutes, &self.seconds]
    }
}
