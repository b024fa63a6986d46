//! Signed durations, duration units and the accumulator used while
//! extracting multi-group durations ("two hours and five minutes").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::{Error, Number, Result};

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Fixed-average conventions for the calendar units.
///
/// A month is always a twelfth of a year. Extraction and formatting must use
/// the same convention for durations to round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConvention {
    /// Length of one year in seconds
    #[serde(default = "default_seconds_per_year")]
    pub seconds_per_year: i64,
}

fn default_seconds_per_year() -> i64 {
    365 * SECONDS_PER_DAY
}

impl Default for CalendarConvention {
    fn default() -> Self {
        Self {
            seconds_per_year: default_seconds_per_year(),
        }
    }
}

impl CalendarConvention {
    /// Convention with a year of `days` days
    pub fn with_days_per_year(days: i64) -> Self {
        Self {
            seconds_per_year: days * SECONDS_PER_DAY,
        }
    }

    pub fn seconds_per_month(&self) -> i64 {
        self.seconds_per_year / 12
    }

    /// Months must split the year exactly and stay longer than a week,
    /// otherwise unit multipliers lose their ordering.
    pub fn validate(&self) -> Result<()> {
        if self.seconds_per_year <= 0 || self.seconds_per_year % 12 != 0 {
            return Err(Error::InvalidCalendar(format!(
                "seconds_per_year must be a positive multiple of 12, got {}",
                self.seconds_per_year
            )));
        }
        if self.seconds_per_month() <= SECONDS_PER_WEEK {
            return Err(Error::InvalidCalendar(format!(
                "a month ({}s) must be longer than a week",
                self.seconds_per_month()
            )));
        }
        Ok(())
    }
}

/// Units a duration phrase can be expressed in, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
    Decade,
    Century,
    Millennium,
}

impl DurationUnit {
    pub const ALL: [DurationUnit; 13] = [
        Self::Nanosecond,
        Self::Microsecond,
        Self::Millisecond,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Year,
        Self::Decade,
        Self::Century,
        Self::Millennium,
    ];

    /// Length of one unit in nanoseconds
    pub fn nanos(self, calendar: &CalendarConvention) -> i128 {
        let year = calendar.seconds_per_year as i128 * NANOS_PER_SECOND;
        match self {
            Self::Nanosecond => 1,
            Self::Microsecond => 1_000,
            Self::Millisecond => 1_000_000,
            Self::Second => NANOS_PER_SECOND,
            Self::Minute => 60 * NANOS_PER_SECOND,
            Self::Hour => 3_600 * NANOS_PER_SECOND,
            Self::Day => SECONDS_PER_DAY as i128 * NANOS_PER_SECOND,
            Self::Week => SECONDS_PER_WEEK as i128 * NANOS_PER_SECOND,
            Self::Month => year / 12,
            Self::Year => year,
            Self::Decade => 10 * year,
            Self::Century => 100 * year,
            Self::Millennium => 1_000 * year,
        }
    }

    /// Identifier used by vocabulary tables
    pub fn name(self) -> &'static str {
        match self {
            Self::Nanosecond => "nanosecond",
            Self::Microsecond => "microsecond",
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Decade => "decade",
            Self::Century => "century",
            Self::Millennium => "millennium",
        }
    }
}

/// A signed duration with nanosecond precision.
///
/// `nanos` is always normalized into `[0, 1e9)`, so `-0.5s` is stored as
/// `seconds = -1, nanos = 500_000_000`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Duration {
    seconds: i64,
    nanos: u32,
}

impl Duration {
    pub const ZERO: Duration = Duration {
        seconds: 0,
        nanos: 0,
    };

    pub fn new(seconds: i64, nanos: i64) -> Self {
        Self::from_nanos(seconds as i128 * NANOS_PER_SECOND + nanos as i128)
    }

    pub fn from_secs(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }

    pub fn from_millis(millis: i64) -> Self {
        Self::from_nanos(millis as i128 * 1_000_000)
    }

    /// Build from a nanosecond total, saturating at the `i64` seconds range
    pub fn from_nanos(nanos: i128) -> Self {
        let seconds = nanos.div_euclid(NANOS_PER_SECOND);
        if seconds > i64::MAX as i128 {
            return Self {
                seconds: i64::MAX,
                nanos: (NANOS_PER_SECOND - 1) as u32,
            };
        }
        if seconds < i64::MIN as i128 {
            return Self {
                seconds: i64::MIN,
                nanos: 0,
            };
        }
        Self {
            seconds: seconds as i64,
            nanos: nanos.rem_euclid(NANOS_PER_SECOND) as u32,
        }
    }

    /// `count` whole units
    pub fn of(count: i64, unit: DurationUnit, calendar: &CalendarConvention) -> Self {
        Self::from_nanos((count as i128).saturating_mul(unit.nanos(calendar)))
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    pub fn as_nanos(&self) -> i128 {
        self.seconds as i128 * NANOS_PER_SECOND + self.nanos as i128
    }

    pub fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    pub fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    pub fn abs(&self) -> Self {
        Self::from_nanos(self.as_nanos().abs())
    }

    pub fn checked_add(self, other: Duration) -> Option<Duration> {
        let total = self.as_nanos() + other.as_nanos();
        let seconds = total.div_euclid(NANOS_PER_SECOND);
        if seconds > i64::MAX as i128 || seconds < i64::MIN as i128 {
            return None;
        }
        Some(Self::from_nanos(total))
    }

    /// Convert to the unsigned standard library duration, if non-negative
    pub fn to_std(&self) -> Option<std::time::Duration> {
        u64::try_from(self.seconds)
            .ok()
            .map(|seconds| std::time::Duration::new(seconds, self.nanos))
    }
}

impl Add for Duration {
    type Output = Duration;

    /// Saturating addition
    fn add(self, rhs: Duration) -> Duration {
        Self::from_nanos(self.as_nanos() + rhs.as_nanos())
    }
}

impl From<std::time::Duration> for Duration {
    fn from(value: std::time::Duration) -> Self {
        Self::from_nanos(value.as_nanos() as i128)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nanos == 0 {
            write!(f, "{}s", self.seconds)
        } else {
            write!(f, "{}.{:09}s", self.seconds, self.nanos)
        }
    }
}

/// Sums `count × unit` contributions into whole seconds plus normalized
/// nanoseconds.
///
/// Integer counts are multiplied exactly; decimal counts are rounded to the
/// nearest nanosecond. An accumulator with no groups finishes as `None`, which
/// callers must keep distinct from a zero duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationAccumulator {
    seconds: i128,
    nanos: i128,
    groups: usize,
}

impl DurationAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, count: Number, unit_nanos: i128) {
        let contribution = match count {
            Number::Integer(count) => (count as i128).saturating_mul(unit_nanos),
            // `as` saturates and maps NaN to zero
            Number::Decimal(count) => (count * unit_nanos as f64).round() as i128,
        };

        let nanos = self.nanos + contribution.rem_euclid(NANOS_PER_SECOND);
        self.seconds = self
            .seconds
            .saturating_add(contribution.div_euclid(NANOS_PER_SECOND))
            .saturating_add(nanos.div_euclid(NANOS_PER_SECOND));
        self.nanos = nanos.rem_euclid(NANOS_PER_SECOND);
        self.groups += 1;
    }

    /// Number of groups added so far
    pub fn groups(&self) -> usize {
        self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups == 0
    }

    pub fn finish(&self) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(
            self.seconds
                .saturating_mul(NANOS_PER_SECOND)
                .saturating_add(self.nanos),
        ))
    }
}
