//! Duration rendering

use voice_numbers_core::{Duration, DurationUnit};

use crate::NumberFormatter;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days, hours, minutes and seconds of a duration's magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Clock {
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl Clock {
    fn of(total_seconds: i64) -> Self {
        Self {
            days: total_seconds / SECONDS_PER_DAY,
            hours: total_seconds % SECONDS_PER_DAY / SECONDS_PER_HOUR,
            minutes: total_seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            seconds: total_seconds % SECONDS_PER_MINUTE,
        }
    }

    fn is_zero(&self) -> bool {
        *self == Self::of(0)
    }
}

impl NumberFormatter {
    /// Render `duration` in days, hours, minutes and seconds, dropping
    /// sub-second precision.
    ///
    /// Spoken: "sixteen days two hours five minutes one second", with counts
    /// in the short scale so the text reads back as the same duration.
    /// Written: "16d 2:05:01", "2:05:01" or "5:01".
    pub fn nice_duration(&self, duration: Duration, speech: bool) -> String {
        let clock = Clock::of(duration.abs().seconds());
        let negative = duration.is_negative() && !clock.is_zero();

        let text = if speech {
            self.speak_clock(&clock)
        } else {
            write_clock(&clock)
        };

        match (negative, speech) {
            (false, _) => text,
            (true, true) => format!("{} {text}", self.vocabulary().negative_word().unwrap_or("-")),
            (true, false) => format!("-{text}"),
        }
    }

    fn speak_clock(&self, clock: &Clock) -> String {
        let parts: Vec<String> = [
            (clock.days, DurationUnit::Day),
            (clock.hours, DurationUnit::Hour),
            (clock.minutes, DurationUnit::Minute),
            (clock.seconds, DurationUnit::Second),
        ]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, unit)| self.unit_phrase(count, unit))
        .collect();

        if parts.is_empty() {
            self.unit_phrase(0, DurationUnit::Second)
        } else {
            parts.join(" ")
        }
    }

    fn unit_phrase(&self, count: i64, unit: DurationUnit) -> String {
        let name = self.vocabulary().unit_name(unit, count != 1).unwrap_or(unit.name());
        format!("{} {name}", self.cardinal_words(count, true))
    }
}

fn write_clock(clock: &Clock) -> String {
    let Clock {
        days,
        hours,
        minutes,
        seconds,
    } = *clock;
    if days > 0 {
        format!("{days}d {hours}:{minutes:02}:{seconds:02}")
    } else if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
