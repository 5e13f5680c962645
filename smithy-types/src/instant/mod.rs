/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

mod format;
mod serde_impl;

pub use format::InstantParseError;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time with nanosecond precision, stored as seconds since the Unix epoch.
///
/// Every timestamp-typed field of a generated model uses this type.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// `fraction` is in `0.0..=1.0`; a fraction that rounds up to a whole second carries over.
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant::from_secs_and_nanos(epoch_seconds, (fraction * NANOS_PER_SECOND as f64) as u32)
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds + (subsecond_nanos / NANOS_PER_SECOND) as i64,
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    /// Times before the Unix epoch are clamped to the epoch.
    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(_) => Instant::from_epoch_seconds(0),
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, InstantParseError> {
        match format {
            Format::DateTime => format::date_time::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Converts to a chrono timestamp. `None` when the instant is outside chrono's range.
    #[cfg(feature = "chrono-conversions")]
    pub fn to_chrono(&self) -> Option<DateTime<Utc>> {
        self.chrono_date_time()
    }

    fn chrono_date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.chrono_date_time() {
                Some(date_time) => {
                    let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                    format::date_time::trim_fraction(rfc3339)
                }
                // chrono covers roughly +/- 262,000 years; fall back to the numeric form
                None => format::epoch_seconds::format(self),
            },
            Format::EpochSeconds => format::epoch_seconds::format(self),
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Instant::fmt(self, Format::DateTime))
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

#[cfg(feature = "chrono-conversions")]
impl From<DateTime<Utc>> for Instant {
    fn from(value: DateTime<Utc>) -> Self {
        Instant {
            seconds: value.timestamp(),
            subsecond_nanos: value.timestamp_subsec_nanos() % NANOS_PER_SECOND,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339, always in UTC with a `Z` suffix
    DateTime,
    /// Seconds since the Unix epoch, with an optional decimal fraction
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn system_time_conversion() {
        let time = UNIX_EPOCH + Duration::new(1576540098, 1_000);
        let instant = Instant::from(time);
        assert_eq!(instant.epoch_seconds(), 1576540098);
        assert_eq!(instant.epoch_subsecond_nanos(), 1_000);
        assert!(instant.has_nanos());
    }

    #[test]
    fn nanos_overflow_carries_into_seconds() {
        let instant = Instant::from_secs_and_nanos(10, 1_500_000_000);
        assert_eq!(instant, Instant::from_secs_and_nanos(11, 500_000_000));
    }

    #[test]
    fn from_f64_floors_negative_values() {
        let instant = Instant::from_f64(-1.5);
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
    }

    #[test]
    fn tiny_negative_fraction_rounds_to_the_next_second() {
        let instant = Instant::from_f64(-1e-20);
        assert_eq!(instant, Instant::from_epoch_seconds(0));
        assert_eq!(instant.epoch_subsecond_nanos(), 0);
        assert_eq!(instant.fmt(Format::EpochSeconds), "0");
        assert_eq!(instant.to_string(), "1970-01-01T00:00:00Z");

        assert_eq!(
            Instant::from_fractional_seconds(5, 1.0),
            Instant::from_epoch_seconds(6)
        );
    }

    #[cfg(feature = "chrono-conversions")]
    #[test]
    fn chrono_round_trip() {
        let instant = Instant::from_secs_and_nanos(1576540098, 123_000_000);
        let chrono = instant.to_chrono().expect("in range");
        assert_eq!(Instant::from(chrono), instant);
    }

    proptest! {
        #[test]
        fn date_time_format_parses_back(seconds in -10_000_000_000i64..10_000_000_000i64, nanos in 0u32..1_000_000_000u32) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = instant.fmt(Format::DateTime);
            prop_assert_eq!(Instant::from_str(&formatted, Format::DateTime).unwrap(), instant);
        }

        #[test]
        fn epoch_seconds_format_parses_back(seconds in -10_000_000_000i64..10_000_000_000i64, nanos in 0u32..1_000_000_000u32) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = instant.fmt(Format::EpochSeconds);
            prop_assert_eq!(Instant::from_str(&formatted, Format::EpochSeconds).unwrap(), instant);
        }
    }
}
