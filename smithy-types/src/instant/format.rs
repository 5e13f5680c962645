/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InstantParseError {
    #[error("invalid RFC 3339 date time `{input}`: {reason}")]
    DateTime { input: String, reason: String },

    #[error("invalid epoch seconds `{0}`")]
    EpochSeconds(String),
}

pub(crate) mod date_time {
    use super::InstantParseError;
    use crate::Instant;
    use chrono::DateTime;

    /// Ok: "2019-12-16T23:48:18Z"
    /// Ok: "2019-12-16T23:48:18.52Z"
    /// Ok: "2019-12-16T23:48:18+01:00"
    pub(crate) fn parse(s: &str) -> Result<Instant, InstantParseError> {
        let parsed = DateTime::parse_from_rfc3339(s).map_err(|err| InstantParseError::DateTime {
            input: s.to_owned(),
            reason: err.to_string(),
        })?;
        Ok(Instant::from_secs_and_nanos(
            parsed.timestamp(),
            parsed.timestamp_subsec_nanos(),
        ))
    }

    /// chrono pads the fraction to 3, 6 or 9 digits; the wire form drops trailing zeros.
    pub(crate) fn trim_fraction(rfc3339: String) -> String {
        let body = rfc3339.trim_end_matches('Z');
        match body.rfind('.') {
            Some(_) => {
                let mut trimmed = body.trim_end_matches('0').trim_end_matches('.').to_owned();
                trimmed.push('Z');
                trimmed
            }
            None => rfc3339,
        }
    }
}

pub(crate) mod epoch_seconds {
    use super::InstantParseError;
    use crate::instant::NANOS_PER_SECOND;
    use crate::Instant;

    pub(crate) fn format(instant: &Instant) -> String {
        let (seconds, nanos) = (instant.epoch_seconds(), instant.epoch_subsecond_nanos());
        if nanos == 0 {
            return format!("{}", seconds);
        }
        // `seconds` is floored, so a negative instant with a fraction is one second further out
        let (sign, whole, fraction) = if seconds < 0 {
            ("-", -(seconds + 1), NANOS_PER_SECOND - nanos)
        } else {
            ("", seconds, nanos)
        };
        let fraction = format!("{:0>9}", fraction);
        format!("{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
    }

    /// Ok: "1576540098"
    /// Ok: "1576540098.52"
    /// Ok: "-1.5"
    /// Not Ok: "1576540098.1234567891" (more than nanosecond precision)
    pub(crate) fn parse(s: &str) -> Result<Instant, InstantParseError> {
        let invalid = || InstantParseError::EpochSeconds(s.to_owned());
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };
        if whole.is_empty()
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || fraction.len() > 9
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let nanos: u32 = if fraction.is_empty() {
            0
        } else {
            format!("{:0<9}", fraction).parse().map_err(|_| invalid())?
        };
        Ok(match (negative, nanos) {
            (false, _) => Instant::from_secs_and_nanos(whole, nanos),
            (true, 0) => Instant::from_secs_and_nanos(-whole, 0),
            (true, nanos) => Instant::from_secs_and_nanos(-whole - 1, NANOS_PER_SECOND - nanos),
        })
    }
}

#[cfg(test)]
mod test {
    use crate::instant::{Format, InstantParseError};
    use crate::Instant;

    #[test]
    fn parse_date_time_with_offset() {
        let instant = Instant::from_str("2019-12-17T00:48:18+01:00", Format::DateTime).unwrap();
        assert_eq!(instant, Instant::from_epoch_seconds(1576540098));
    }

    #[test]
    fn parse_date_time_rejects_garbage() {
        let err = Instant::from_str("yesterday", Format::DateTime).unwrap_err();
        assert!(matches!(err, InstantParseError::DateTime { .. }));
    }

    #[test]
    fn negative_epoch_seconds_with_fraction() {
        let instant = Instant::from_str("-1.5", Format::EpochSeconds).unwrap();
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds), "-1.5");

        let instant = Instant::from_str("-0.25", Format::EpochSeconds).unwrap();
        assert_eq!(instant.fmt(Format::EpochSeconds), "-0.25");
    }

    #[test]
    fn epoch_seconds_rejects_excess_precision() {
        for input in ["1.1234567891", "", "-", "1.2.3", "1e9", "+5"] {
            assert_eq!(
                Instant::from_str(input, Format::EpochSeconds),
                Err(InstantParseError::EpochSeconds(input.to_owned())),
                "input: {}",
                input
            );
        }
    }
}
