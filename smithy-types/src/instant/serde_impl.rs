/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! awsJson timestamps travel as epoch seconds: an integer when there is no fraction,
//! otherwise a float. RFC 3339 strings are accepted when reading.

use super::{Format, Instant};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.has_nanos() {
            serializer.serialize_f64(self.epoch_fractional_seconds())
        } else {
            serializer.serialize_i64(self.epoch_seconds())
        }
    }
}

struct InstantVisitor;

impl<'de> Visitor<'de> for InstantVisitor {
    type Value = Instant;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("epoch seconds or an RFC-3339 date time")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Instant::from_epoch_seconds(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v)
            .map(Instant::from_epoch_seconds)
            .map_err(|_| E::custom(format!("epoch seconds {} out of range", v)))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if !v.is_finite() {
            return Err(E::custom("epoch seconds must be finite"));
        }
        Ok(Instant::from_f64(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Instant::from_str(v, Format::DateTime)
            .or_else(|_| Instant::from_str(v, Format::EpochSeconds))
            .map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(InstantVisitor)
    }
}

#[cfg(test)]
mod test {
    use crate::Instant;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Test {
        created: Instant,
    }

    #[test]
    fn whole_seconds_serialize_as_integer() {
        let test = Test {
            created: Instant::from_epoch_seconds(1576540098),
        };
        assert_eq!(
            serde_json::to_string(&test).unwrap(),
            r#"{"created":1576540098}"#
        );
    }

    #[test]
    fn fractional_seconds_serialize_as_float() {
        let test = Test {
            created: Instant::from_secs_and_nanos(1576540098, 500_000_000),
        };
        assert_eq!(
            serde_json::to_string(&test).unwrap(),
            r#"{"created":1576540098.5}"#
        );
    }

    #[test]
    fn deserialize_accepts_numbers_and_strings() {
        let expected = Test {
            created: Instant::from_epoch_seconds(1576540098),
        };
        for json in [
            r#"{"created":1576540098}"#,
            r#"{"created":1576540098.0}"#,
            r#"{"created":"2019-12-16T23:48:18Z"}"#,
        ] {
            assert_eq!(serde_json::from_str::<Test>(json).unwrap(), expected, "{}", json);
        }
    }

    #[test]
    fn deserialize_normalizes_fractions_that_round_to_a_second() {
        let test: Test = serde_json::from_str(r#"{"created":-1e-20}"#).unwrap();
        assert_eq!(test.created, Instant::from_epoch_seconds(0));
        assert!(test.created.epoch_subsecond_nanos() < 1_000_000_000);
    }

    #[test]
    fn deserialize_rejects_booleans() {
        assert!(serde_json::from_str::<Test>(r#"{"created":true}"#).is_err());
    }
}
