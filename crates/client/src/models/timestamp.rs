//! Epoch timestamps for downtime windows.
//!
//! Icinga 2 expects `start_time` and `end_time` as Unix epoch seconds. Input
//! is accepted as an integer, a fractional number, a numeric string, or an
//! RFC 3339 date-time; the wire form is always integral epoch seconds.

use chrono::DateTime;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const fn from_epoch_seconds(secs: i64) -> Self {
        Self(secs)
    }

    pub const fn epoch_seconds(self) -> i64 {
        self.0
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Timestamp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(secs) = s.parse::<i64>() {
            return Ok(Self(secs));
        }
        if let Ok(secs) = s.parse::<f64>() {
            return from_float(secs);
        }
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self(dt.timestamp()))
            .map_err(|_| {
                format!("invalid timestamp '{s}' (expected epoch seconds or an RFC 3339 date-time)")
            })
    }
}

fn from_float(secs: f64) -> Result<Timestamp, String> {
    if secs.is_finite() && secs >= i64::MIN as f64 && secs <= i64::MAX as f64 {
        Ok(Timestamp(secs.trunc() as i64))
    } else {
        Err(format!("timestamp {secs} is out of range"))
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawTimestamp::deserialize(deserializer)? {
            RawTimestamp::Int(secs) => Ok(Self(secs)),
            RawTimestamp::Float(secs) => from_float(secs).map_err(D::Error::custom),
            RawTimestamp::Text(s) => s.parse().map_err(D::Error::custom),
        }
    }
}
