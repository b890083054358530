//! Common types shared across Icinga 2 API models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of object a downtime action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ObjectType {
    #[default]
    Host,
    Service,
    Downtime,
}

impl ObjectType {
    pub const ALL: [ObjectType; 3] = [ObjectType::Host, ObjectType::Service, ObjectType::Downtime];

    /// Name as used in the `type` field of action requests.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Host => "Host",
            Self::Service => "Service",
            Self::Downtime => "Downtime",
        }
    }

    /// Key under which an exact object name is sent (`host`, `service`, `downtime`).
    pub fn name_key(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Service => "service",
            Self::Downtime => "downtime",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                format!("invalid object type '{s}' (expected one of: Host, Service, Downtime)")
            })
    }
}
