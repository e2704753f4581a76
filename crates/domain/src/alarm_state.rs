use serde::{Deserialize, Serialize};
use std::fmt;

/// State carried by an alarm notification.
///
/// Only `OK` and `ALARM` drive a weight change; anything else is kept
/// verbatim so it can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlarmState {
    Ok,
    Alarm,
    Other(String),
}

impl AlarmState {
    pub fn parse(value: &str) -> Self {
        match value {
            "OK" => AlarmState::Ok,
            "ALARM" => AlarmState::Alarm,
            other => AlarmState::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AlarmState::Ok => "OK",
            AlarmState::Alarm => "ALARM",
            AlarmState::Other(value) => value,
        }
    }

    pub fn weight_assignment(&self) -> Option<WeightAssignment> {
        match self {
            AlarmState::Ok => Some(WeightAssignment::PRIMARY_ACTIVE),
            AlarmState::Alarm => Some(WeightAssignment::SECONDARY_ACTIVE),
            AlarmState::Other(_) => None,
        }
    }
}

impl fmt::Display for AlarmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weights written to the (primary, secondary) record pair.
///
/// Active/standby only: exactly one side carries weight 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightAssignment {
    pub primary_weight: u32,
    pub secondary_weight: u32,
}

impl WeightAssignment {
    pub const PRIMARY_ACTIVE: WeightAssignment = WeightAssignment {
        primary_weight: 1,
        secondary_weight: 0,
    };

    pub const SECONDARY_ACTIVE: WeightAssignment = WeightAssignment {
        primary_weight: 0,
        secondary_weight: 1,
    };
}
