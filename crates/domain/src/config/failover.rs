use serde::{Deserialize, Serialize};

use crate::failover::FailoverTarget;
use crate::record_set::{RecordSetKey, RecordType};

/// The weighted record pair to flip, as configured.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FailoverConfig {
    #[serde(default)]
    pub hosted_zone_id: String,

    /// Fully qualified, with the trailing dot (e.g. "api.example.com.").
    #[serde(default)]
    pub record_set_name: String,

    #[serde(default = "default_record_type")]
    pub record_type: RecordType,

    #[serde(default)]
    pub primary_identifier: String,

    #[serde(default)]
    pub secondary_identifier: String,
}

impl Default for FailoverConfig {
    fn default() -> Self {
        Self {
            hosted_zone_id: String::new(),
            record_set_name: String::new(),
            record_type: default_record_type(),
            primary_identifier: String::new(),
            secondary_identifier: String::new(),
        }
    }
}

impl FailoverConfig {
    pub fn primary_key(&self) -> RecordSetKey {
        RecordSetKey::new(
            self.record_set_name.clone(),
            self.record_type,
            self.primary_identifier.clone(),
        )
    }

    pub fn secondary_key(&self) -> RecordSetKey {
        RecordSetKey::new(
            self.record_set_name.clone(),
            self.record_type,
            self.secondary_identifier.clone(),
        )
    }

    pub fn target(&self) -> FailoverTarget {
        FailoverTarget {
            hosted_zone_id: self.hosted_zone_id.clone(),
            primary: self.primary_key(),
            secondary: self.secondary_key(),
        }
    }
}

fn default_record_type() -> RecordType {
    RecordType::A
}
