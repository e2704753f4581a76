mod record_type;

pub use record_type::RecordType;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one weighted variant of a DNS record set.
///
/// `name` is compared byte-for-byte against provider listings, so it must
/// be in the provider's canonical form (fully qualified, trailing dot).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordSetKey {
    pub name: String,
    pub record_type: RecordType,
    pub set_identifier: String,
}

impl RecordSetKey {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        set_identifier: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            set_identifier: set_identifier.into(),
        }
    }

    /// Exact match on (name, type, set identifier).
    pub fn matches(&self, record: &RecordSetDescriptor) -> bool {
        record.name == self.name
            && record.record_type == self.record_type
            && record.set_identifier.as_deref() == Some(self.set_identifier.as_str())
    }
}

impl fmt::Display for RecordSetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}]",
            self.name, self.record_type, self.set_identifier
        )
    }
}

/// Alias pointer of a record set: the DNS name and hosted zone it resolves through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AliasTarget {
    pub dns_name: String,
    pub hosted_zone_id: String,
}

impl AliasTarget {
    pub fn new(dns_name: impl Into<String>, hosted_zone_id: impl Into<String>) -> Self {
        Self {
            dns_name: dns_name.into(),
            hosted_zone_id: hosted_zone_id.into(),
        }
    }
}

impl fmt::Display for AliasTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.dns_name, self.hosted_zone_id)
    }
}

/// One row of a zone listing as reported by the DNS provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSetDescriptor {
    pub name: String,
    pub record_type: RecordType,
    pub set_identifier: Option<String>,
    pub weight: Option<u32>,
    /// `None` for literal value records.
    pub alias_target: Option<AliasTarget>,
}
