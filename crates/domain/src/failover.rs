use serde::{Deserialize, Serialize};
use std::fmt;

use crate::alarm_state::{AlarmState, WeightAssignment};
use crate::errors::DomainError;
use crate::record_set::{AliasTarget, RecordSetKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailoverRole {
    Primary,
    Secondary,
}

impl FailoverRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailoverRole::Primary => "primary",
            FailoverRole::Secondary => "secondary",
        }
    }
}

impl fmt::Display for FailoverRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The weighted record pair a failover flips between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailoverTarget {
    pub hosted_zone_id: String,
    pub primary: RecordSetKey,
    pub secondary: RecordSetKey,
}

impl FailoverTarget {
    pub fn key(&self, role: FailoverRole) -> &RecordSetKey {
        match role {
            FailoverRole::Primary => &self.primary,
            FailoverRole::Secondary => &self.secondary,
        }
    }
}

/// A single create-or-replace write of a weighted alias record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedAliasChange {
    pub key: RecordSetKey,
    pub weight: u32,
    pub alias_target: AliasTarget,
    pub evaluate_target_health: bool,
}

impl WeightedAliasChange {
    pub fn new(key: RecordSetKey, weight: u32, alias_target: AliasTarget) -> Self {
        Self {
            key,
            weight,
            alias_target,
            evaluate_target_health: false,
        }
    }
}

/// Provider acknowledgement of an accepted change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeReceipt {
    pub change_id: String,
    pub status: String,
}

/// The two writes a failover decision issues, primary first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailoverPlan {
    pub state: AlarmState,
    pub assignment: WeightAssignment,
    pub primary: WeightedAliasChange,
    pub secondary: WeightedAliasChange,
}

impl FailoverPlan {
    pub fn new(
        state: AlarmState,
        assignment: WeightAssignment,
        target: &FailoverTarget,
        primary_alias: AliasTarget,
        secondary_alias: AliasTarget,
    ) -> Self {
        Self {
            state,
            assignment,
            primary: WeightedAliasChange::new(
                target.primary.clone(),
                assignment.primary_weight,
                primary_alias,
            ),
            secondary: WeightedAliasChange::new(
                target.secondary.clone(),
                assignment.secondary_weight,
                secondary_alias,
            ),
        }
    }

    pub fn changes(&self) -> [(FailoverRole, &WeightedAliasChange); 2] {
        [
            (FailoverRole::Primary, &self.primary),
            (FailoverRole::Secondary, &self.secondary),
        ]
    }
}

/// Result of one upsert within a failover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub role: FailoverRole,
    pub change: WeightedAliasChange,
    pub result: Result<ChangeReceipt, DomainError>,
}

impl UpsertOutcome {
    pub fn is_applied(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&DomainError> {
        self.result.as_ref().err()
    }
}

/// Per-record outcomes of an applied failover.
///
/// The two writes are independent, so a report can be partially applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailoverReport {
    pub state: AlarmState,
    pub assignment: WeightAssignment,
    pub primary: UpsertOutcome,
    pub secondary: UpsertOutcome,
}

impl FailoverReport {
    pub fn outcomes(&self) -> [&UpsertOutcome; 2] {
        [&self.primary, &self.secondary]
    }

    pub fn is_fully_applied(&self) -> bool {
        self.primary.is_applied() && self.secondary.is_applied()
    }

    pub fn is_partial(&self) -> bool {
        self.primary.is_applied() != self.secondary.is_applied()
    }

    pub fn failures(&self) -> impl Iterator<Item = &UpsertOutcome> {
        self.outcomes().into_iter().filter(|o| !o.is_applied())
    }
}

/// What an invocation of the failover controller did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailoverOutcome {
    Applied(FailoverReport),
    /// State was neither OK nor ALARM; nothing was written.
    Ignored { state: AlarmState },
}

impl FailoverOutcome {
    pub fn report(&self) -> Option<&FailoverReport> {
        match self {
            FailoverOutcome::Applied(report) => Some(report),
            FailoverOutcome::Ignored { .. } => None,
        }
    }
}
