//! Weighted failover domain layer
pub mod alarm_state;
pub mod config;
pub mod errors;
pub mod failover;
pub mod record_set;

pub use alarm_state::{AlarmState, WeightAssignment};
pub use config::{CliOverrides, Config, ConfigError, FailoverConfig, LogFormat};
pub use errors::{DomainError, ResolutionFailure};
pub use failover::{
    ChangeReceipt, FailoverOutcome, FailoverPlan, FailoverReport, FailoverRole, FailoverTarget,
    UpsertOutcome, WeightedAliasChange,
};
pub use record_set::{AliasTarget, RecordSetDescriptor, RecordSetKey, RecordType};
