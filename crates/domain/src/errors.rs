use thiserror::Error;

use crate::record_set::RecordSetKey;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Alias target not found for {key}: {reason}")]
    ResolutionNotFound {
        key: RecordSetKey,
        reason: ResolutionFailure,
    },

    #[error("Provider call {operation} failed: {message}")]
    ProviderCall {
        operation: &'static str,
        message: String,
    },

    #[error("Provider call {operation} timed out after {timeout_ms}ms")]
    ProviderTimeout {
        operation: &'static str,
        timeout_ms: u64,
    },

    #[error("Malformed trigger payload: {0}")]
    MalformedTrigger(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),
}

/// Why a record set key could not be resolved to an alias target.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    #[error("no matching record set")]
    NoMatch,

    #[error("{0} record sets match")]
    Ambiguous(usize),

    #[error("record set has no alias target")]
    NotAlias,

    #[error("record set lookup failed: {0}")]
    Lookup(String),
}
