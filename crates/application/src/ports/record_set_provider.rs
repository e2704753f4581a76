use async_trait::async_trait;
use weighted_failover_domain::{
    ChangeReceipt, DomainError, RecordSetDescriptor, RecordType, WeightedAliasChange,
};

/// Position to resume a zone listing from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageCursor {
    pub name: String,
    pub record_type: RecordType,
    pub set_identifier: Option<String>,
}

/// One page of a zone listing. `next` is `None` on the last page.
#[derive(Debug, Clone, Default)]
pub struct RecordSetPage {
    pub record_sets: Vec<RecordSetDescriptor>,
    pub next: Option<PageCursor>,
}

/// Read and write access to the record sets of a hosted zone.
#[async_trait]
pub trait RecordSetProvider: Send + Sync {
    async fn list_record_sets(
        &self,
        hosted_zone_id: &str,
        cursor: Option<&PageCursor>,
    ) -> Result<RecordSetPage, DomainError>;

    /// Create-or-replace the weighted alias record set keyed by
    /// (name, type, set identifier).
    async fn upsert_weighted_alias(
        &self,
        hosted_zone_id: &str,
        change: &WeightedAliasChange,
    ) -> Result<ChangeReceipt, DomainError>;
}
