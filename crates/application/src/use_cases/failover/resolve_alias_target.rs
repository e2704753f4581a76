use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, instrument};
use weighted_failover_domain::{
    AliasTarget, DomainError, RecordSetDescriptor, RecordSetKey, ResolutionFailure,
};

use crate::ports::{PageCursor, RecordSetProvider};

/// Finds the alias target currently configured for one weighted record set.
///
/// Walks every page of the zone listing; nothing is cached between calls.
/// A listing that hands back a cursor it already returned is a failed lookup.
pub struct ResolveAliasTargetUseCase {
    provider: Arc<dyn RecordSetProvider>,
}

impl ResolveAliasTargetUseCase {
    pub fn new(provider: Arc<dyn RecordSetProvider>) -> Self {
        Self { provider }
    }

    #[instrument(skip(self, key), fields(key = %key))]
    pub async fn execute(
        &self,
        hosted_zone_id: &str,
        key: &RecordSetKey,
    ) -> Result<AliasTarget, DomainError> {
        let candidates = match self.matching_record_sets(hosted_zone_id, key).await {
            Ok(candidates) => candidates,
            Err(e) => return Err(not_found(key, ResolutionFailure::Lookup(e.to_string()))),
        };

        let mut candidates = candidates.into_iter();
        let record = match (candidates.next(), candidates.len()) {
            (None, _) => return Err(not_found(key, ResolutionFailure::NoMatch)),
            (Some(record), 0) => record,
            (Some(_), rest) => return Err(not_found(key, ResolutionFailure::Ambiguous(rest + 1))),
        };

        match record.alias_target {
            Some(alias) => {
                debug!(alias = %alias, "Resolved alias target");
                Ok(alias)
            }
            None => Err(not_found(key, ResolutionFailure::NotAlias)),
        }
    }

    async fn matching_record_sets(
        &self,
        hosted_zone_id: &str,
        key: &RecordSetKey,
    ) -> Result<Vec<RecordSetDescriptor>, DomainError> {
        let mut matches = Vec::new();
        let mut cursor: Option<PageCursor> = None;
        let mut visited: HashSet<PageCursor> = HashSet::new();
        let mut pages = 0usize;

        loop {
            let page = self
                .provider
                .list_record_sets(hosted_zone_id, cursor.as_ref())
                .await?;
            pages += 1;

            matches.extend(page.record_sets.into_iter().filter(|r| key.matches(r)));

            match page.next {
                Some(next) if !visited.insert(next.clone()) => {
                    return Err(DomainError::ProviderCall {
                        operation: "ListResourceRecordSets",
                        message: format!(
                            "listing returned to {} {}",
                            next.name, next.record_type
                        ),
                    });
                }
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        debug!(
            hosted_zone_id = %hosted_zone_id,
            pages,
            matches = matches.len(),
            "Scanned zone listing"
        );

        Ok(matches)
    }
}

fn not_found(key: &RecordSetKey, reason: ResolutionFailure) -> DomainError {
    error!(
        name = %key.name,
        record_type = %key.record_type,
        set_identifier = %key.set_identifier,
        reason = %reason,
        "Alias target not found"
    );
    DomainError::ResolutionNotFound {
        key: key.clone(),
        reason,
    }
}
