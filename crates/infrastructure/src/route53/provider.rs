use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_route53::error::DisplayErrorContext;
use aws_sdk_route53::Client;
use std::future::Future;
use std::time::Duration;
use tracing::debug;
use weighted_failover_application::ports::{PageCursor, RecordSetPage, RecordSetProvider};
use weighted_failover_domain::config::ProviderConfig;
use weighted_failover_domain::{ChangeReceipt, DomainError, WeightedAliasChange};

use super::mapping::{self, CHANGE_OPERATION, LIST_OPERATION};

/// Route 53 implementation of the record set provider.
///
/// Every SDK call is bounded by `call_timeout`; a timeout is reported as
/// a failed call and is not retried here.
pub struct Route53RecordSetProvider {
    client: Client,
    call_timeout: Duration,
}

impl Route53RecordSetProvider {
    pub fn new(client: Client, call_timeout: Duration) -> Self {
        Self {
            client,
            call_timeout,
        }
    }

    /// Build a client from the ambient AWS credential chain.
    pub async fn from_config(config: &ProviderConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;

        Self::new(Client::new(&sdk_config), config.call_timeout())
    }

    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, DomainError>>,
    {
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::ProviderTimeout {
                operation,
                timeout_ms: self.call_timeout.as_millis() as u64,
            }),
        }
    }
}

fn provider_error<E>(operation: &'static str, err: E) -> DomainError
where
    E: std::error::Error,
{
    DomainError::ProviderCall {
        operation,
        message: DisplayErrorContext(err).to_string(),
    }
}

#[async_trait]
impl RecordSetProvider for Route53RecordSetProvider {
    async fn list_record_sets(
        &self,
        hosted_zone_id: &str,
        cursor: Option<&PageCursor>,
    ) -> Result<RecordSetPage, DomainError> {
        let mut request = self
            .client
            .list_resource_record_sets()
            .hosted_zone_id(hosted_zone_id);

        if let Some(cursor) = cursor {
            request = request
                .start_record_name(&cursor.name)
                .start_record_type(mapping::to_rr_type(cursor.record_type))
                .set_start_record_identifier(cursor.set_identifier.clone());
        }

        let output = self
            .bounded(LIST_OPERATION, async {
                request
                    .send()
                    .await
                    .map_err(|e| provider_error(LIST_OPERATION, e))
            })
            .await?;

        let record_sets: Vec<_> = output
            .resource_record_sets()
            .iter()
            .filter_map(mapping::descriptor_from)
            .collect();

        let next = mapping::next_page_cursor(
            output.is_truncated(),
            output.next_record_name(),
            output.next_record_type(),
            output.next_record_identifier(),
        )?;

        debug!(
            hosted_zone_id = %hosted_zone_id,
            listed = output.resource_record_sets().len(),
            mapped = record_sets.len(),
            truncated = output.is_truncated(),
            "Listed record set page"
        );

        Ok(RecordSetPage { record_sets, next })
    }

    async fn upsert_weighted_alias(
        &self,
        hosted_zone_id: &str,
        change: &WeightedAliasChange,
    ) -> Result<ChangeReceipt, DomainError> {
        let batch = mapping::upsert_change_batch(change)?;

        debug!(
            hosted_zone_id = %hosted_zone_id,
            name = %change.key.name,
            set_identifier = %change.key.set_identifier,
            weight = change.weight,
            "Submitting UPSERT"
        );

        let output = self
            .bounded(CHANGE_OPERATION, async {
                self.client
                    .change_resource_record_sets()
                    .hosted_zone_id(hosted_zone_id)
                    .change_batch(batch)
                    .send()
                    .await
                    .map_err(|e| provider_error(CHANGE_OPERATION, e))
            })
            .await?;

        Ok(mapping::receipt_from(output.change_info().into()))
    }
}
