//! Conversions between Route 53 SDK shapes and domain types.

use aws_sdk_route53::types::{
    AliasTarget as Route53AliasTarget, Change, ChangeAction, ChangeBatch, ChangeInfo,
    ResourceRecordSet, RrType,
};
use std::fmt;
use weighted_failover_application::ports::PageCursor;
use weighted_failover_domain::{
    AliasTarget, ChangeReceipt, DomainError, RecordSetDescriptor, RecordType, WeightedAliasChange,
};

pub const LIST_OPERATION: &str = "ListResourceRecordSets";
pub const CHANGE_OPERATION: &str = "ChangeResourceRecordSets";

pub fn to_rr_type(record_type: RecordType) -> RrType {
    RrType::from(record_type.as_str())
}

/// Map a listed record set. Record types the domain does not model are
/// skipped, since no configured key can match them.
pub fn descriptor_from(record: &ResourceRecordSet) -> Option<RecordSetDescriptor> {
    let record_type = record.r#type().as_str().parse::<RecordType>().ok()?;

    Some(RecordSetDescriptor {
        name: record.name().to_string(),
        record_type,
        set_identifier: record.set_identifier().map(str::to_string),
        weight: record.weight().and_then(|w| u32::try_from(w).ok()),
        alias_target: record
            .alias_target()
            .map(|alias| AliasTarget::new(alias.dns_name(), alias.hosted_zone_id())),
    })
}

/// Cursor for the next `ListResourceRecordSets` page, from the
/// `IsTruncated` / `NextRecord*` response fields.
pub fn next_page_cursor(
    is_truncated: bool,
    next_name: Option<&str>,
    next_type: Option<&RrType>,
    next_identifier: Option<&str>,
) -> Result<Option<PageCursor>, DomainError> {
    if !is_truncated {
        return Ok(None);
    }

    let (Some(name), Some(rr_type)) = (next_name, next_type) else {
        return Err(DomainError::ProviderCall {
            operation: LIST_OPERATION,
            message: "truncated listing without a next record".to_string(),
        });
    };

    let record_type = rr_type
        .as_str()
        .parse::<RecordType>()
        .map_err(|e| DomainError::ProviderCall {
            operation: LIST_OPERATION,
            message: format!("cannot continue listing: {}", e),
        })?;

    Ok(Some(PageCursor {
        name: name.to_string(),
        record_type,
        set_identifier: next_identifier.map(str::to_string),
    }))
}

/// Single-change `UPSERT` batch for a weighted alias record set.
pub fn upsert_change_batch(change: &WeightedAliasChange) -> Result<ChangeBatch, DomainError> {
    let alias = Route53AliasTarget::builder()
        .dns_name(&change.alias_target.dns_name)
        .hosted_zone_id(&change.alias_target.hosted_zone_id)
        .evaluate_target_health(change.evaluate_target_health)
        .build()
        .map_err(build_error)?;

    let record_set = ResourceRecordSet::builder()
        .name(&change.key.name)
        .r#type(to_rr_type(change.key.record_type))
        .set_identifier(&change.key.set_identifier)
        .weight(i64::from(change.weight))
        .alias_target(alias)
        .build()
        .map_err(build_error)?;

    let upsert = Change::builder()
        .action(ChangeAction::Upsert)
        .resource_record_set(record_set)
        .build()
        .map_err(build_error)?;

    ChangeBatch::builder()
        .comment(format!(
            "weighted failover: {} weight {}",
            change.key, change.weight
        ))
        .changes(upsert)
        .build()
        .map_err(build_error)
}

pub fn receipt_from(change_info: Option<&ChangeInfo>) -> ChangeReceipt {
    match change_info {
        Some(info) => ChangeReceipt {
            change_id: info.id().to_string(),
            status: info.status().as_str().to_string(),
        },
        None => ChangeReceipt {
            change_id: String::new(),
            status: "UNKNOWN".to_string(),
        },
    }
}

fn build_error(e: impl fmt::Display) -> DomainError {
    DomainError::ProviderCall {
        operation: CHANGE_OPERATION,
        message: format!("invalid change request: {}", e),
    }
}
