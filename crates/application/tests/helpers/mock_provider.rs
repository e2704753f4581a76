#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use weighted_failover_application::ports::{PageCursor, RecordSetPage, RecordSetProvider};
use weighted_failover_application::use_cases::{ApplyFailoverUseCase, ResolveAliasTargetUseCase};
use weighted_failover_domain::{
    AliasTarget, ChangeReceipt, DomainError, FailoverTarget, RecordSetDescriptor, RecordSetKey,
    RecordType, WeightedAliasChange,
};

pub const ZONE: &str = "ZHOSTED";
pub const RECORD_NAME: &str = "api.example.com.";

/// In-memory hosted zone implementing the provider port.
#[derive(Clone)]
pub struct MockRecordSetProvider {
    records: Arc<Mutex<Vec<RecordSetDescriptor>>>,
    page_size: Arc<Mutex<usize>>,
    list_error: Arc<Mutex<Option<DomainError>>>,
    stuck_pagination: Arc<Mutex<bool>>,
    looping_pagination: Arc<Mutex<bool>>,
    upsert_delay: Arc<Mutex<Option<Duration>>>,
    upsert_errors: Arc<Mutex<HashMap<String, DomainError>>>,
    upserts: Arc<Mutex<Vec<(String, WeightedAliasChange)>>>,
    list_calls: Arc<AtomicUsize>,
}

impl MockRecordSetProvider {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            page_size: Arc::new(Mutex::new(usize::MAX)),
            list_error: Arc::new(Mutex::new(None)),
            stuck_pagination: Arc::new(Mutex::new(false)),
            looping_pagination: Arc::new(Mutex::new(false)),
            upsert_delay: Arc::new(Mutex::new(None)),
            upsert_errors: Arc::new(Mutex::new(HashMap::new())),
            upserts: Arc::new(Mutex::new(Vec::new())),
            list_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Zone from the failover scenarios: `primary` and `secondary` weighted
    /// aliases for api.example.com. plus some unrelated records.
    pub fn with_failover_pair() -> Self {
        let provider = Self::new();
        provider.add_record(plain_record("example.com.", RecordType::A, None));
        provider.add_record(alias_record(
            RECORD_NAME,
            "primary",
            "primary-lb.example.com.",
            "Z1",
        ));
        provider.add_record(alias_record(
            RECORD_NAME,
            "secondary",
            "secondary-lb.example.com.",
            "Z2",
        ));
        provider.add_record(plain_record("www.example.com.", RecordType::CNAME, None));
        provider
    }

    pub fn add_record(&self, record: RecordSetDescriptor) {
        self.records.lock().unwrap().push(record);
    }

    pub fn set_page_size(&self, size: usize) {
        *self.page_size.lock().unwrap() = size;
    }

    pub fn fail_listing(&self, error: DomainError) {
        *self.list_error.lock().unwrap() = Some(error);
    }

    pub fn stick_pagination(&self) {
        *self.stuck_pagination.lock().unwrap() = true;
    }

    /// After the last page, point back at the first record instead of ending.
    pub fn loop_pagination(&self) {
        *self.looping_pagination.lock().unwrap() = true;
    }

    pub fn delay_upserts(&self, delay: Duration) {
        *self.upsert_delay.lock().unwrap() = Some(delay);
    }

    pub fn fail_upsert_for(&self, set_identifier: &str, error: DomainError) {
        self.upsert_errors
            .lock()
            .unwrap()
            .insert(set_identifier.to_string(), error);
    }

    pub fn upserts(&self) -> Vec<WeightedAliasChange> {
        self.upserts
            .lock()
            .unwrap()
            .iter()
            .map(|(_, change)| change.clone())
            .collect()
    }

    pub fn upsert_zones(&self) -> Vec<String> {
        self.upserts
            .lock()
            .unwrap()
            .iter()
            .map(|(zone, _)| zone.clone())
            .collect()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn weight_of(&self, set_identifier: &str) -> Option<u32> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.set_identifier.as_deref() == Some(set_identifier))
            .and_then(|r| r.weight)
    }

    fn cursor_for(record: &RecordSetDescriptor) -> PageCursor {
        PageCursor {
            name: record.name.clone(),
            record_type: record.record_type,
            set_identifier: record.set_identifier.clone(),
        }
    }
}

impl Default for MockRecordSetProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordSetProvider for MockRecordSetProvider {
    async fn list_record_sets(
        &self,
        _hosted_zone_id: &str,
        cursor: Option<&PageCursor>,
    ) -> Result<RecordSetPage, DomainError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = self.list_error.lock().unwrap().clone() {
            return Err(err);
        }

        let records = self.records.lock().unwrap();
        let page_size = *self.page_size.lock().unwrap();

        let start = match cursor {
            None => 0,
            Some(cursor) => records
                .iter()
                .position(|r| Self::cursor_for(r) == *cursor)
                .unwrap_or(records.len()),
        };
        let end = start.saturating_add(page_size).min(records.len());
        let page: Vec<RecordSetDescriptor> = records[start..end].to_vec();

        let next = if *self.stuck_pagination.lock().unwrap() {
            records.first().map(Self::cursor_for)
        } else if *self.looping_pagination.lock().unwrap() {
            records.get(end).or(records.first()).map(Self::cursor_for)
        } else {
            records.get(end).map(Self::cursor_for)
        };

        Ok(RecordSetPage {
            record_sets: page,
            next,
        })
    }

    async fn upsert_weighted_alias(
        &self,
        hosted_zone_id: &str,
        change: &WeightedAliasChange,
    ) -> Result<ChangeReceipt, DomainError> {
        let delay = *self.upsert_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self
            .upsert_errors
            .lock()
            .unwrap()
            .get(&change.key.set_identifier)
            .cloned()
        {
            return Err(err);
        }

        let mut upserts = self.upserts.lock().unwrap();
        upserts.push((hosted_zone_id.to_string(), change.clone()));

        let updated = RecordSetDescriptor {
            name: change.key.name.clone(),
            record_type: change.key.record_type,
            set_identifier: Some(change.key.set_identifier.clone()),
            weight: Some(change.weight),
            alias_target: Some(change.alias_target.clone()),
        };
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|r| change.key.matches(r)) {
            Some(existing) => *existing = updated,
            None => records.push(updated),
        }

        Ok(ChangeReceipt {
            change_id: format!("C{}", upserts.len()),
            status: "PENDING".to_string(),
        })
    }
}

pub fn alias_record(
    name: &str,
    set_identifier: &str,
    dns_name: &str,
    hosted_zone_id: &str,
) -> RecordSetDescriptor {
    RecordSetDescriptor {
        name: name.to_string(),
        record_type: RecordType::A,
        set_identifier: Some(set_identifier.to_string()),
        weight: Some(1),
        alias_target: Some(AliasTarget::new(dns_name, hosted_zone_id)),
    }
}

pub fn plain_record(
    name: &str,
    record_type: RecordType,
    set_identifier: Option<&str>,
) -> RecordSetDescriptor {
    RecordSetDescriptor {
        name: name.to_string(),
        record_type,
        set_identifier: set_identifier.map(str::to_string),
        weight: set_identifier.map(|_| 1),
        alias_target: None,
    }
}

pub fn key(set_identifier: &str) -> RecordSetKey {
    RecordSetKey::new(RECORD_NAME, RecordType::A, set_identifier)
}

pub fn failover_target() -> FailoverTarget {
    FailoverTarget {
        hosted_zone_id: ZONE.to_string(),
        primary: key("primary"),
        secondary: key("secondary"),
    }
}

pub fn build_use_case(provider: &MockRecordSetProvider) -> ApplyFailoverUseCase {
    let provider: Arc<dyn RecordSetProvider> = Arc::new(provider.clone());
    let resolver = Arc::new(ResolveAliasTargetUseCase::new(provider.clone()));
    ApplyFailoverUseCase::new(provider, resolver, failover_target())
}

pub fn provider_error(message: &str) -> DomainError {
    DomainError::ProviderCall {
        operation: "ChangeResourceRecordSets",
        message: message.to_string(),
    }
}
