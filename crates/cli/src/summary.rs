use serde::Serialize;
use weighted_failover_domain::{
    AlarmState, DomainError, FailoverOutcome, FailoverPlan, FailoverRole, UpsertOutcome,
    WeightedAliasChange,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationStatus {
    /// Both records were written.
    Applied,
    /// One of the two writes failed.
    Partial,
    /// Both writes failed.
    Failed,
    /// The alarm state maps to no weight assignment.
    Ignored,
    /// Nothing was written because alias resolution failed.
    Aborted,
    /// Dry run.
    Planned,
}

impl InvocationStatus {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            InvocationStatus::Applied | InvocationStatus::Ignored | InvocationStatus::Planned
        )
    }
}

/// JSON document returned from an invocation.
#[derive(Debug, Clone, Serialize)]
pub struct InvocationSummary {
    pub status: InvocationStatus,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<RecordSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordSummary {
    pub role: FailoverRole,
    pub name: String,
    pub set_identifier: String,
    pub weight: u32,
    pub alias_dns_name: String,
    pub alias_hosted_zone_id: String,
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecordSummary {
    fn planned(role: FailoverRole, change: &WeightedAliasChange) -> Self {
        Self {
            role,
            name: change.key.name.clone(),
            set_identifier: change.key.set_identifier.clone(),
            weight: change.weight,
            alias_dns_name: change.alias_target.dns_name.clone(),
            alias_hosted_zone_id: change.alias_target.hosted_zone_id.clone(),
            applied: false,
            change_id: None,
            change_status: None,
            error: None,
        }
    }

    fn from_outcome(outcome: &UpsertOutcome) -> Self {
        let mut record = Self::planned(outcome.role, &outcome.change);
        match &outcome.result {
            Ok(receipt) => {
                record.applied = true;
                record.change_id = Some(receipt.change_id.clone());
                record.change_status = Some(receipt.status.clone());
            }
            Err(e) => record.error = Some(e.to_string()),
        }
        record
    }
}

impl InvocationSummary {
    pub fn from_outcome(outcome: &FailoverOutcome) -> Self {
        match outcome {
            FailoverOutcome::Ignored { state } => Self::empty(InvocationStatus::Ignored, state),
            FailoverOutcome::Applied(report) => {
                let status = if report.is_fully_applied() {
                    InvocationStatus::Applied
                } else if report.is_partial() {
                    InvocationStatus::Partial
                } else {
                    InvocationStatus::Failed
                };

                Self {
                    records: report
                        .outcomes()
                        .into_iter()
                        .map(RecordSummary::from_outcome)
                        .collect(),
                    ..Self::empty(status, &report.state)
                }
            }
        }
    }

    pub fn from_plan(plan: &FailoverPlan) -> Self {
        Self {
            records: plan
                .changes()
                .into_iter()
                .map(|(role, change)| RecordSummary::planned(role, change))
                .collect(),
            ..Self::empty(InvocationStatus::Planned, &plan.state)
        }
    }

    /// Resolution failed before any write was issued.
    pub fn aborted(state: &AlarmState, error: &DomainError) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::empty(InvocationStatus::Aborted, state)
        }
    }

    pub fn ignored(state: &AlarmState) -> Self {
        Self::empty(InvocationStatus::Ignored, state)
    }

    pub fn with_alarm_name(mut self, alarm_name: Option<String>) -> Self {
        self.alarm_name = alarm_name;
        self
    }

    fn empty(status: InvocationStatus, state: &AlarmState) -> Self {
        Self {
            status,
            state: state.to_string(),
            alarm_name: None,
            records: Vec::new(),
            error: None,
        }
    }
}
