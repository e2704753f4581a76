use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, instrument, warn};
use weighted_failover_domain::{
    AlarmState, DomainError, FailoverOutcome, FailoverPlan, FailoverReport, FailoverRole,
    FailoverTarget, UpsertOutcome, WeightedAliasChange,
};

use super::ResolveAliasTargetUseCase;
use crate::ports::RecordSetProvider;

/// Flips traffic between the primary and secondary weighted record sets.
///
/// Alias targets are re-resolved on every call and the full weight
/// assignment is written regardless of the weights currently in the zone,
/// so repeating a call with the same state is harmless.
pub struct ApplyFailoverUseCase {
    provider: Arc<dyn RecordSetProvider>,
    resolver: Arc<ResolveAliasTargetUseCase>,
    target: FailoverTarget,
    in_flight: Mutex<()>,
}

impl ApplyFailoverUseCase {
    pub fn new(
        provider: Arc<dyn RecordSetProvider>,
        resolver: Arc<ResolveAliasTargetUseCase>,
        target: FailoverTarget,
    ) -> Self {
        Self {
            provider,
            resolver,
            target,
            in_flight: Mutex::new(()),
        }
    }

    pub fn target(&self) -> &FailoverTarget {
        &self.target
    }

    /// Resolve both alias targets and decide the writes for `state`
    /// without applying them.
    ///
    /// Returns `Ok(None)` when the state does not map to a weight assignment.
    #[instrument(skip(self, state), fields(state = %state))]
    pub async fn plan(&self, state: &AlarmState) -> Result<Option<FailoverPlan>, DomainError> {
        let zone = self.target.hosted_zone_id.as_str();

        let primary_alias = self.resolver.execute(zone, &self.target.primary).await?;
        let secondary_alias = self.resolver.execute(zone, &self.target.secondary).await?;

        let Some(assignment) = state.weight_assignment() else {
            warn!(state = %state, "Unhandled alarm state, no changes made");
            return Ok(None);
        };

        Ok(Some(FailoverPlan::new(
            state.clone(),
            assignment,
            &self.target,
            primary_alias,
            secondary_alias,
        )))
    }

    /// Apply the weight assignment for `state`, primary first.
    ///
    /// A resolution miss aborts before any write. Once writing starts both
    /// upserts are attempted and reported individually.
    #[instrument(skip(self, state), fields(state = %state))]
    pub async fn execute(&self, state: AlarmState) -> Result<FailoverOutcome, DomainError> {
        let _guard = self.in_flight.lock().await;

        let plan = match self.plan(&state).await {
            Ok(Some(plan)) => plan,
            Ok(None) => return Ok(FailoverOutcome::Ignored { state }),
            Err(e) => {
                error!(error = %e, "Failed to retrieve alias targets, no changes made");
                return Err(e);
            }
        };

        let primary = self.upsert(FailoverRole::Primary, plan.primary).await;
        let secondary = self.upsert(FailoverRole::Secondary, plan.secondary).await;

        let report = FailoverReport {
            state: plan.state,
            assignment: plan.assignment,
            primary,
            secondary,
        };

        if report.is_fully_applied() {
            info!(
                primary_weight = report.assignment.primary_weight,
                secondary_weight = report.assignment.secondary_weight,
                "Failover applied"
            );
        } else {
            let failed: Vec<&'static str> = report.failures().map(|o| o.role.as_str()).collect();
            warn!(
                failed = ?failed,
                partial = report.is_partial(),
                "Failover not fully applied"
            );
        }

        Ok(FailoverOutcome::Applied(report))
    }

    async fn upsert(&self, role: FailoverRole, change: WeightedAliasChange) -> UpsertOutcome {
        let result = self
            .provider
            .upsert_weighted_alias(&self.target.hosted_zone_id, &change)
            .await;

        match &result {
            Ok(receipt) => info!(
                role = %role,
                name = %change.key.name,
                set_identifier = %change.key.set_identifier,
                weight = change.weight,
                alias = %change.alias_target,
                change_id = %receipt.change_id,
                status = %receipt.status,
                "DNS record weight set"
            ),
            Err(e) => error!(
                role = %role,
                hosted_zone_id = %self.target.hosted_zone_id,
                name = %change.key.name,
                record_type = %change.key.record_type,
                set_identifier = %change.key.set_identifier,
                weight = change.weight,
                alias = %change.alias_target,
                error = %e,
                "Failed to set DNS record weight"
            ),
        }

        UpsertOutcome {
            role,
            change,
            result,
        }
    }
}
