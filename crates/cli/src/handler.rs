use lambda_runtime::LambdaEvent;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};
use weighted_failover_application::use_cases::ApplyFailoverUseCase;
use weighted_failover_domain::{AlarmState, DomainError};
use weighted_failover_infrastructure::trigger::decode_alarm_notification;

use crate::summary::InvocationSummary;

/// Turns trigger payloads into failover invocations.
pub struct FailoverHandler {
    apply_failover: Arc<ApplyFailoverUseCase>,
}

impl FailoverHandler {
    pub fn new(apply_failover: Arc<ApplyFailoverUseCase>) -> Self {
        Self { apply_failover }
    }

    pub async fn handle_lambda(
        &self,
        event: LambdaEvent<Value>,
    ) -> Result<InvocationSummary, lambda_runtime::Error> {
        info!(request_id = %event.context.request_id, "Received invocation");
        Ok(self.handle_payload(&event.payload).await?)
    }

    /// Decode a trigger payload and apply the state it carries.
    ///
    /// Only an undecodable payload is an error; failover problems are
    /// reported in the summary.
    pub async fn handle_payload(&self, payload: &Value) -> Result<InvocationSummary, DomainError> {
        let notification = decode_alarm_notification(payload).map_err(|e| {
            error!(error = %e, "Rejected trigger payload");
            e
        })?;

        info!(
            state = %notification.state,
            alarm_name = notification.alarm_name.as_deref().unwrap_or("-"),
            "Decoded alarm notification"
        );

        Ok(self
            .apply(notification.state)
            .await
            .with_alarm_name(notification.alarm_name))
    }

    pub async fn apply(&self, state: AlarmState) -> InvocationSummary {
        match self.apply_failover.execute(state.clone()).await {
            Ok(outcome) => InvocationSummary::from_outcome(&outcome),
            Err(e) => InvocationSummary::aborted(&state, &e),
        }
    }
}
