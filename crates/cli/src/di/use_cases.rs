use std::sync::Arc;
use weighted_failover_application::ports::RecordSetProvider;
use weighted_failover_application::use_cases::{ApplyFailoverUseCase, ResolveAliasTargetUseCase};
use weighted_failover_domain::{Config, FailoverTarget};
use weighted_failover_infrastructure::route53::Route53RecordSetProvider;

pub struct UseCases {
    pub resolve_alias: Arc<ResolveAliasTargetUseCase>,
    pub apply_failover: Arc<ApplyFailoverUseCase>,
}

impl UseCases {
    pub async fn new(config: &Config) -> Self {
        let provider: Arc<dyn RecordSetProvider> =
            Arc::new(Route53RecordSetProvider::from_config(&config.provider).await);

        Self::with_provider(provider, config.failover.target())
    }

    pub fn with_provider(provider: Arc<dyn RecordSetProvider>, target: FailoverTarget) -> Self {
        let resolve_alias = Arc::new(ResolveAliasTargetUseCase::new(provider.clone()));

        Self {
            apply_failover: Arc::new(ApplyFailoverUseCase::new(
                provider,
                resolve_alias.clone(),
                target,
            )),
            resolve_alias,
        }
    }
}
