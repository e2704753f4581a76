mod apply_failover;
mod resolve_alias_target;

pub use apply_failover::ApplyFailoverUseCase;
pub use resolve_alias_target::ResolveAliasTargetUseCase;
