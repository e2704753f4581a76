pub mod failover;

// Re-export use cases
pub use failover::{ApplyFailoverUseCase, ResolveAliasTargetUseCase};
