use clap::{Parser, Subcommand};
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use weighted_failover_domain::{AlarmState, CliOverrides, FailoverRole, LogFormat};

mod bootstrap;
mod di;
mod handler;
mod summary;

use handler::FailoverHandler;
use summary::InvocationSummary;

#[derive(Parser)]
#[command(name = "weighted-failover")]
#[command(version)]
#[command(about = "Weighted DNS failover driven by CloudWatch alarm state")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Hosted zone containing the record pair
    #[arg(long, global = true)]
    hosted_zone_id: Option<String>,

    /// Fully qualified record set name, with trailing dot
    #[arg(long, global = true)]
    record_set_name: Option<String>,

    /// Record type (A, AAAA, CNAME, ...)
    #[arg(long, global = true)]
    record_type: Option<String>,

    /// Set identifier of the primary record
    #[arg(long, global = true)]
    primary_identifier: Option<String>,

    /// Set identifier of the secondary record
    #[arg(long, global = true)]
    secondary_identifier: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log format (text, json)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve alarm notifications from the AWS Lambda runtime
    Lambda,
    /// Apply the weights for an alarm state
    Apply {
        /// Alarm state, e.g. OK or ALARM
        #[arg(long)]
        state: String,
    },
    /// Show the writes an alarm state would issue without applying them
    Plan {
        #[arg(long)]
        state: String,
    },
    /// Print the alias targets of both records
    Resolve,
    /// Decode a saved trigger payload and apply it
    HandleEvent {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        hosted_zone_id: cli.hosted_zone_id.clone(),
        record_set_name: cli.record_set_name.clone(),
        record_type: cli.record_type.clone(),
        primary_identifier: cli.primary_identifier.clone(),
        secondary_identifier: cli.secondary_identifier.clone(),
        log_level: cli.log_level.clone(),
        log_format: cli.log_format,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        hosted_zone_id = %config.failover.hosted_zone_id,
        record_set_name = %config.failover.record_set_name,
        record_type = %config.failover.record_type,
        primary = %config.failover.primary_identifier,
        secondary = %config.failover.secondary_identifier,
        "Starting weighted-failover"
    );

    let use_cases = di::UseCases::new(&config).await;
    let handler = Arc::new(FailoverHandler::new(use_cases.apply_failover.clone()));

    match cli.command {
        Command::Lambda => {
            lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
                let handler = handler.clone();
                async move { handler.handle_lambda(event).await }
            }))
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        }
        Command::Apply { state } => {
            let summary = handler.apply(AlarmState::parse(&state)).await;
            report(&summary)?;
        }
        Command::Plan { state } => {
            let state = AlarmState::parse(&state);
            let summary = match use_cases.apply_failover.plan(&state).await? {
                Some(plan) => InvocationSummary::from_plan(&plan),
                None => InvocationSummary::ignored(&state),
            };
            report(&summary)?;
        }
        Command::Resolve => {
            let target = use_cases.apply_failover.target();
            for role in [FailoverRole::Primary, FailoverRole::Secondary] {
                let key = target.key(role);
                let alias = use_cases
                    .resolve_alias
                    .execute(&target.hosted_zone_id, key)
                    .await?;
                println!("{:<9} {} -> {}", role.as_str(), key, alias);
            }
        }
        Command::HandleEvent { path } => {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
            let payload: Value = serde_json::from_str(&contents)?;
            let summary = handler.handle_payload(&payload).await?;
            report(&summary)?;
        }
    }

    Ok(())
}

/// Print the summary as JSON and fail the process when writes failed.
fn report(summary: &InvocationSummary) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);

    if !summary.status.is_success() {
        anyhow::bail!("failover finished with status {:?}", summary.status);
    }
    Ok(())
}
