use clap::Parser;
use dio_bank::application::session::Session;
use dio_bank::config::{
    DEFAULT_MAX_DAILY_WITHDRAWALS, DEFAULT_WITHDRAWAL_LIMIT, SessionConfig, WithdrawalLimits,
};
use dio_bank::domain::account::DEFAULT_BRANCH;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Branch code assigned to new accounts
    #[arg(long, default_value = DEFAULT_BRANCH)]
    branch: String,

    /// Largest amount a single withdrawal may take
    #[arg(long, default_value_t = DEFAULT_WITHDRAWAL_LIMIT)]
    withdrawal_limit: Decimal,

    /// Number of withdrawals allowed per session
    #[arg(long, default_value_t = DEFAULT_MAX_DAILY_WITHDRAWALS)]
    max_daily_withdrawals: u32,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout belongs to the interactive console.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = SessionConfig {
        branch: cli.branch,
        limits: WithdrawalLimits {
            per_withdrawal: cli.withdrawal_limit,
            max_daily: cli.max_daily_withdrawals,
        },
    };
    tracing::debug!(?config, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run().into_diagnostic()?;

    Ok(())
}
