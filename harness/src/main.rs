//! Contract-test runner
//!
//! Resolves the target base URL, runs the selected suite(s) and prints a
//! per-case report with per-tier totals. Exits non-zero when any step
//! failed or errored.

use std::time::Duration;

use clap::Parser;

use harness::suites;
use shared::HarnessConfig;

#[derive(Parser)]
#[command(name = "harness")]
#[command(about = "Contract-test harness for the Bookstore REST API")]
struct Args {
    /// Suite to run
    #[arg(long, default_value = "all")]
    suite: String,

    /// Target API base URL (overrides BOOKSTORE_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Enable verbose tracing output
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    shared::logging::init_tracing(args.verbose);

    // Missing base URL is fatal here, before any case runs.
    let config = HarnessConfig::resolve(args.base_url.as_deref())?
        .with_timeout(Duration::from_secs(args.timeout_secs));

    tracing::info!("🧪 Running suite '{}' against {}", args.suite, config.base_url);

    let reports = suites::run_suite(&args.suite, &config).await?;

    let mut all_passed = true;
    for report in &reports {
        println!("{}", report);
        if !report.is_success() {
            all_passed = false;
        }
        if report.has_blocking_failures() {
            tracing::error!("⛔ Suite '{}' has P1 (blocking) failures", report.suite);
        }
    }

    if all_passed {
        tracing::info!("🏁 Suite '{}' completed with no failures", args.suite);
        Ok(())
    } else {
        Err(format!("Suite '{}' had failures", args.suite).into())
    }
}
