//! Tracing setup shared by the harness binary and the mock API

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing output for a harness process.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("harness=debug,mockapi=debug,info")
    } else {
        EnvFilter::new("harness=info,mockapi=info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
