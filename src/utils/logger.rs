use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("vbase_fixtures=debug,debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("vbase_fixtures=info,info"))
    };

    // stdout belongs to the harness; logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// JSON-formatted variant for harnesses that scrape structured logs.
pub fn init_json_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vbase_fixtures=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .json(),
        )
        .init();
}

/// `1`, `true`, `yes` and `on` (any case) enable verbose output.
pub fn is_verbose(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

/// Picks the JSON logger when `VBASE_LOG_FORMAT=json`, the compact one otherwise.
/// `VBASE_VERBOSE` raises the compact logger's default filter to debug.
pub fn init_from_env() {
    match std::env::var("VBASE_LOG_FORMAT").as_deref() {
        Ok("json") => init_json_logger(),
        _ => init_cli_logger(is_verbose(std::env::var("VBASE_VERBOSE").ok().as_deref())),
    }
}
