//! Tracing subscriber setup
//!
//! Diagnostics go to stderr so they never mix with command output. The
//! filter comes from `CATALOG_LOG`, then `--verbose`, then settings.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "CATALOG_LOG";

/// Pick the filter directive to use
pub fn filter_directive(verbose: bool, configured: &str) -> String {
    match std::env::var(LOG_ENV_VAR) {
        Ok(directive) if !directive.trim().is_empty() => directive,
        _ if verbose => "practice_catalog=debug,info".to_string(),
        _ => configured.to_string(),
    }
}

/// Install the global subscriber for CLI commands
pub fn init_cli_logger(verbose: bool, configured: &str) {
    let filter = EnvFilter::try_new(filter_directive(verbose, configured))
        .unwrap_or_else(|_| EnvFilter::new("practice_catalog=warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_filter_is_default() {
        if std::env::var(LOG_ENV_VAR).is_err() {
            assert_eq!(filter_directive(false, "practice_catalog=info"), "practice_catalog=info");
            assert_eq!(filter_directive(true, "practice_catalog=info"), "practice_catalog=debug,info");
        }
    }
}
