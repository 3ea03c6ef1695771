// Logging module - Logging infrastructure
use crate::domain::error::{CloudError, CloudResult};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(log_level: &str, verbose: bool) -> String {
    let level = if verbose {
        "debug"
    } else {
        match log_level {
            "error" | "warn" | "info" | "debug" | "trace" => log_level,
            _ => "info",
        }
    };
    format!("cloudbit={},warn", level)
}

/// Initialize logging system.
///
/// Logs go to stderr so that tables on stdout stay machine readable.
pub fn init_logging(log_level: &str, verbose: bool) -> CloudResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(log_level, verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .try_init()
        .map_err(|e| CloudError::Config {
            message: format!("Failed to initialize logging: {}", e),
        })?;

    tracing::debug!("Cloudbit logging system initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("warn", false), "cloudbit=warn,warn");
        assert_eq!(default_directive("warn", true), "cloudbit=debug,warn");
        assert_eq!(default_directive("loud", false), "cloudbit=info,warn");
    }

    #[test]
    fn test_logging_init() {
        // Only one global subscriber can be installed per process
        assert!(init_logging("info", false).is_ok());
        assert!(init_logging("info", false).is_err());
    }
}
