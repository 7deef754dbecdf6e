//! Diagnostic logging setup.
//!
//! Diagnostics are structured `tracing` events.  They go to stderr as JSON
//! lines so they never mix with the answers printed on stdout.

use tracing_subscriber::EnvFilter;

/// Filter used when `--verbose` is given.
pub const VERBOSE_FILTER: &str = "parley=debug";

/// Filter used when neither `--verbose` nor `RUST_LOG` is set.
pub const QUIET_FILTER: &str = "off";

/// Choose the filter directive from the verbose flag and `RUST_LOG`.
///
/// `--verbose` wins over the environment.
pub fn filter_directive(verbose: bool, env: Option<String>) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    env.filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| QUIET_FILTER.to_string())
}

/// Install the global subscriber.  Calling this twice is harmless.
pub fn init_logging(verbose: bool) {
    let directive = filter_directive(verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(QUIET_FILTER));

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_current_span(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_overrides_environment() {
        assert_eq!(filter_directive(true, None), "parley=debug");
        assert_eq!(
            filter_directive(true, Some("trace".to_string())),
            "parley=debug"
        );
    }

    #[test]
    fn environment_is_honoured() {
        assert_eq!(
            filter_directive(false, Some("parley=info".to_string())),
            "parley=info"
        );
    }

    #[test]
    fn quiet_by_default() {
        assert_eq!(filter_directive(false, None), "off");
        assert_eq!(filter_directive(false, Some("  ".to_string())), "off");
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(false);
        init_logging(true);
    }
}
