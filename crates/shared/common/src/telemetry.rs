//! Log filter construction.
//!
//! `LOG_LEVEL` is not validated when settings load. The level is only
//! interpreted here, when the subscriber is built. A single word must be a
//! level name; a directive list must be accepted by `EnvFilter`. Anything
//! else falls back to `info`.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::constants::DEFAULT_LOG_LEVEL;

/// A log filter plus how it was derived.
#[derive(Debug)]
pub struct LogFilter {
    pub filter: EnvFilter,
    /// Directive actually used
    pub directive: String,
    /// True when the requested level was unusable and the default was taken
    pub fallback: bool,
}

/// Build the log filter for a configured level.
///
/// `verbose` forces `debug` regardless of the configured level.
pub fn log_filter(level: &str, verbose: bool) -> LogFilter {
    if verbose {
        return LogFilter {
            filter: EnvFilter::new("debug"),
            directive: "debug".to_string(),
            fallback: false,
        };
    }

    let directive = normalize(level);
    if usable(&directive) {
        if let Ok(filter) = EnvFilter::try_new(&directive) {
            return LogFilter {
                filter,
                directive,
                fallback: false,
            };
        }
    }

    LogFilter {
        filter: EnvFilter::new(DEFAULT_LOG_LEVEL),
        directive: DEFAULT_LOG_LEVEL.to_string(),
        fallback: true,
    }
}

/// `EnvFilter` reads a bare word as a target name, so a lone word has to be a level.
fn usable(directive: &str) -> bool {
    if directive.is_empty() {
        return false;
    }
    if directive.contains(['=', ',']) {
        return true;
    }
    directive.parse::<LevelFilter>().is_ok()
}

/// Map common severity spellings onto tracing's level names.
fn normalize(level: &str) -> String {
    let level = level.trim();
    match level.to_ascii_lowercase().as_str() {
        "warning" => "warn".to_string(),
        "critical" | "fatal" => "error".to_string(),
        _ => level.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_levels() {
        for level in ["trace", "debug", "info", "warn", "error", "off"] {
            let filter = log_filter(level, false);
            assert!(!filter.fallback, "{level} fell back");
            assert_eq!(filter.directive, level);
        }
    }

    #[test]
    fn test_severity_aliases() {
        assert_eq!(log_filter("WARNING", false).directive, "warn");
        assert_eq!(log_filter("critical", false).directive, "error");
    }

    #[test]
    fn test_directives_pass_through() {
        let filter = log_filter("info,common=debug", false);

        assert!(!filter.fallback);
        assert_eq!(filter.directive, "info,common=debug");
    }

    #[test]
    fn test_unusable_level_falls_back_to_info() {
        for level in ["", "   ", "common=loud", "verbose-ish", "LOUD", "loud"] {
            let filter = log_filter(level, false);
            assert!(filter.fallback, "{level:?} did not fall back");
            assert_eq!(filter.directive, "info");
        }
    }

    #[test]
    fn test_level_names_are_case_insensitive() {
        let filter = log_filter("DEBUG", false);

        assert!(!filter.fallback);
        assert_eq!(filter.directive, "DEBUG");
    }

    #[test]
    fn test_verbose_forces_debug() {
        let filter = log_filter("error", true);

        assert_eq!(filter.directive, "debug");
        assert!(!filter.fallback);
    }
}
