//! Logging setup for the linkplan CLI.
//!
//! # Verbosity Levels
//!
//! The filter is chosen in this order:
//! 1. `--verbose`: DEBUG for linkplan crates
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG` environment variable
//! 4. The manifest's `log_level` setting, once a manifest is loaded
//! 5. Default: INFO for linkplan crates
//!
//! ```rust,no_run
//! use linkplan_cli::logger::init_logger;
//!
//! let logger = init_logger(false, false, false);
//! logger.apply_manifest_level(Some("debug"));
//! ```

use tracing::debug;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

const CRATES: [&str; 4] = ["linkplan", "linkplan_graph", "linkplan_config", "linkplan_cli"];

/// Filter directives setting every linkplan crate to `level`.
pub fn crate_directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Handle to the installed subscriber.
///
/// The manifest is read after logging starts, so its `log_level` is applied
/// afterwards through a reloadable filter. Explicit flags and `RUST_LOG`
/// always win over the manifest.
pub struct Logger {
    handle: Option<reload::Handle<EnvFilter, Registry>>,
    manifest_may_override: bool,
}

impl Logger {
    /// A logger that ignores manifest levels; for tests and embedding.
    pub fn disabled() -> Self {
        Self {
            handle: None,
            manifest_may_override: false,
        }
    }

    /// Apply the manifest's `log_level`, unless a flag or `RUST_LOG` chose
    /// the level already.
    pub fn apply_manifest_level(&self, level: Option<&str>) {
        let (Some(handle), Some(level), true) = (&self.handle, level, self.manifest_may_override)
        else {
            return;
        };

        match EnvFilter::try_new(crate_directives(level)) {
            Ok(filter) => {
                if handle.reload(filter).is_ok() {
                    debug!(level, "applied manifest log level");
                }
            }
            Err(err) => crate::ui::warning(&format!("Ignoring log_level '{level}': {err}")),
        }
    }
}

/// Initialize the tracing subscriber.
///
/// Call once at program start. A second call leaves the first subscriber in
/// place.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) -> Logger {
    let mut manifest_may_override = false;
    let filter = if verbose {
        EnvFilter::new(crate_directives("debug"))
    } else if quiet {
        EnvFilter::new(crate_directives("error"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            manifest_may_override = true;
            EnvFilter::new(crate_directives("info"))
        })
    };

    let (filter, handle) = reload::Layer::new(filter);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok();

    Logger {
        handle: installed.then_some(handle),
        manifest_may_override,
    }
}

/// Check if colored log output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            crate_directives("warn"),
            "linkplan=warn,linkplan_graph=warn,linkplan_config=warn,linkplan_cli=warn"
        );
        assert!(EnvFilter::try_new(crate_directives("trace")).is_ok());
    }

    #[test]
    fn disabled_logger_ignores_manifest_level() {
        Logger::disabled().apply_manifest_level(Some("debug"));
    }

    #[test]
    #[serial_test::serial]
    fn no_color_disables_colors() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(!should_use_colors());
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
        assert!(should_use_colors());
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
    }
}
