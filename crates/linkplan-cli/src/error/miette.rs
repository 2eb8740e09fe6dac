//! Miette diagnostic conversion for CLI errors.

use miette::Report;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err.hint() {
        Some(hint) => miette::miette!(help = hint, "{}", err),
        None => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn hint_becomes_help() {
        let report = cli_error_to_miette(CliError::AlreadyExists(PathBuf::from("linkplan.toml")));
        assert_eq!(report.to_string(), "File already exists: linkplan.toml");
        assert_eq!(
            report.help().map(|h| h.to_string()).as_deref(),
            Some("Use --force to overwrite it")
        );
    }

    #[test]
    fn errors_without_hint_have_no_help() {
        let report = cli_error_to_miette(CliError::InvalidArgument("bad".into()));
        assert!(report.help().is_none());
    }
}
