//! Init command implementation.
//!
//! Writes a starter `linkplan.toml`.

use std::fs;

use linkplan_config::{MANIFEST_FILE_NAMES, STARTER_MANIFEST};

use crate::cli::InitArgs;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the init command.
///
/// # Errors
///
/// Returns errors for:
/// - A missing target directory
/// - An existing manifest without `--force`
/// - File write failures
pub fn execute(args: InitArgs) -> Result<()> {
    if !args.dir.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "'{}' is not a directory",
            args.dir.display()
        )));
    }

    let path = args.dir.join(MANIFEST_FILE_NAMES[0]);
    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path));
    }

    fs::write(&path, STARTER_MANIFEST)?;
    ui::success(&format!("Created {}", path.display()));
    ui::info("Next: edit the [units] tables, then run 'linkplan check'");
    Ok(())
}
