//! linkplan CLI entry point.
//!
//! Parses arguments, sets up logging and colors, then dispatches to the
//! command implementations.

use clap::Parser;
use linkplan_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let logger = logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let global = args.global_options();
    let result = match args.command {
        cli::Command::Resolve(resolve_args) => {
            commands::resolve_execute(resolve_args, &global, &logger)
        }
        cli::Command::Closure(closure_args) => {
            commands::closure_execute(closure_args, &global, &logger)
        }
        cli::Command::Check(check_args) => commands::check_execute(check_args, &global, &logger),
        cli::Command::Stats(stats_args) => commands::stats_execute(stats_args, &global, &logger),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
    };

    result.map_err(error::cli_error_to_miette)
}
