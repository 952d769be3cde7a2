//! plugforge's main application entry point.
//! Handles command-line argument parsing, logger setup, and delegates the
//! create run to the scaffolder.

use plugforge::{
    cli::{get_args, Args},
    container::default_template_root,
    error::{default_error_handler, Result},
    scaffolder,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the template container root
/// 2. Runs the create action against the content definition file
fn run(args: Args) -> Result<()> {
    let template_root = args.templates.unwrap_or_else(default_template_root);
    scaffolder::create(&args.file, template_root)
}
