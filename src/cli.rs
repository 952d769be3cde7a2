//! Command-line interface implementation for plugforge.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::constants::DEFINITION_FILE;

/// Command-line arguments structure for plugforge.
#[derive(Parser, Debug)]
#[command(author, version, about = "plugforge: declarative plugin scaffolding for content collections", long_about = None)]
pub struct Args {
    /// Path to the content definition file
    #[arg(short, long, value_name = "FILE", default_value = DEFINITION_FILE)]
    pub file: PathBuf,

    /// Directory containing the bundled template containers.
    /// Defaults to the crate's templates directory (or $PLUGFORGE_TEMPLATES).
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
