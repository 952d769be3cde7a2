//! Error handling for the plugforge application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for plugforge operations.
///
/// Every variant is fatal to the run: nothing is retried and nothing is
/// downgraded to a warning. Messages produced from an underlying cause keep
/// that cause's text so the user sees both diagnostics.
#[derive(Error, Debug)]
pub enum Error {
    /// The content definition file could not be found
    #[error("Could not detect the content definition file at '{path}'. Use -f to specify a different location for it.")]
    DefinitionMissing { path: String },

    /// The content definition file exists but is not parseable YAML
    #[error("Error occurred while parsing the content definition file:\n{0}")]
    DefinitionParse(String),

    /// The bundled schema itself failed to load or compile
    #[error("Schema error: {0}.")]
    Schema(String),

    /// The content definition violates the bundled schema; carries every
    /// violation found, not just the first
    #[error("The following errors were found while validating '{path}':\n\n{}", .errors.join("\n"))]
    SchemaValidation { path: String, errors: Vec<String> },

    /// An explicitly configured docstring file does not exist
    #[error("Could not detect the specified docstring file '{path}'.")]
    DocstringFileMissing { path: String },

    /// Neither a docstring path nor a previously generated module was found
    #[error("Unable to load docstring for plugin '{plugin}'.\nPath to a docstring not provided and plugin file does not already exist.")]
    DocstringNotResolvable { plugin: String },

    /// The resolved docstring is not parseable YAML
    #[error("Error occurred while parsing the docstring as YAML:\n{0}")]
    InvalidDocstringYaml(String),

    /// A generator asked for a template container that is not bundled
    #[error("Unknown template container '{name}'.")]
    UnknownContainer { name: String },

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    Template(#[from] minijinja::Error),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    Io(#[from] io::Error),
}

/// Convenience type alias for Results with plugforge's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
