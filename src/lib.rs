//! plugforge scaffolds collection plugins from a declarative YAML content
//! definition. A definition names a target collection and a list of
//! plugins; each plugin's docstring is translated into a structured
//! argument spec and a set of template containers is rendered into the
//! collection tree.

/// Docstring to argument-spec translation
pub mod argspec;

/// Command-line interface module for the plugforge application
pub mod cli;

/// Common constants, including the option metadata vocabularies
pub mod constants;

/// Template container materialization with overwrite allow-list policy
pub mod container;

/// Content definition model and loading
pub mod definition;

/// Status-tagged progress reporting
pub mod display;

/// Docstring resolution from files or previously generated modules
pub mod docstring;

/// Error types and handling for the plugforge application
pub mod error;

/// Deterministic pretty-printing of argument-spec trees
pub mod format;

/// Template rendering behind the `TemplateRenderer` trait
pub mod renderer;

/// Schema validation of the content definition
pub mod schema;

/// Scaffolding orchestration and plugin generators
pub mod scaffolder;
