//! Common constants used throughout the plugforge application.

/// Default content definition file name
pub const DEFINITION_FILE: &str = "content.yaml";

/// Environment variable overriding the bundled template container root
pub const TEMPLATES_ENV_VAR: &str = "PLUGFORGE_TEMPLATES";

/// Option metadata keys copied verbatim from a docstring option into the
/// generated argument spec. Anything else is dropped.
pub const OPTION_METADATA: [&str; 11] = [
    "type",
    "elements",
    "default",
    "choices",
    "required",
    "aliases",
    "no_log",
    "fallback",
    "apply_defaults",
    "deprecated_aliases",
    "removed_in_version",
];

/// Option conditional keys, also copied verbatim into the argument spec
pub const OPTION_CONDITIONALS: [&str; 5] = [
    "mutually_exclusive",
    "required_one_of",
    "required_together",
    "required_by",
    "required_if",
];

/// Top-level docstring keys allowed into the module spec envelope
pub const VALID_MODULE_ARGS: [&str; 10] = [
    "argument_spec",
    "mutually_exclusive",
    "required_one_of",
    "required_together",
    "required_by",
    "required_if",
    "bypass_checks",
    "no_log",
    "add_file_common_args",
    "supports_check_mode",
];
