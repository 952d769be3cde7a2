//! Status-tagged progress reporting.
//! Messages are informational only and not part of any contract surface.

const HEADER_COLOR: &str = "\x1b[94m";
const WARNING_COLOR: &str = "\x1b[93m";
const RESET: &str = "\x1b[0m";

/// Tag describing how a progress message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Header,
    Normal,
    Warning,
}

/// Prints a status-tagged progress line.
///
/// Headers and normal progress go to stdout, warnings to stderr.
pub fn report(status: Status, message: &str) {
    match status {
        Status::Header => println!("{HEADER_COLOR}{message}{RESET}"),
        Status::Normal => println!("{message}"),
        Status::Warning => eprintln!("{WARNING_COLOR}{message}{RESET}"),
    }
}
