//! Docstring resolution for plugin generators.
//! A docstring either comes from a user-specified file or is recovered from
//! the module plugforge generated on a previous run.

use crate::definition::expand_path;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Resolves the raw docstring text for a plugin.
///
/// An explicit path always wins. Without one, the module previously
/// generated at `module_path` is read and its embedded docstring extracted.
///
/// # Errors
/// * `Error::DocstringFileMissing` if an explicit path does not exist
/// * `Error::DocstringNotResolvable` if no explicit path was given and no
///   previously generated module exists (or it carries no docstring)
pub fn resolve(
    explicit: Option<&str>,
    module_path: &Path,
    plugin_name: &str,
) -> Result<String> {
    if let Some(raw_path) = explicit {
        let path = expand_path(raw_path);
        if !path.is_file() {
            return Err(Error::DocstringFileMissing { path: path.display().to_string() });
        }
        debug!("reading docstring from {}", path.display());
        return Ok(fs::read_to_string(path)?);
    }

    if module_path.is_file() {
        debug!("recovering docstring from existing module {}", module_path.display());
        let source = fs::read_to_string(module_path)?;
        if let Some(docstring) = extract_documentation(&source) {
            return Ok(docstring);
        }
    }

    Err(Error::DocstringNotResolvable { plugin: plugin_name.to_string() })
}

/// Extracts the docstring embedded in a generated module.
///
/// This is a narrow, versioned contract, not a general source parser: the
/// module must carry a top-level `DOCUMENTATION = """..."""` assignment
/// (an optional `r` string prefix is accepted). The literal's value is
/// returned with surrounding whitespace stripped.
pub fn extract_documentation(source: &str) -> Option<String> {
    const MARKER: &str = "DOCUMENTATION";
    let mut offset = 0;
    while let Some(found) = source[offset..].find(MARKER) {
        let at = offset + found;
        offset = at + MARKER.len();
        // the assignment must start a line
        if at != 0 && source.as_bytes()[at - 1] != b'\n' {
            continue;
        }
        let tail = source[at + MARKER.len()..].trim_start_matches([' ', '\t']);
        let Some(tail) = tail.strip_prefix('=') else { continue };
        let tail = tail.trim_start_matches([' ', '\t']);
        let tail = tail.strip_prefix('r').unwrap_or(tail);
        let Some(body) = tail.strip_prefix("\"\"\"") else { continue };
        let end = body.find("\"\"\"")?;
        return Some(body[..end].trim().to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_documentation() {
        let source = "import os\nDOCUMENTATION = \"\"\"\nmodule: eos_interfaces\noptions: {}\n\"\"\"\n";
        assert_eq!(
            extract_documentation(source).unwrap(),
            "module: eos_interfaces\noptions: {}"
        );
    }

    #[test]
    fn test_extract_documentation_raw_literal() {
        let source = "DOCUMENTATION = r\"\"\"doc body\"\"\"\n";
        assert_eq!(extract_documentation(source).unwrap(), "doc body");
    }

    #[test]
    fn test_extract_requires_line_start() {
        let source = "x = 'DOCUMENTATION = \"\"\"nope\"\"\"'\n";
        assert_eq!(extract_documentation(source), None);
    }

    #[test]
    fn test_extract_missing_assignment() {
        assert_eq!(extract_documentation("print('hello')\n"), None);
    }
}
