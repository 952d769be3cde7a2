//! Content definition handling for plugforge.
//! This module provides the typed model of the YAML content definition file
//! and the loading logic that turns a file path into an in-memory document.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Target collection a definition scaffolds into.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    pub namespace: String,
    pub name: String,
    pub path: String,
}

/// Closed set of plugin kinds recognized by the definition schema.
///
/// `action`, `filter`, `cache` and `test` are recognized but intentionally
/// unimplemented; the dispatch loop skips them silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginType {
    ModuleNetworkCli,
    ModuleNetworkNetconf,
    Action,
    Filter,
    Cache,
    Test,
}

impl PluginType {
    /// Whether a generator exists for this plugin kind.
    pub fn is_implemented(&self) -> bool {
        matches!(self, PluginType::ModuleNetworkCli | PluginType::ModuleNetworkNetconf)
    }
}

impl fmt::Display for PluginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PluginType::ModuleNetworkCli => "module_network_cli",
            PluginType::ModuleNetworkNetconf => "module_network_netconf",
            PluginType::Action => "action",
            PluginType::Filter => "filter",
            PluginType::Cache => "cache",
            PluginType::Test => "test",
        };
        write!(f, "{name}")
    }
}

/// One plugin entry from the definition file.
///
/// Type-specific fields beyond this shared contract are ignored here and
/// validated by the schema instead.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub plugin_type: PluginType,
    /// Optional path to a docstring file; when absent the docstring is
    /// extracted from a previously generated module
    #[serde(default)]
    pub docstring: Option<String>,
    /// Type-specific fields, kept in definition order and merged verbatim
    /// into the generator's template context
    #[serde(flatten, default)]
    pub extra: IndexMap<String, serde_json::Value>,
}

/// Top-level parsed content definition.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentDefinition {
    pub collection: Collection,
    #[serde(default)]
    pub plugins: Vec<PluginSpec>,
}

/// Expands environment variables (`$VAR` and `${VAR}`) in a string.
/// Unset variables are left untouched.
fn expand_vars(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if ch != '$' {
            out.push(ch);
            continue;
        }
        let rest = &input[idx + 1..];
        let (name, consumed) = if let Some(stripped) = rest.strip_prefix('{') {
            match stripped.find('}') {
                Some(end) => (&stripped[..end], end + 2),
                None => ("", 0),
            }
        } else {
            let end = rest
                .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                .unwrap_or(rest.len());
            (&rest[..end], end)
        };
        match std::env::var(name) {
            Ok(value) if !name.is_empty() => {
                out.push_str(&value);
                for _ in 0..consumed {
                    chars.next();
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Expands environment variables and a leading `~` in a path string.
pub fn expand_path(input: &str) -> PathBuf {
    let expanded = expand_vars(input);
    if let Some(rest) = expanded.strip_prefix('~') {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(format!("{home}{rest}"));
        }
    }
    PathBuf::from(expanded)
}

/// Loads the content definition file as a raw YAML document.
///
/// The raw document is validated against the bundled schema before it is
/// deserialized into [`ContentDefinition`], so schema violations are
/// reported instead of serde's first type mismatch.
///
/// # Errors
/// * `Error::DefinitionMissing` if the file does not exist
/// * `Error::DefinitionParse` if the file is not parseable YAML
pub fn load_definition(path: &Path) -> Result<serde_json::Value> {
    if !path.is_file() {
        return Err(Error::DefinitionMissing { path: path.display().to_string() });
    }
    debug!("loading content definition from {}", path.display());
    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| Error::DefinitionParse(e.to_string()))
}

/// Deserializes a schema-validated raw document into the typed model.
pub fn parse_definition(raw: &serde_json::Value) -> Result<ContentDefinition> {
    serde_json::from_value(raw.clone()).map_err(|e| Error::DefinitionParse(e.to_string()))
}
