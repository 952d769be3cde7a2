//! Docstring to argument-spec translation.
//! Converts the `options` tree of a YAML docstring into the structured
//! argument specification embedded in generated modules. Only keys from the
//! fixed metadata and conditional vocabularies survive; everything else is
//! dropped by design.

use crate::constants::{OPTION_CONDITIONALS, OPTION_METADATA, VALID_MODULE_ARGS};
use crate::error::{Error, Result};
use serde_yaml::{Mapping, Value};

/// Structured argument specification derived from a docstring.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleSpec {
    /// The filtered, order-preserving option tree
    pub argument_spec: Mapping,
    /// The argument spec plus any allow-listed top-level docstring keys,
    /// copied verbatim
    pub envelope: Mapping,
}

fn is_option_key(key: &str) -> bool {
    OPTION_METADATA.contains(&key) || OPTION_CONDITIONALS.contains(&key)
}

/// Recursively builds the argument spec for one `options` mapping.
///
/// Each output node keeps the source mapping's insertion order. A
/// `suboptions` key becomes a nested `options` subtree at the position where
/// it appeared; unknown keys are dropped; an option with no recognized keys
/// still yields an empty node so "declared but undocumented" is detectable
/// downstream.
fn build_argument_spec(options: &Mapping) -> Mapping {
    let mut spec = Mapping::new();
    for (name, option) in options {
        let mut node = Mapping::new();
        if let Value::Mapping(metadata) = option {
            for (key, value) in metadata {
                let Some(key_name) = key.as_str() else { continue };
                if key_name == "suboptions" {
                    let nested = match value {
                        Value::Mapping(suboptions) => build_argument_spec(suboptions),
                        _ => Mapping::new(),
                    };
                    node.insert(Value::from("options"), Value::Mapping(nested));
                } else if is_option_key(key_name) {
                    node.insert(key.clone(), value.clone());
                }
            }
        }
        spec.insert(name.clone(), Value::Mapping(node));
    }
    spec
}

/// Translates a raw docstring into a [`ModuleSpec`].
///
/// A docstring without an `options` mapping yields an empty argument spec;
/// that is a valid no-argument plugin, not an error.
///
/// # Errors
/// * `Error::InvalidDocstringYaml` if the docstring is not parseable YAML
pub fn translate(docstring: &str) -> Result<ModuleSpec> {
    let doc_obj: Value = serde_yaml::from_str(docstring)
        .map_err(|e| Error::InvalidDocstringYaml(e.to_string()))?;

    let argument_spec = match doc_obj.get("options") {
        Some(Value::Mapping(options)) => build_argument_spec(options),
        _ => Mapping::new(),
    };

    let mut envelope = Mapping::new();
    envelope.insert(Value::from("argument_spec"), Value::Mapping(argument_spec.clone()));
    if let Value::Mapping(top) = &doc_obj {
        for (key, value) in top {
            let Some(key_name) = key.as_str() else { continue };
            if VALID_MODULE_ARGS.contains(&key_name) {
                envelope.insert(key.clone(), value.clone());
            }
        }
    }

    Ok(ModuleSpec { argument_spec, envelope })
}

/// Renders the argument spec as deterministic, source-embeddable text.
pub fn render(spec: &ModuleSpec) -> String {
    crate::format::format_value(&Value::Mapping(spec.argument_spec.clone()))
}
