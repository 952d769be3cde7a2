//! Schema validation for the content definition file.
//! The schema is bundled with the binary and treated as read-only; every
//! violation found is reported, not just the first.

use crate::error::{Error, Result};
use log::debug;

/// Bundled draft-07 schema for the content definition
static CONTENT_SCHEMA: &str = include_str!("../schemas/content.json");

/// Validates a raw content definition against the bundled schema.
///
/// # Returns
/// * `Result<Vec<String>>` - one human-readable message per violation;
///   an empty vector means the document is valid
///
/// # Errors
/// * `Error::Schema` if the bundled schema itself fails to load or compile
pub fn validate(data: &serde_json::Value) -> Result<Vec<String>> {
    let schema: serde_json::Value = serde_json::from_str(CONTENT_SCHEMA)
        .map_err(|e| Error::Schema(format!("bundled content schema is not valid JSON: {e}")))?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| Error::Schema(format!("bundled content schema did not compile: {e}")))?;

    let errors: Vec<String> = validator
        .iter_errors(data)
        .map(|error| format!("in '{}': {}", error.instance_path(), error))
        .collect();
    debug!("schema validation found {} error(s)", errors.len());
    Ok(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_definition() -> serde_json::Value {
        json!({
            "collection": {
                "namespace": "acme",
                "name": "clos",
                "path": "/tmp/collections"
            },
            "plugins": [
                {"name": "interfaces", "type": "module_network_cli"}
            ]
        })
    }

    #[test]
    fn test_valid_definition_passes() {
        assert!(validate(&valid_definition()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_collection_name_reported() {
        let mut definition = valid_definition();
        definition["collection"].as_object_mut().unwrap().remove("name");
        let errors = validate(&definition).unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("name"));
    }

    #[test]
    fn test_all_violations_reported() {
        let definition = json!({
            "collection": {"namespace": "acme"},
            "plugins": [{"name": "interfaces"}]
        });
        let errors = validate(&definition).unwrap();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_unknown_plugin_type_rejected() {
        let mut definition = valid_definition();
        definition["plugins"][0]["type"] = json!("lookup");
        let errors = validate(&definition).unwrap();
        assert_eq!(errors.len(), 1);
    }
}
