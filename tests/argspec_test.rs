use plugforge::argspec::{render, translate};
use plugforge::error::Error;
use serde_yaml::Value;

fn keys(mapping: &serde_yaml::Mapping) -> Vec<&str> {
    mapping.iter().filter_map(|(k, _)| k.as_str()).collect()
}

#[test]
fn test_unknown_keys_dropped_and_order_preserved() {
    let docstring = r#"
options:
  name:
    type: str
    required: true
    elements: str
    bogus_key: 1
"#;
    let spec = translate(docstring).unwrap();
    let node = spec.argument_spec.get("name").unwrap().as_mapping().unwrap();
    assert_eq!(keys(node), vec!["type", "required", "elements"]);
    assert!(node.get("bogus_key").is_none());
}

#[test]
fn test_option_order_is_insertion_order() {
    let docstring = r#"
options:
  zebra:
    type: str
  alpha:
    type: int
  middle:
    type: bool
"#;
    let spec = translate(docstring).unwrap();
    assert_eq!(keys(&spec.argument_spec), vec!["zebra", "alpha", "middle"]);
}

#[test]
fn test_suboptions_become_nested_options() {
    let docstring = r#"
options:
  a:
    type: dict
    suboptions:
      b:
        type: str
"#;
    let spec = translate(docstring).unwrap();
    let a = spec.argument_spec.get("a").unwrap().as_mapping().unwrap();
    assert_eq!(a.get("type").unwrap().as_str(), Some("dict"));
    let nested = a.get("options").unwrap().as_mapping().unwrap();
    let b = nested.get("b").unwrap().as_mapping().unwrap();
    assert_eq!(b.get("type").unwrap().as_str(), Some("str"));
    assert!(a.get("suboptions").is_none());
}

#[test]
fn test_deeply_nested_suboptions() {
    let docstring = r#"
options:
  config:
    type: list
    elements: dict
    suboptions:
      vlans:
        type: list
        suboptions:
          vlan_id:
            type: int
            required: true
"#;
    let spec = translate(docstring).unwrap();
    let config = spec.argument_spec.get("config").unwrap().as_mapping().unwrap();
    let vlans = config
        .get("options")
        .unwrap()
        .as_mapping()
        .unwrap()
        .get("vlans")
        .unwrap()
        .as_mapping()
        .unwrap();
    let vlan_id = vlans
        .get("options")
        .unwrap()
        .as_mapping()
        .unwrap()
        .get("vlan_id")
        .unwrap()
        .as_mapping()
        .unwrap();
    assert_eq!(vlan_id.get("required").unwrap().as_bool(), Some(true));
}

#[test]
fn test_missing_options_yields_empty_tree() {
    let spec = translate("short_description: no options here\n").unwrap();
    assert!(spec.argument_spec.is_empty());
    // the envelope still carries an argument_spec entry
    assert!(spec.envelope.get("argument_spec").is_some());
}

#[test]
fn test_undocumented_option_still_emitted() {
    let docstring = r#"
options:
  mystery:
    description: only prose, no metadata
"#;
    let spec = translate(docstring).unwrap();
    let node = spec.argument_spec.get("mystery").unwrap().as_mapping().unwrap();
    assert!(node.is_empty());
}

#[test]
fn test_envelope_top_level_allow_list() {
    let docstring = r#"
short_description: not a module arg
supports_check_mode: true
required_one_of:
  - [config, state]
options:
  config:
    type: dict
"#;
    let spec = translate(docstring).unwrap();
    assert_eq!(spec.envelope.get("supports_check_mode").unwrap().as_bool(), Some(true));
    assert!(spec.envelope.get("required_one_of").is_some());
    assert!(spec.envelope.get("short_description").is_none());
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let result = translate("options: [unclosed");
    assert!(matches!(result, Err(Error::InvalidDocstringYaml(_))));
}

#[test]
fn test_render_is_deterministic() {
    let docstring = r#"
options:
  name:
    type: str
    required: true
"#;
    let spec = translate(docstring).unwrap();
    let first = render(&spec);
    let second = render(&translate(docstring).unwrap());
    assert_eq!(first, second);
    assert!(first.contains("\"required\": True"));
}

#[test]
fn test_conditionals_copied_verbatim() {
    let docstring = r#"
options:
  config:
    type: dict
    mutually_exclusive:
      - [a, b]
"#;
    let spec = translate(docstring).unwrap();
    let config = spec.argument_spec.get("config").unwrap().as_mapping().unwrap();
    let pairs = config.get("mutually_exclusive").unwrap();
    assert!(matches!(pairs, Value::Sequence(_)));
}
