use halcms_model::{is_empty_value, ContentNode, ContentWrite};
use halcms_types::NodeId;
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample_node() -> ContentNode {
    ContentNode::new(123, 456, "Home", "testType")
        .with_property("TestProperty1", "property value1")
        .with_property("testProperty2", "property value2")
}

// ── ContentNode ──────────────────────────────────────────────────

#[test]
fn new_node_has_no_template_and_empty_sort_order() {
    let node = ContentNode::new(1, NodeId::ROOT, "A", "page");
    assert_eq!(node.template_id, None);
    assert_eq!(node.sort_order, 0);
    assert!(node.properties.is_empty());
    assert!(node.is_root_level());
}

#[test]
fn property_lookup_ignores_case() {
    let node = sample_node();
    assert_eq!(node.property_str("testproperty1"), Some("property value1"));
    assert_eq!(node.property_str("TESTPROPERTY2"), Some("property value2"));
    assert_eq!(node.property("missing"), None);
}

#[test]
fn properties_keep_insertion_order() {
    let node = ContentNode::new(1, 2, "A", "page")
        .with_property("zeta", 1)
        .with_property("alpha", 2)
        .with_property("mid", 3);
    let keys: Vec<&str> = node.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn node_serializes_camel_case() {
    let node = sample_node().with_template(9);
    let value = serde_json::to_value(&node).unwrap();
    assert_eq!(value["parentId"], json!(456));
    assert_eq!(value["contentTypeAlias"], json!("testType"));
    assert_eq!(value["templateId"], json!(9));
}

#[test]
fn node_json_roundtrip_preserves_non_ascii() {
    let node = ContentNode::new(5, -1, "Åbningstider", "page")
        .with_property("title", "Grüße aus Köln")
        .with_property("body", "日本語のテキスト");
    let json = serde_json::to_string(&node).unwrap();
    let back: ContentNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, node);
}

// ── is_empty_value ───────────────────────────────────────────────

#[test]
fn empty_values() {
    assert!(is_empty_value(&json!(null)));
    assert!(is_empty_value(&json!("")));
    assert!(is_empty_value(&json!("   ")));
    assert!(is_empty_value(&json!([])));
    assert!(is_empty_value(&json!({})));
}

#[test]
fn non_empty_values() {
    assert!(!is_empty_value(&json!("x")));
    assert!(!is_empty_value(&json!(0)));
    assert!(!is_empty_value(&json!(false)));
    assert!(!is_empty_value(&json!([1])));
    assert!(!is_empty_value(&json!({"a": 1})));
}

// ── ContentWrite ─────────────────────────────────────────────────

#[test]
fn write_payload_decodes_from_wire() {
    let payload: ContentWrite = serde_json::from_str(
        r#"{
            "contentTypeAlias": "testType",
            "parentId": 456,
            "templateId": 9,
            "name": "Home",
            "properties": {
                "TestProperty1": "property value1",
                "testProperty2": "property value2"
            }
        }"#,
    )
    .unwrap();

    assert_eq!(payload.name, "Home");
    assert_eq!(payload.content_type_alias, "testType");
    assert_eq!(payload.parent_id, NodeId::new(456));
    assert_eq!(payload.template_id, Some(9));
    let keys: Vec<&str> = payload.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["TestProperty1", "testProperty2"]);
}

#[test]
fn write_payload_missing_fields_default() {
    let payload: ContentWrite = serde_json::from_str(r#"{"name": null}"#).unwrap();
    assert_eq!(payload.name, "");
    assert_eq!(payload.content_type_alias, "");
    assert!(payload.parent_id.is_root());
    assert_eq!(payload.template_id, None);
    assert!(payload.properties.is_empty());
}

#[test]
fn write_builder() {
    let payload = ContentWrite::new("Home", "page")
        .under(10)
        .with_template(3)
        .with_property("title", "Hi");
    assert_eq!(payload.parent_id, NodeId::new(10));
    assert_eq!(payload.template_id, Some(3));
    assert_eq!(payload.properties["title"], json!("Hi"));
}
