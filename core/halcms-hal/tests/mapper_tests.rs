use halcms_hal::{order_properties, rels, LinkTemplate, ResourceMapper, HAL_JSON};
use halcms_model::{ContentNode, ContentTypeDefinition, PropertyBag, PropertyDefinition};
use halcms_types::{ApiVersion, ResourceKind};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn mapper() -> ResourceMapper {
    ResourceMapper::new(LinkTemplate::new(ResourceKind::Media, ApiVersion::V1))
}

fn schema() -> ContentTypeDefinition {
    ContentTypeDefinition::new("testType")
        .with_property(PropertyDefinition::new("TestProperty1", "textbox").required())
        .with_property(
            PropertyDefinition::new("testProperty2", "textarea").with_label("Second"),
        )
}

// ── Single node ──────────────────────────────────────────────────

#[test]
fn sentinel_parent_maps_to_root_only() {
    let node = ContentNode::new(123, -1, "Top", "testType");
    let resource = mapper().map_node(&node, false, None);
    assert!(!resource.has_link(rels::PARENT));
    assert_eq!(
        resource.link(rels::ROOT).unwrap().href,
        "/umbraco/rest/v1/media"
    );
}

#[test]
fn node_links_and_state() {
    let node = ContentNode::new(123, 456, "Child", "testType").with_template(9);
    let resource = mapper().map_node(&node, true, None);
    assert_eq!(resource.link(rels::SELF).unwrap().href, "/umbraco/rest/v1/media/123");
    assert_eq!(resource.link(rels::PARENT).unwrap().href, "/umbraco/rest/v1/media/456");
    assert_eq!(resource.state("parentId"), Some(&json!(456)));
    assert_eq!(resource.state("templateId"), Some(&json!(9)));
    assert_eq!(resource.state("hasChildren"), Some(&json!(true)));
    let search = resource.link(rels::SEARCH).unwrap();
    assert!(search.templated);
    assert_eq!(search.href, "/umbraco/rest/v1/media/search{?pageIndex,pageSize,lucene}");
}

#[test]
fn children_link_is_templated_when_node_has_children() {
    let node = ContentNode::new(123, 456, "Child", "testType");
    let resource = mapper().map_node(&node, true, None);
    let children = resource.link(rels::CHILDREN).unwrap();
    assert!(children.templated);
    assert_eq!(
        children.href,
        "/umbraco/rest/v1/media/{id}/children{?pageIndex,pageSize}"
    );
}

#[test]
fn properties_follow_schema_order_and_casing() {
    let node = ContentNode::new(1, -1, "n", "testType")
        .with_property("extra", 5)
        .with_property("testproperty2", "two")
        .with_property("testProperty1", "one");
    let ordered = order_properties(&node.properties, Some(&schema()));
    assert_eq!(
        ordered.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["TestProperty1", "testProperty2", "extra"]
    );
    assert_eq!(ordered["TestProperty1"], json!("one"));
}

#[test]
fn case_variant_keys_are_emitted_once() {
    let mut bag = PropertyBag::new();
    bag.insert("testProperty1".into(), json!("first"));
    bag.insert("TESTPROPERTY1".into(), json!("second"));
    bag.insert("extra".into(), json!(1));
    bag.insert("Extra".into(), json!(2));
    let ordered = order_properties(&bag, Some(&schema()));
    assert_eq!(
        ordered.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["TestProperty1", "extra"]
    );
    assert_eq!(ordered["TestProperty1"], json!("first"));
    assert_eq!(ordered["extra"], json!(1));
}

#[test]
fn without_schema_properties_keep_storage_order() {
    let mut bag = PropertyBag::new();
    bag.insert("b".into(), json!(1));
    bag.insert("a".into(), json!(2));
    assert_eq!(order_properties(&bag, None), bag);
}

#[test]
fn non_ascii_values_round_trip_in_schema_order() {
    let node = ContentNode::new(7, -1, "Ærø", "testType")
        .with_property("testProperty2", "日本語のテキスト")
        .with_property("TestProperty1", "Grüße, 🌍");
    let resource = mapper().map_node(&node, false, Some(&schema()));

    let text = serde_json::to_string(&resource).unwrap();
    let back: Value = serde_json::from_str(&text).unwrap();
    let props = back["properties"].as_object().unwrap();
    assert_eq!(
        props.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["TestProperty1", "testProperty2"]
    );
    assert_eq!(props["TestProperty1"], json!("Grüße, 🌍"));
    assert_eq!(props["testProperty2"], json!("日本語のテキスト"));
    assert_eq!(back["name"], json!("Ærø"));
}

// ── Collections ──────────────────────────────────────────────────

#[test]
fn collection_envelope() {
    let m = mapper();
    let items = vec![
        m.map_node(&ContentNode::new(1, -1, "a", "t"), false, None),
        m.map_node(&ContentNode::new(2, -1, "b", "t"), false, None),
    ];
    let envelope = m.map_collection(items, m.links().root_href());
    let json = serde_json::to_value(&envelope).unwrap();

    assert_eq!(json["totalResults"], json!(2));
    assert_eq!(json["_links"]["root"]["href"], json!("/umbraco/rest/v1/media"));
    assert_eq!(json["_links"]["self"]["href"], json!("/umbraco/rest/v1/media"));
    assert_eq!(
        json["_links"]["content"],
        json!([
            {"href": "/umbraco/rest/v1/media/1"},
            {"href": "/umbraco/rest/v1/media/2"}
        ])
    );
    assert_eq!(json["_embedded"]["content"].as_array().unwrap().len(), 2);
}

#[test]
fn empty_collection_still_has_content_array() {
    let m = mapper();
    let json = serde_json::to_value(m.map_collection(Vec::new(), "/x")).unwrap();
    assert_eq!(json["totalResults"], json!(0));
    assert_eq!(json["_links"]["content"], json!([]));
}

// ── Metadata ─────────────────────────────────────────────────────

#[test]
fn metadata_lists_fields_in_schema_order() {
    let node = ContentNode::new(123, -1, "n", "testType");
    let meta = mapper().map_metadata(&node, Some(&schema()));
    let json = serde_json::to_value(&meta).unwrap();

    let fields = json["fields"].as_object().unwrap();
    assert_eq!(
        fields.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["TestProperty1", "testProperty2"]
    );
    assert_eq!(
        json["fields"]["TestProperty1"],
        json!({"label": "TestProperty1", "description": null, "editorAlias": "textbox", "required": true})
    );
    assert_eq!(json["fields"]["testProperty2"]["label"], json!("Second"));
    assert_eq!(json["_links"]["self"]["href"], json!("/umbraco/rest/v1/media/123/meta"));
    assert_eq!(json["_links"]["content"]["href"], json!("/umbraco/rest/v1/media/123"));
}

#[test]
fn media_type_constant() {
    assert_eq!(HAL_JSON, "application/hal+json");
}
