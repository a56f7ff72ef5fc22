use halcms_types::NodeId;
use proptest::prelude::*;
use std::collections::HashSet;
use std::str::FromStr;

// ── NodeId ────────────────────────────────────────────────────────

#[test]
fn root_sentinel_is_minus_one() {
    assert_eq!(NodeId::ROOT.get(), -1);
    assert!(NodeId::ROOT.is_root());
    assert!(NodeId::new(-1).is_root());
}

#[test]
fn regular_ids_are_not_root() {
    assert!(!NodeId::new(0).is_root());
    assert!(!NodeId::new(123).is_root());
}

#[test]
fn default_is_root() {
    assert_eq!(NodeId::default(), NodeId::ROOT);
}

#[test]
fn display_and_parse() {
    let id = NodeId::new(456);
    assert_eq!(id.to_string(), "456");
    assert_eq!(NodeId::parse("456").unwrap(), id);
    assert_eq!(NodeId::from_str(" 456 ").unwrap(), id);
}

#[test]
fn parse_invalid() {
    assert!(NodeId::parse("abc").is_err());
    assert!(NodeId::parse("").is_err());
    assert!(NodeId::parse("1.5").is_err());
}

#[test]
fn serde_is_transparent() {
    let id = NodeId::new(789);
    assert_eq!(serde_json::to_string(&id).unwrap(), "789");
    let back: NodeId = serde_json::from_str("-1").unwrap();
    assert!(back.is_root());
}

#[test]
fn hashable() {
    let mut set = HashSet::new();
    set.insert(NodeId::new(1));
    set.insert(NodeId::new(1));
    set.insert(NodeId::new(2));
    assert_eq!(set.len(), 2);
}

proptest! {
    #[test]
    fn display_parse_roundtrip(raw in any::<i32>()) {
        let id = NodeId::new(raw);
        prop_assert_eq!(NodeId::parse(&id.to_string()).unwrap(), id);
    }
}
