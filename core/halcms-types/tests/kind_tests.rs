use halcms_types::{ApiVersion, ResourceKind};
use std::str::FromStr;

#[test]
fn segments() {
    assert_eq!(ResourceKind::Content.segment(), "content");
    assert_eq!(ResourceKind::Media.segment(), "media");
    assert_eq!(ResourceKind::PublishedContent.segment(), "content/published");
    assert_eq!(ResourceKind::Member.segment(), "members");
}

#[test]
fn published_content_is_read_only() {
    assert!(!ResourceKind::PublishedContent.is_writable());
    assert!(ResourceKind::Content.is_writable());
    assert!(ResourceKind::Media.is_writable());
    assert!(ResourceKind::Member.is_writable());
}

#[test]
fn parse_kinds() {
    assert_eq!(ResourceKind::from_str("media").unwrap(), ResourceKind::Media);
    assert_eq!(ResourceKind::from_str("MEDIA").unwrap(), ResourceKind::Media);
    assert_eq!(ResourceKind::from_str("published").unwrap(), ResourceKind::PublishedContent);
    assert_eq!(ResourceKind::from_str("members").unwrap(), ResourceKind::Member);
    assert!(ResourceKind::from_str("blob").is_err());
}

#[test]
fn display_roundtrips_through_parse() {
    for kind in ResourceKind::ALL {
        assert_eq!(ResourceKind::from_str(&kind.to_string()).unwrap(), kind);
    }
}

#[test]
fn api_version() {
    assert_eq!(ApiVersion::default(), ApiVersion::V1);
    assert_eq!(ApiVersion::V1.to_string(), "v1");
    assert_eq!(ApiVersion::new(2).unwrap().get(), 2);
    assert!(ApiVersion::new(0).is_err());
}
