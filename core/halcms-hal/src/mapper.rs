//! Node → resource mapping.

use halcms_model::{aliases_match, ContentNode, ContentTypeDefinition, PropertyBag};
use serde_json::{json, Map, Value};

use crate::links::{rels, LinkTemplate};
use crate::paging::PagedCollectionBuilder;
use crate::resource::{Link, Resource};

/// Reorders `properties` to the schema's declared order and casing.
///
/// Keys are matched case-insensitively. Keys the schema does not declare are
/// appended afterwards in their original order. A key differing only in case
/// from one already emitted is dropped, first occurrence wins. Without a
/// schema the bag is returned as is.
pub fn order_properties(
    properties: &PropertyBag,
    schema: Option<&ContentTypeDefinition>,
) -> PropertyBag {
    let Some(schema) = schema else {
        return properties.clone();
    };
    let mut used = vec![false; properties.len()];
    let mut ordered = PropertyBag::with_capacity(properties.len());
    for definition in &schema.properties {
        let found = properties
            .iter()
            .enumerate()
            .find(|(i, (key, _))| !used[*i] && aliases_match(key, &definition.alias));
        if let Some((i, (_, value))) = found {
            used[i] = true;
            ordered.insert(definition.alias.clone(), value.clone());
        }
    }
    for (i, (key, value)) in properties.iter().enumerate() {
        if !used[i] && !ordered.keys().any(|k| aliases_match(k, key)) {
            ordered.insert(key.clone(), value.clone());
        }
    }
    ordered
}

/// Maps nodes of one resource kind into HAL resources.
#[derive(Debug, Clone)]
pub struct ResourceMapper {
    links: LinkTemplate,
}

impl ResourceMapper {
    pub fn new(links: LinkTemplate) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &LinkTemplate {
        &self.links
    }

    /// A single node.
    ///
    /// `children` is always present; `has_children` only feeds the
    /// `hasChildren` state field.
    pub fn map_node(
        &self,
        node: &ContentNode,
        has_children: bool,
        schema: Option<&ContentTypeDefinition>,
    ) -> Resource {
        let mut resource = Resource::new()
            .with_state("id", node.id.get())
            .with_state("name", node.name.clone())
            .with_state("parentId", node.parent_id.get())
            .with_state("contentTypeAlias", node.content_type_alias.clone());
        if let Some(template_id) = node.template_id {
            resource.set_state("templateId", template_id);
        }
        resource.set_state("sortOrder", node.sort_order);
        resource.set_state("hasChildren", has_children);

        for (rel, link) in self.links.resolve(Some(node.id), Some(node.parent_id)) {
            resource.set_link(rel, link);
        }
        resource.with_properties(order_properties(&node.properties, schema))
    }

    /// Unpaged listing whose `self` is `self_href`.
    pub fn map_collection(&self, items: Vec<Resource>, self_href: impl Into<String>) -> Resource {
        let item_links: Vec<Link> = items
            .iter()
            .filter_map(|item| item.link(rels::SELF).cloned())
            .collect();
        let mut envelope = Resource::new()
            .with_state("totalResults", items.len() as i64)
            .with_link(rels::ROOT, self.links.root())
            .with_link(rels::SELF, Link::new(self_href));
        envelope.set_links(rels::CONTENT, item_links);
        envelope.embed(rels::CONTENT, items);
        envelope
    }

    /// A paged collection builder rooted at this kind.
    pub fn paged(&self, href: impl Into<String>) -> PagedCollectionBuilder {
        PagedCollectionBuilder::new(self.links.root(), href)
    }

    /// Describes the fields a node's content type declares.
    pub fn map_metadata(
        &self,
        node: &ContentNode,
        schema: Option<&ContentTypeDefinition>,
    ) -> Resource {
        let mut fields = Map::new();
        for definition in schema.map(|s| s.properties.as_slice()).unwrap_or(&[]) {
            fields.insert(
                definition.alias.clone(),
                json!({
                    "label": definition.label.as_deref().unwrap_or(&definition.alias),
                    "description": definition.description,
                    "editorAlias": definition.editor_alias,
                    "required": definition.required,
                }),
            );
        }
        Resource::new()
            .with_state("id", node.id.get())
            .with_state("contentTypeAlias", node.content_type_alias.clone())
            .with_state("fields", Value::Object(fields))
            .with_link(rels::SELF, self.links.meta(Some(node.id)))
            .with_link(rels::ROOT, self.links.root())
            .with_link(rels::CONTENT, self.links.self_link(Some(node.id)))
    }
}
