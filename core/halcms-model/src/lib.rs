//! Core node model for halcms.
//!
//! Defines the types every layer of the API depends on:
//! - [`ContentNode`]: a node owned by the persistence service (id, parent,
//!   content type, ordered property bag)
//! - [`ContentTypeDefinition`]: the schema a node's properties are checked
//!   against, with its ordered [`PropertyDefinition`]s
//! - [`ContentWrite`]: the payload of a create or update request
//! - [`PropertyEditor`] / [`EditorRegistry`]: pluggable per-property
//!   validation, injected rather than discovered
//!
//! Property bags are insertion-ordered alias → JSON value maps. Alias matching
//! against a schema is case-insensitive; the schema decides the casing and
//! order used on the wire.

mod content_type;
mod editor;
mod node;
mod write;

pub use content_type::{aliases_match, ContentTypeDefinition, PropertyDefinition};
pub use editor::{
    BooleanEditor, EditorRegistry, IntegerEditor, PropertyEditor, PropertyViolation,
    TextboxEditor,
};
pub use node::{is_empty_value, ContentNode, PropertyBag};
pub use write::ContentWrite;
