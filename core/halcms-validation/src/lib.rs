//! Validation of content writes.
//!
//! [`ValidationPipeline`] runs four stages and collects every problem it
//! finds instead of stopping at the first:
//!
//! 1. structural: `contentTypeAlias` and `name` must be non-empty
//! 2. schema: the alias must resolve through the [`ContentTypeStore`]
//! 3. existence: every incoming property must be declared by the schema
//! 4. per-property: required checks, then the property editor's own checks
//!
//! Invalid input never produces an `Err`; only collaborator failures do.
//!
//! [`ContentTypeStore`]: halcms_storage::ContentTypeStore

mod error;
mod pipeline;

pub use error::{paths, ErrorCode, ValidationError};
pub use pipeline::{ValidationPipeline, ValidationReport};
