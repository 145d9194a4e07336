//! Classification model for the `htmlgen` HTML vocabulary.
//!
//! This crate holds the hand-curated knowledge that drives code generation:
//!
//! - [`model`] - closed classification enums (content category, display type,
//!   element type, parent context, attribute category/type/scope)
//! - [`descriptor`] - element and attribute descriptors and their `const fn`
//!   constructors
//! - [`tables`] - the built-in element and attribute tables
//! - [`table`] - validated table containers, including tables loaded from
//!   JSON or TOML
//! - [`metadata`] - run-time lookups keyed by element or attribute name
//!
//! ## Example
//!
//! ```
//! use htmlgen_spec::{DisplayType, display_type_of};
//!
//! assert_eq!(display_type_of("span"), Some(DisplayType::Inline));
//! assert_eq!(display_type_of("not-an-element"), None);
//! ```

pub mod descriptor;
pub mod error;
pub mod metadata;
pub mod model;
pub mod table;
pub mod tables;

pub use descriptor::{
	AttributeDescriptor, ElementDescriptor, EnumValues, attribute, element, enum_attribute,
};
pub use error::{TableError, TableResult};
pub use metadata::{
	MetadataIndex, attribute_of, attribute_scopes_of, content_categories_of, display_type_of,
	element_type_of, valid_contexts_of,
};
pub use model::{
	AttributeCategory, AttributeScope, AttributeType, ContentCategory, Context, DisplayType,
	ElementType,
};
pub use table::{AttributeTable, ElementTable};
