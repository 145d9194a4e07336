//! # htmlgen
//!
//! Table-driven generator for a type-safe HTML builder vocabulary.
//!
//! A curated table classifies every HTML element (content categories, display
//! type, element type, valid parent contexts) and every attribute (value type,
//! scope, permitted values). From these tables `htmlgen` derives one family of
//! factory functions per element and per attribute, disambiguates attribute
//! names registered under several scopes, and emits formatted Rust source.
//!
//! ## Crates
//!
//! - [`spec`] - classification enums, descriptors, built-in tables and
//!   name-keyed metadata lookups
//! - [`codegen`] - accessor planning and Rust source emission
//!
//! The `htmlgen` binary (crate `htmlgen-cli`) drives both from the command line.
//!
//! ## Quick Example
//!
//! ```
//! use htmlgen::prelude::*;
//!
//! let elements = ElementTable::builtin();
//! let attributes = AttributeTable::builtin();
//!
//! let plan = Generator::new(&elements, &attributes).generate()?;
//! assert_eq!(plan.element_overloads("div").count(), 4);
//! assert_eq!(plan.element_overloads("br").count(), 2);
//!
//! let output = RustEmitter::new(GeneratorConfig::default()).emit(&plan)?;
//! assert!(output.file("elements.rs").is_some());
//! # Ok::<(), CodegenError>(())
//! ```

pub use htmlgen_codegen as codegen;
pub use htmlgen_spec as spec;

/// Commonly used types.
pub mod prelude {
	pub use htmlgen_codegen::{
		Accessor, CodegenError, GeneratedOutput, GenerationPlan, Generator, GeneratorConfig,
		RustEmitter,
	};
	pub use htmlgen_spec::{
		AttributeDescriptor, AttributeScope, AttributeTable, AttributeType, ContentCategory,
		Context, DisplayType, ElementDescriptor, ElementTable, ElementType, TableError,
	};
}

#[cfg(test)]
mod tests {
	use super::prelude::*;
	use super::spec;
	use rstest::rstest;

	#[rstest]
	fn test_facade_lookups() {
		assert_eq!(spec::display_type_of("div"), Some(DisplayType::Block));
		assert_eq!(spec::element_type_of("img"), Some(ElementType::Void));
		assert!(spec::content_categories_of("blink").is_empty());
	}
}
