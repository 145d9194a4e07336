//! Accessor planning and Rust source emission for `htmlgen`.
//!
//! Generation runs in two stages:
//!
//! 1. [`Generator`] walks an element table and an attribute table and builds a
//!    [`GenerationPlan`]: every factory function as an abstract [`Accessor`]
//!    plus the element metadata maps. Attribute names registered under more
//!    than one scope are disambiguated by [`ConflictResolver`].
//! 2. [`RustEmitter`] renders the plan as formatted Rust source files.
//!
//! ## Example
//!
//! ```
//! use htmlgen_codegen::{Generator, GeneratorConfig, RustEmitter};
//! use htmlgen_spec::{AttributeTable, ElementTable};
//!
//! let elements = ElementTable::builtin();
//! let attributes = AttributeTable::builtin();
//!
//! let plan = Generator::new(&elements, &attributes).generate()?;
//! assert_eq!(plan.conflicting_names, ["size", "type"]);
//!
//! let output = RustEmitter::new(GeneratorConfig::default()).emit(&plan)?;
//! assert_eq!(output.files.len(), 4);
//! # Ok::<(), htmlgen_codegen::CodegenError>(())
//! ```

pub mod attributes;
pub mod config;
pub mod conflict;
pub mod elements;
pub mod emit;
pub mod error;
pub mod ir;
pub mod metadata;
pub mod naming;
pub mod plan;

pub use config::{CliArgs, ConfigError, EmitConfig, GeneratorConfig, OutputConfig, TablesConfig};
pub use conflict::{ConflictResolver, ResolvedName};
pub use emit::{GeneratedFile, GeneratedOutput, RustEmitter, rust_function_names};
pub use error::{CodegenError, Result};
pub use ir::{
	Accessor, Arg, AttributeKind, Body, Constructor, Param, ParamKind, ReturnKind, Signature, Source,
};
pub use metadata::{MetadataKind, MetadataMap, MetadataValue};
pub use naming::{resolve_identifier, to_identifier};
pub use plan::{GenerationPlan, Generator};
