use thiserror::Error;

use crate::model::{AttributeScope, AttributeType};

/// Result type for table construction.
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised while validating or loading a classification table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TableError {
	/// A descriptor has an empty name.
	#[error("descriptor name must not be empty")]
	EmptyName,

	/// The same tag name is declared twice.
	#[error("element '{0}' is declared more than once")]
	DuplicateElement(String),

	/// The same `(name, scope)` pair is declared twice.
	#[error("attribute '{name}' is declared more than once for scope {scope}")]
	DuplicateAttribute { name: String, scope: AttributeScope },

	/// An ENUM attribute without permitted values.
	#[error("enumerated attribute '{name}' ({scope}) declares no values")]
	MissingEnumValues { name: String, scope: AttributeScope },

	/// A non-ENUM attribute that lists enumerated values.
	#[error("attribute '{name}' ({scope}) has type {value_type} but declares enumerated values")]
	UnexpectedEnumValues {
		name: String,
		scope: AttributeScope,
		value_type: AttributeType,
	},

	/// The table file could not be deserialized.
	#[error("failed to parse {format} table: {message}")]
	Parse {
		format: &'static str,
		message: String,
	},
}
