use thiserror::Error;

/// Result type for code generation.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors raised while planning or emitting generated code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodegenError {
	/// A table name cannot be folded into an identifier.
	#[error("cannot derive an identifier from '{raw}': {reason}")]
	UnresolvableIdentifier { raw: String, reason: &'static str },

	/// Two generated accessors share a name and parameter shape.
	#[error("duplicate accessor {accessor}: generated for {first} and for {second}")]
	DuplicateAccessor {
		accessor: String,
		first: String,
		second: String,
	},

	/// A configured module path is not a valid Rust path.
	#[error("invalid module path '{path}' for {setting}: {message}")]
	InvalidPath {
		setting: &'static str,
		path: String,
		message: String,
	},

	/// Generated tokens failed to parse as a Rust file.
	#[error("failed to format generated {file}: {message}")]
	Format { file: String, message: String },
}
