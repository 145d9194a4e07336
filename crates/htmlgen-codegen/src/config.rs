//! Configuration for HTML vocabulary generation.
//!
//! Supports TOML configuration files and CLI argument overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for a generation run.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
	/// Output configuration
	pub output: OutputConfig,

	/// Emitted code configuration
	pub emit: EmitConfig,

	/// Table source configuration
	pub tables: TablesConfig,
}

impl GeneratorConfig {
	/// Set the output directory.
	pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.output.directory = dir.into();
		self
	}

	/// Set the module path of the runtime node/attribute types.
	pub fn with_runtime_path(mut self, path: &str) -> Self {
		self.emit.runtime_path = path.to_string();
		self
	}

	/// Set the crate path of the classification enums.
	pub fn with_spec_path(mut self, path: &str) -> Self {
		self.emit.spec_path = path.to_string();
		self
	}

	/// Load configuration from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if file cannot be read or parsed.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::IoError {
			path: path.as_ref().to_path_buf(),
			source: e,
		})?;

		Self::from_toml(&content)
	}

	/// Parse configuration from TOML string.
	pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
		toml::from_str(content).map_err(|e| ConfigError::ParseError {
			message: e.to_string(),
		})
	}

	/// Merge CLI arguments into configuration.
	///
	/// CLI arguments take precedence over config file values.
	pub fn merge_cli_args(&mut self, args: &CliArgs) {
		if let Some(ref dir) = args.output_dir {
			self.output.directory = dir.clone();
		}

		if let Some(ref path) = args.runtime_path {
			self.emit.runtime_path = path.clone();
		}

		if let Some(ref path) = args.elements {
			self.tables.elements = Some(path.clone());
		}

		if let Some(ref path) = args.attributes {
			self.tables.attributes = Some(path.clone());
		}
	}
}

/// Output configuration.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
	/// Output directory for generated files
	pub directory: PathBuf,
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			directory: PathBuf::from("src/dom/generated"),
		}
	}
}

/// Emitted code configuration.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
	/// Module path providing the runtime node and attribute types
	pub runtime_path: String,

	/// Crate path providing the classification enums
	pub spec_path: String,

	/// File stem of the element accessor module
	#[serde(default = "default_elements_module")]
	pub elements_module: String,

	/// File stem of the attribute accessor module
	#[serde(default = "default_attributes_module")]
	pub attributes_module: String,

	/// File stem of the metadata lookup module
	#[serde(default = "default_metadata_module")]
	pub metadata_module: String,

	/// Copy table descriptions into `///` docs
	pub include_docs: bool,
}

fn default_elements_module() -> String {
	"elements".to_string()
}

fn default_attributes_module() -> String {
	"attributes".to_string()
}

fn default_metadata_module() -> String {
	"metadata".to_string()
}

impl Default for EmitConfig {
	fn default() -> Self {
		Self {
			runtime_path: "crate::dom".to_string(),
			spec_path: "htmlgen_spec".to_string(),
			elements_module: default_elements_module(),
			attributes_module: default_attributes_module(),
			metadata_module: default_metadata_module(),
			include_docs: true,
		}
	}
}

/// Table source configuration. Unset paths select the built-in tables.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TablesConfig {
	/// Element table file (`.json` or `.toml`)
	pub elements: Option<PathBuf>,

	/// Attribute table file (`.json` or `.toml`)
	pub attributes: Option<PathBuf>,
}

/// CLI arguments for overriding configuration.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
	pub output_dir: Option<PathBuf>,
	pub runtime_path: Option<String>,
	pub elements: Option<PathBuf>,
	pub attributes: Option<PathBuf>,
	pub config_file: Option<PathBuf>,
	pub dry_run: bool,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("IO error reading {path}: {source}")]
	IoError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse configuration: {message}")]
	ParseError { message: String },
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_config() {
		let config = GeneratorConfig::default();

		assert_eq!(config.output.directory, PathBuf::from("src/dom/generated"));
		assert_eq!(config.emit.runtime_path, "crate::dom");
		assert_eq!(config.emit.spec_path, "htmlgen_spec");
		assert_eq!(config.emit.elements_module, "elements");
		assert!(config.emit.include_docs);
		assert!(config.tables.elements.is_none());
	}

	#[rstest]
	fn test_parse_toml_config() {
		let toml = r#"
[output]
directory = "src/html"

[emit]
runtime_path = "my_dom::runtime"
include_docs = false

[tables]
attributes = "tables/attributes.toml"
"#;

		let config = GeneratorConfig::from_toml(toml).unwrap();

		assert_eq!(config.output.directory, PathBuf::from("src/html"));
		assert_eq!(config.emit.runtime_path, "my_dom::runtime");
		assert_eq!(config.emit.spec_path, "htmlgen_spec");
		assert_eq!(config.emit.metadata_module, "metadata");
		assert!(!config.emit.include_docs);
		assert_eq!(
			config.tables.attributes,
			Some(PathBuf::from("tables/attributes.toml"))
		);
		assert!(config.tables.elements.is_none());
	}

	#[rstest]
	fn test_invalid_toml_is_a_parse_error() {
		let result = GeneratorConfig::from_toml("[output\ndirectory = 1");
		assert!(matches!(result, Err(ConfigError::ParseError { .. })));
	}

	#[rstest]
	fn test_missing_file_is_an_io_error() {
		let result = GeneratorConfig::from_file("/nonexistent/htmlgen.toml");
		assert!(matches!(result, Err(ConfigError::IoError { .. })));
	}

	#[rstest]
	fn test_cli_args_merge() {
		let mut config = GeneratorConfig::default().with_runtime_path("file::dom");
		let args = CliArgs {
			output_dir: Some(PathBuf::from("out")),
			elements: Some(PathBuf::from("elements.json")),
			..Default::default()
		};

		config.merge_cli_args(&args);

		assert_eq!(config.output.directory, PathBuf::from("out"));
		assert_eq!(config.emit.runtime_path, "file::dom");
		assert_eq!(config.tables.elements, Some(PathBuf::from("elements.json")));
	}

	#[rstest]
	fn test_builder_pattern() {
		let config = GeneratorConfig::default()
			.with_output_dir("./generated")
			.with_runtime_path("crate::html")
			.with_spec_path("crate::spec");

		assert_eq!(config.output.directory, PathBuf::from("./generated"));
		assert_eq!(config.emit.runtime_path, "crate::html");
		assert_eq!(config.emit.spec_path, "crate::spec");
	}
}
