//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, bail};
use colored::Colorize;
use htmlgen_codegen::{
	CliArgs, ConflictResolver, GeneratedOutput, Generator, GeneratorConfig, RustEmitter,
};
use htmlgen_spec::{AttributeTable, ElementTable, TableResult};
use tracing::{debug, info};

/// Loads the configuration file (if any) and applies CLI overrides.
pub(crate) fn resolve_config(args: &CliArgs) -> anyhow::Result<GeneratorConfig> {
	let mut config = match &args.config_file {
		Some(path) => GeneratorConfig::from_file(path)
			.with_context(|| format!("Failed to load configuration from {}", path.display()))?,
		None => GeneratorConfig::default(),
	};
	config.merge_cli_args(args);
	Ok(config)
}

/// Loads the element table, falling back on the built-in one.
pub(crate) fn load_elements(path: Option<&Path>) -> anyhow::Result<ElementTable> {
	match path {
		Some(path) => read_table(path, ElementTable::from_json, ElementTable::from_toml),
		None => Ok(ElementTable::builtin()),
	}
}

/// Loads the attribute table, falling back on the built-in one.
pub(crate) fn load_attributes(path: Option<&Path>) -> anyhow::Result<AttributeTable> {
	match path {
		Some(path) => read_table(path, AttributeTable::from_json, AttributeTable::from_toml),
		None => Ok(AttributeTable::builtin()),
	}
}

fn read_table<T>(
	path: &Path,
	from_json: fn(&str) -> TableResult<T>,
	from_toml: fn(&str) -> TableResult<T>,
) -> anyhow::Result<T> {
	let parse = match path.extension().and_then(|ext| ext.to_str()) {
		Some("json") => from_json,
		Some("toml") => from_toml,
		_ => bail!(
			"Unsupported table format for {}: expected a .json or .toml file",
			path.display()
		),
	};
	let content = std::fs::read_to_string(path)
		.with_context(|| format!("Failed to read table {}", path.display()))?;
	let table =
		parse(&content).with_context(|| format!("Invalid table {}", path.display()))?;
	debug!(path = %path.display(), "loaded table");
	Ok(table)
}

/// Runs the generation pass and renders every file without touching disk.
pub(crate) fn generate(config: &GeneratorConfig) -> anyhow::Result<GeneratedOutput> {
	let elements = load_elements(config.tables.elements.as_deref())?;
	let attributes = load_attributes(config.tables.attributes.as_deref())?;

	let plan = Generator::new(&elements, &attributes)
		.generate()
		.context("Generation failed")?;
	RustEmitter::new(config.clone())
		.emit(&plan)
		.context("Failed to emit Rust source")
}

/// Writes every generated file, creating parent directories as needed.
pub(crate) fn write_output(output: &GeneratedOutput) -> anyhow::Result<()> {
	for file in &output.files {
		if let Some(parent) = file.path.parent() {
			std::fs::create_dir_all(parent)
				.with_context(|| format!("Failed to create directory {}", parent.display()))?;
		}
		std::fs::write(&file.path, &file.content)
			.with_context(|| format!("Failed to write {}", file.path.display()))?;
		info!(path = %file.path.display(), bytes = file.content.len(), "wrote file");
	}
	Ok(())
}

pub(crate) fn run_generate(args: CliArgs) -> anyhow::Result<()> {
	let config = resolve_config(&args)?;
	let output = generate(&config)?;

	if args.dry_run {
		for file in &output.files {
			println!(
				"{} {} ({} bytes)",
				"Would write:".yellow(),
				file.path.display(),
				file.content.len()
			);
		}
		return Ok(());
	}

	write_output(&output)?;
	for file in &output.files {
		println!("{} {}", "Generated:".green(), file.path.display());
	}
	println!(
		"{}: {} files in {}",
		"Summary".bright_cyan(),
		output.files.len().to_string().green(),
		config.output.directory.display()
	);
	Ok(())
}

/// What `htmlgen list` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum ListTarget {
	Elements,
	Attributes,
	Conflicts,
}

pub(crate) fn run_list(
	target: ListTarget,
	elements: Option<&Path>,
	attributes: Option<&Path>,
) -> anyhow::Result<()> {
	for line in list_lines(target, elements, attributes)? {
		println!("{}", line);
	}
	Ok(())
}

fn list_lines(
	target: ListTarget,
	elements: Option<&Path>,
	attributes: Option<&Path>,
) -> anyhow::Result<Vec<String>> {
	let lines = match target {
		ListTarget::Elements => load_elements(elements)?
			.iter()
			.map(|d| {
				let categories: Vec<_> = d.content_categories.iter().map(|c| c.as_str()).collect();
				format!(
					"{:<12} {:<8} {:<18} {}",
					d.name,
					d.display_type,
					d.element_type,
					categories.join(", ")
				)
			})
			.collect(),
		ListTarget::Attributes => load_attributes(attributes)?
			.iter()
			.map(|d| format!("{:<18} {:<22} {}", d.name, d.scope, d.value_type))
			.collect(),
		ListTarget::Conflicts => {
			let table = load_attributes(attributes)?;
			let resolver = ConflictResolver::new(&table);
			resolver
				.conflicting_names()
				.map(|name| {
					let scopes: Vec<_> = resolver
						.scopes_of(name)
						.iter()
						.map(|s| s.as_str())
						.collect();
					format!("{}: {}", name, scopes.join(", "))
				})
				.collect()
		}
	};
	Ok(lines)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::path::PathBuf;
	use tempfile::TempDir;

	const ATTRIBUTES_JSON: &str = r#"{ "attributes": [
		{ "name": "hidden", "type": "BOOLEAN", "scope": "UNIVERSAL" },
		{ "name": "kind", "type": "STRING", "scope": "FORM_ELEMENTS" },
		{ "name": "kind", "type": "STRING", "scope": "MEDIA_ELEMENTS" }
	] }"#;

	const ELEMENTS_TOML: &str = r#"
[[elements]]
name = "card"
display_type = "BLOCK"
element_type = "CONTAINER"
"#;

	#[rstest]
	fn test_generate_writes_files() {
		let dir = TempDir::new().unwrap();
		let out = dir.path().join("generated");
		let config = GeneratorConfig::default().with_output_dir(&out);

		let output = generate(&config).unwrap();
		write_output(&output).unwrap();

		for name in ["elements.rs", "attributes.rs", "metadata.rs", "mod.rs"] {
			let content = std::fs::read_to_string(out.join(name)).unwrap();
			assert!(content.starts_with("//! Generated by `htmlgen`"));
		}
	}

	#[rstest]
	fn test_generate_from_table_files() {
		let dir = TempDir::new().unwrap();
		let elements = dir.path().join("elements.toml");
		let attributes = dir.path().join("attributes.json");
		std::fs::write(&elements, ELEMENTS_TOML).unwrap();
		std::fs::write(&attributes, ATTRIBUTES_JSON).unwrap();

		let args = CliArgs {
			output_dir: Some(dir.path().join("out")),
			elements: Some(elements),
			attributes: Some(attributes),
			..Default::default()
		};
		let config = resolve_config(&args).unwrap();
		let output = generate(&config).unwrap();

		let elements = &output.file("elements.rs").unwrap().content;
		assert!(elements.contains("pub fn card("));
		let attributes = &output.file("attributes.rs").unwrap().content;
		assert!(attributes.contains("pub fn kind_form("));
		assert!(attributes.contains("pub fn kind_media("));
		assert!(attributes.contains("pub fn hidden_if("));
	}

	#[rstest]
	fn test_config_file_is_overridden_by_cli() {
		let dir = TempDir::new().unwrap();
		let config_path = dir.path().join("htmlgen.toml");
		std::fs::write(
			&config_path,
			"[output]\ndirectory = \"from-file\"\n\n[emit]\nruntime_path = \"my_dom\"\n",
		)
		.unwrap();

		let args = CliArgs {
			output_dir: Some(PathBuf::from("from-cli")),
			config_file: Some(config_path),
			..Default::default()
		};
		let config = resolve_config(&args).unwrap();
		assert_eq!(config.output.directory, PathBuf::from("from-cli"));
		assert_eq!(config.emit.runtime_path, "my_dom");
	}

	#[rstest]
	fn test_missing_config_file_reports_path() {
		let args = CliArgs {
			config_file: Some(PathBuf::from("/nonexistent/htmlgen.toml")),
			..Default::default()
		};
		let error = resolve_config(&args).unwrap_err();
		assert!(error.to_string().contains("/nonexistent/htmlgen.toml"));
	}

	#[rstest]
	#[case("attributes.yaml")]
	#[case("attributes")]
	fn test_unsupported_table_extension(#[case] file_name: &str) {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join(file_name);
		std::fs::write(&path, ATTRIBUTES_JSON).unwrap();

		let error = load_attributes(Some(&path)).unwrap_err();
		assert!(error.to_string().contains("Unsupported table format"));
	}

	#[rstest]
	fn test_invalid_table_is_rejected() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("attributes.json");
		std::fs::write(
			&path,
			r#"{ "attributes": [{ "name": "dir", "type": "ENUM", "scope": "UNIVERSAL" }] }"#,
		)
		.unwrap();

		let error = load_attributes(Some(&path)).unwrap_err();
		assert!(error.to_string().starts_with("Invalid table"));
	}

	#[rstest]
	fn test_list_conflicts() {
		let lines = list_lines(ListTarget::Conflicts, None, None).unwrap();
		assert_eq!(
			lines,
			vec![
				"size: FORM_ELEMENTS, SPECIFIC_ELEMENTS".to_string(),
				"type: FORM_ELEMENTS, LINK_ELEMENTS".to_string(),
			]
		);
	}

	#[rstest]
	fn test_list_elements_uses_table_order() {
		let lines = list_lines(ListTarget::Elements, None, None).unwrap();
		assert_eq!(lines.len(), ElementTable::builtin().len());
		assert!(lines[0].starts_with("a "));
	}
}
