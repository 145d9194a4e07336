//! htmlgen CLI
//!
//! Generates the Rust HTML builder vocabulary from the element and attribute
//! classification tables.
//!
//! ## Usage
//!
//! ```bash
//! htmlgen generate --out-dir src/dom/generated
//! htmlgen generate --config htmlgen.toml --dry-run
//! htmlgen list conflicts
//! ```

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use htmlgen_codegen::CliArgs;

use crate::commands::ListTarget;

#[derive(Parser)]
#[command(name = "htmlgen")]
#[command(about = "HTML builder vocabulary generator", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Generate element, attribute and metadata modules
	Generate {
		/// Path to an htmlgen.toml configuration file
		#[arg(short, long, value_name = "FILE")]
		config: Option<PathBuf>,

		/// Output directory (overrides the configuration file)
		#[arg(short, long, value_name = "DIR")]
		out_dir: Option<PathBuf>,

		/// Element table (.json or .toml); defaults to the built-in table
		#[arg(long, value_name = "FILE")]
		elements: Option<PathBuf>,

		/// Attribute table (.json or .toml); defaults to the built-in table
		#[arg(long, value_name = "FILE")]
		attributes: Option<PathBuf>,

		/// Module path of the runtime node and attribute types
		#[arg(long, value_name = "PATH")]
		runtime_path: Option<String>,

		/// Print the files that would be written without writing them
		#[arg(long)]
		dry_run: bool,
	},

	/// List table contents
	List {
		#[arg(value_enum)]
		target: ListTarget,

		/// Element table (.json or .toml)
		#[arg(long, value_name = "FILE")]
		elements: Option<PathBuf>,

		/// Attribute table (.json or .toml)
		#[arg(long, value_name = "FILE")]
		attributes: Option<PathBuf>,
	},
}

fn main() {
	let cli = Cli::parse();
	logging::init(cli.verbosity);

	let result = match cli.command {
		Commands::Generate {
			config,
			out_dir,
			elements,
			attributes,
			runtime_path,
			dry_run,
		} => commands::run_generate(CliArgs {
			output_dir: out_dir,
			runtime_path,
			elements,
			attributes,
			config_file: config,
			dry_run,
		}),
		Commands::List {
			target,
			elements,
			attributes,
		} => commands::run_list(target, elements.as_deref(), attributes.as_deref()),
	};

	if let Err(e) = result {
		eprintln!("Error: {:#}", e);
		process::exit(1);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;
	use rstest::rstest;

	#[rstest]
	fn test_cli_definition_is_valid() {
		Cli::command().debug_assert();
	}

	#[rstest]
	fn test_parse_generate() {
		let cli = Cli::try_parse_from([
			"htmlgen",
			"generate",
			"--out-dir",
			"out",
			"--runtime-path",
			"my_dom",
			"--dry-run",
			"-vv",
		])
		.unwrap();

		assert_eq!(cli.verbosity, 2);
		match cli.command {
			Commands::Generate {
				out_dir,
				runtime_path,
				dry_run,
				config,
				..
			} => {
				assert_eq!(out_dir, Some(PathBuf::from("out")));
				assert_eq!(runtime_path.as_deref(), Some("my_dom"));
				assert!(dry_run);
				assert!(config.is_none());
			}
			Commands::List { .. } => panic!("expected generate"),
		}
	}

	#[rstest]
	#[case("elements", ListTarget::Elements)]
	#[case("attributes", ListTarget::Attributes)]
	#[case("conflicts", ListTarget::Conflicts)]
	fn test_parse_list(#[case] target: &str, #[case] expected: ListTarget) {
		let cli = Cli::try_parse_from(["htmlgen", "list", target]).unwrap();
		assert!(matches!(cli.command, Commands::List { target, .. } if target == expected));
	}

	#[rstest]
	fn test_unknown_list_target_is_rejected() {
		assert!(Cli::try_parse_from(["htmlgen", "list", "events"]).is_err());
	}
}
