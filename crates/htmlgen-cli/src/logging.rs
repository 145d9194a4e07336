//! Tracing setup for the command-line tool.

use tracing_subscriber::{
	Layer, filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Default filter directive for a `-v` count.
pub(crate) fn level_for(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Installs a stderr `fmt` subscriber. `RUST_LOG` takes precedence over `-v`.
pub(crate) fn init(verbosity: u8) {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

	// A subscriber may already be installed when running under a test harness.
	let _ = tracing_subscriber::registry()
		.with(
			tracing_subscriber::fmt::layer()
				.with_target(verbosity > 2)
				.with_writer(std::io::stderr)
				.with_filter(filter),
		)
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, "warn")]
	#[case(1, "info")]
	#[case(2, "debug")]
	#[case(3, "trace")]
	#[case(9, "trace")]
	fn test_level_for_verbosity(#[case] verbosity: u8, #[case] expected: &str) {
		assert_eq!(level_for(verbosity), expected);
	}
}
