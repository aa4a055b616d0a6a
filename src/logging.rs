//! Diagnostic logging on stderr.
//!
//! Load failures are reported here, so stdout stays clean for rendered output. The filter comes
//! from `APIDASH_LOG` when set, otherwise from the verbosity requested on the command line.

use tracing_subscriber::{
	EnvFilter,
	fmt::{self, format::FmtSpan},
	layer::SubscriberExt,
	util::SubscriberInitExt,
};

/// Environment variable holding filter directives (e.g. `apidash=debug`).
pub const LOG_ENV: &str = "APIDASH_LOG";

/// Filter directive used when `APIDASH_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
	if verbose { "warn,apidash=debug" } else { "warn" }
}

/// Install the global subscriber. Calling this twice is harmless; the second call is ignored.
pub fn init(verbose: bool, ansi: bool) {
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

	let stderr_layer = fmt::layer()
		.with_writer(std::io::stderr)
		.with_ansi(ansi)
		.with_target(verbose)
		.with_span_events(FmtSpan::NONE);

	let _ = tracing_subscriber::registry()
		.with(stderr_layer)
		.with(filter)
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbose_enables_crate_debug() {
		assert_eq!(default_directive(false), "warn");
		assert_eq!(default_directive(true), "warn,apidash=debug");
	}

	#[test]
	fn init_is_idempotent() {
		init(false, false);
		init(true, false);
	}
}
