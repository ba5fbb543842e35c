//! Optional observability helpers for provider construction and profile mapping.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth2_shibboleth.provider` with the
//!   `stage` and `step` (call site) fields, plus a `debug` event when claims are missing.
//! - Enable `metrics` to increment the `oauth2_shibboleth_stage_total` counter for every
//!   attempt/success/failure/degraded outcome, labeled by `stage` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Work stages observed by the adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
	/// Building a provider descriptor from caller options.
	ProviderConfig,
	/// Mapping ID-token claims into a profile.
	ProfileMapping,
}
impl Stage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Stage::ProviderConfig => "provider_config",
			Stage::ProfileMapping => "profile_mapping",
		}
	}
}
impl Display for Stage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageOutcome {
	/// Entry to a stage.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
	/// Completed, but with fields left empty because input was incomplete.
	Degraded,
}
impl StageOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			StageOutcome::Attempt => "attempt",
			StageOutcome::Success => "success",
			StageOutcome::Failure => "failure",
			StageOutcome::Degraded => "degraded",
		}
	}
}
impl Display for StageOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
