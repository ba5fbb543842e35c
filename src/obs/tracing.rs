// self
use crate::{_prelude::*, obs::Stage};

/// A span builder used around provider construction and profile mapping.
#[derive(Clone, Debug)]
pub struct StageSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl StageSpan {
	/// Creates a new span tagged with the provided stage + step.
	pub fn new(stage: Stage, step: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("oauth2_shibboleth.provider", stage = stage.as_str(), step);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (stage, step);

			Self {}
		}
	}

	/// Enters the span for the remainder of the caller's scope.
	pub fn entered(self) -> StageSpanGuard {
		#[cfg(feature = "tracing")]
		{
			StageSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			StageSpanGuard {}
		}
	}
}

/// RAII guard returned by [`StageSpan::entered`].
pub struct StageSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for StageSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("StageSpanGuard(..)")
	}
}

/// Emits a `debug` event listing claim keys absent from a sign-in payload.
pub fn trace_missing_claims(missing: &[&'static str]) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(?missing, "Claims are incomplete; affected profile fields stay empty.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = missing;
	}
}

/// Emits a `warn` event when the provider factory rejects its options.
pub fn trace_config_failure(err: &Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(error = %err, "Provider configuration rejected.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = err;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn stage_span_noop_without_tracing() {
		let _guard = StageSpan::new(Stage::ProviderConfig, "test").entered();
		// Compile-time smoke test ensures the guard exists even when tracing is disabled.
	}

	#[test]
	fn trace_helpers_accept_empty_input() {
		trace_missing_claims(&[]);
		trace_config_failure(&Error::Config(crate::error::ConfigError::MissingIssuer));
	}
}
