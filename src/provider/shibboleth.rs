//! Provider factory for a Cognito user pool bridged to the Shibboleth SSO.
//!
//! The stock Cognito descriptor drops the attributes Shibboleth releases, so this factory
//! swaps in [`ShibbolethProfileMapper`] and reads the profile straight from the ID token.

// self
use crate::{
	_prelude::*,
	obs::{self, Stage, StageOutcome, StageSpan},
	profile::{ProfileMapper, ShibbolethProfileMapper},
	provider::{
		Check, ProviderDescriptor, ProviderId, ProviderKind, ProviderOptions, ProviderStyle,
	},
};

/// Identifier of the Shibboleth provider.
pub const SHIBBOLETH_PROVIDER_ID: &str = "shibboleth";
/// Display name of the Shibboleth provider.
pub const SHIBBOLETH_PROVIDER_NAME: &str = "Shibboleth";
/// Path appended to the issuer to reach the OpenID discovery document.
pub const WELL_KNOWN_SUFFIX: &str = "/.well-known/openid-configuration";

/// Builds the Shibboleth provider descriptor.
///
/// Fails with [`ConfigError::MissingIssuer`](crate::error::ConfigError::MissingIssuer) when
/// `options` carries no issuer; nothing else about the options is inspected.
pub fn shibboleth_provider(options: ProviderOptions) -> Result<ProviderDescriptor> {
	shibboleth_provider_with_profile(options, ShibbolethProfileMapper)
}

/// Builds the Shibboleth provider descriptor around a caller-supplied profile mapper.
///
/// Use this to extend [`ShibbolethProfile`](crate::profile::ShibbolethProfile) with extra
/// claims; the mapper usually starts from [`ShibbolethProfileMapper`] and adds fields on top.
pub fn shibboleth_provider_with_profile<P, M>(
	options: ProviderOptions,
	mapper: M,
) -> Result<ProviderDescriptor<P>>
where
	M: 'static + ProfileMapper<Profile = P>,
{
	const STAGE: Stage = Stage::ProviderConfig;

	let _span = StageSpan::new(STAGE, "shibboleth_provider").entered();

	obs::record_stage_outcome(STAGE, StageOutcome::Attempt);

	let result = build_descriptor(options, mapper);

	match &result {
		Ok(_) => obs::record_stage_outcome(STAGE, StageOutcome::Success),
		Err(e) => {
			obs::trace_config_failure(e);
			obs::record_stage_outcome(STAGE, StageOutcome::Failure);
		},
	}

	result
}

/// Derives the discovery document URL from an issuer by plain concatenation.
pub fn discovery_url(issuer: &str) -> String {
	format!("{issuer}{WELL_KNOWN_SUFFIX}")
}

fn build_descriptor<P, M>(options: ProviderOptions, mapper: M) -> Result<ProviderDescriptor<P>>
where
	M: 'static + ProfileMapper<Profile = P>,
{
	let well_known = discovery_url(options.issuer()?);
	let id = ProviderId::new(SHIBBOLETH_PROVIDER_ID)?;
	let descriptor = ProviderDescriptor::builder(id, options)
		.name(SHIBBOLETH_PROVIDER_NAME)
		.kind(ProviderKind::OAuth)
		.well_known(well_known)
		.id_token(true)
		// Cognito fronting an external IdP intermittently fails the default state check.
		.checks([Check::Nonce])
		.profile(mapper)
		.style(ProviderStyle::shibboleth())
		.build()?;

	Ok(descriptor)
}
