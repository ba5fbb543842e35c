//! Provider descriptor data structures consumed by the host OAuth client.
//!
//! A descriptor is built once at configuration time and then only read: the host uses its
//! discovery URL and flags to drive the authorization-code flow and calls the attached
//! [`ProfileMapper`] with the ID-token claims of every sign-in.

/// Builder API for assembling provider descriptors.
pub mod builder;
/// Protocol type and security-check flags.
pub mod kind;
/// Display styling table.
pub mod style;

pub use builder::*;
pub use kind::*;
pub use style::*;

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	profile::{Claims, ProfileMapper, ShibbolethProfile},
	provider::{ProviderId, ProviderOptions},
};

/// Immutable provider descriptor handed to the host framework.
#[derive(Serialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct ProviderDescriptor<P = ShibbolethProfile> {
	/// Descriptor identifier.
	pub id: ProviderId,
	/// Display name shown on sign-in pages.
	pub name: String,
	/// Protocol type tag.
	#[serde(rename = "type")]
	pub kind: ProviderKind,
	/// OpenID discovery document URL.
	pub well_known: String,
	/// Whether the host should read the profile from the ID token instead of a userinfo call.
	pub id_token: bool,
	/// Security checks the host performs during the authorization round trip.
	pub checks: Vec<Check>,
	/// Maps ID-token claims into the profile record.
	#[serde(skip)]
	pub profile: Arc<dyn ProfileMapper<Profile = P>>,
	/// Display styling metadata.
	pub style: ProviderStyle,
	/// Caller options, passed through untouched.
	pub options: ProviderOptions,
}
impl<P> ProviderDescriptor<P> {
	/// Creates a new builder for the provided identifier and options.
	pub fn builder(id: ProviderId, options: ProviderOptions) -> ProviderDescriptorBuilder<P> {
		ProviderDescriptorBuilder::new(id, options)
	}

	/// Runs the attached profile mapper over one sign-in's claims.
	pub fn map_profile(&self, claims: &Claims) -> P {
		self.profile.map_profile(claims)
	}

	/// Checks whether the host must perform the given security check.
	pub fn requires(&self, check: Check) -> bool {
		self.checks.contains(&check)
	}

	/// Parses the discovery URL.
	///
	/// The descriptor stores the URL as plain text; malformed issuers only surface here or
	/// later inside the host's discovery request.
	pub fn well_known_url(&self) -> Result<Url, ConfigError> {
		Url::parse(&self.well_known).map_err(|source| ConfigError::InvalidDiscoveryUrl {
			url: self.well_known.clone(),
			source,
		})
	}
}
impl<P> Clone for ProviderDescriptor<P> {
	fn clone(&self) -> Self {
		Self {
			id: self.id.clone(),
			name: self.name.clone(),
			kind: self.kind,
			well_known: self.well_known.clone(),
			id_token: self.id_token,
			checks: self.checks.clone(),
			profile: self.profile.clone(),
			style: self.style.clone(),
			options: self.options.clone(),
		}
	}
}
impl<P> Debug for ProviderDescriptor<P> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProviderDescriptor")
			.field("id", &self.id)
			.field("name", &self.name)
			.field("kind", &self.kind)
			.field("well_known", &self.well_known)
			.field("id_token", &self.id_token)
			.field("checks", &self.checks)
			.field("profile", &"<mapper>")
			.field("style", &self.style)
			.field("options", &self.options)
			.finish()
	}
}
