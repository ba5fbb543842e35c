// self
use crate::{
	_prelude::*,
	profile::ProfileMapper,
	provider::{
		Check, ProviderDescriptor, ProviderId, ProviderKind, ProviderOptions, ProviderStyle,
	},
};

/// Errors raised while constructing or validating descriptors.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ProviderDescriptorError {
	/// Discovery document URL is mandatory.
	#[error("Missing discovery document URL.")]
	MissingWellKnown,
	/// A profile mapper must be attached.
	#[error("Missing profile mapper.")]
	MissingProfileMapper,
	/// Display names must contain visible text.
	#[error("Display name cannot be empty.")]
	EmptyName,
	/// At least one security check must be listed.
	#[error("Descriptor must list at least one check.")]
	NoChecks,
	/// `none` cannot be combined with other checks.
	#[error("The `none` check cannot be combined with other checks.")]
	ConflictingChecks,
}

/// Builder for [`ProviderDescriptor`] values.
pub struct ProviderDescriptorBuilder<P> {
	/// Identifier for the descriptor being constructed.
	pub id: ProviderId,
	/// Display name; defaults to the identifier.
	pub name: Option<String>,
	/// Protocol type tag.
	pub kind: ProviderKind,
	/// Discovery document URL.
	pub well_known: Option<String>,
	/// ID-token flag.
	pub id_token: bool,
	/// Security checks requested from the host.
	pub checks: Vec<Check>,
	/// Profile mapper.
	pub profile: Option<Arc<dyn ProfileMapper<Profile = P>>>,
	/// Display styling.
	pub style: ProviderStyle,
	/// Caller options passed through to the descriptor.
	pub options: ProviderOptions,
}
impl<P> ProviderDescriptorBuilder<P> {
	/// Creates a new builder seeded with the provided identifier and options.
	pub fn new(id: ProviderId, options: ProviderOptions) -> Self {
		Self {
			id,
			name: None,
			kind: ProviderKind::default(),
			well_known: None,
			id_token: false,
			checks: Check::DEFAULTS.to_vec(),
			profile: None,
			style: ProviderStyle::default(),
			options,
		}
	}

	/// Sets the display name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());

		self
	}

	/// Sets the protocol type.
	pub fn kind(mut self, kind: ProviderKind) -> Self {
		self.kind = kind;

		self
	}

	/// Sets the discovery document URL.
	pub fn well_known(mut self, url: impl Into<String>) -> Self {
		self.well_known = Some(url.into());

		self
	}

	/// Toggles reading the profile from the ID token.
	pub fn id_token(mut self, id_token: bool) -> Self {
		self.id_token = id_token;

		self
	}

	/// Replaces the security checks.
	pub fn checks<I>(mut self, checks: I) -> Self
	where
		I: IntoIterator<Item = Check>,
	{
		self.checks = checks.into_iter().collect();

		self
	}

	/// Attaches the profile mapper.
	pub fn profile<M>(mut self, mapper: M) -> Self
	where
		M: 'static + ProfileMapper<Profile = P>,
	{
		self.profile = Some(Arc::new(mapper));

		self
	}

	/// Overrides the display styling.
	pub fn style(mut self, style: ProviderStyle) -> Self {
		self.style = style;

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<ProviderDescriptor<P>, ProviderDescriptorError> {
		let well_known = self.well_known.ok_or(ProviderDescriptorError::MissingWellKnown)?;
		let profile = self.profile.ok_or(ProviderDescriptorError::MissingProfileMapper)?;
		let name = self.name.unwrap_or_else(|| self.id.to_string());
		let descriptor = ProviderDescriptor {
			id: self.id,
			name,
			kind: self.kind,
			well_known,
			id_token: self.id_token,
			checks: self.checks,
			profile,
			style: self.style,
			options: self.options,
		};

		descriptor.validate()?;

		Ok(descriptor)
	}
}
impl<P> Debug for ProviderDescriptorBuilder<P> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProviderDescriptorBuilder")
			.field("id", &self.id)
			.field("name", &self.name)
			.field("kind", &self.kind)
			.field("well_known", &self.well_known)
			.field("id_token", &self.id_token)
			.field("checks", &self.checks)
			.field("profile", &self.profile.as_ref().map(|_| "<mapper>"))
			.field("style", &self.style)
			.field("options", &self.options)
			.finish()
	}
}

impl<P> ProviderDescriptor<P> {
	/// Validates invariants for the descriptor.
	fn validate(&self) -> Result<(), ProviderDescriptorError> {
		if self.name.trim().is_empty() {
			return Err(ProviderDescriptorError::EmptyName);
		}
		if self.well_known.is_empty() {
			return Err(ProviderDescriptorError::MissingWellKnown);
		}
		if self.checks.is_empty() {
			return Err(ProviderDescriptorError::NoChecks);
		}
		if self.checks.len() > 1 && self.checks.contains(&Check::None) {
			return Err(ProviderDescriptorError::ConflictingChecks);
		}

		Ok(())
	}
}
