//! Crate-level error types shared by the provider factory and claim handling.

// self
use crate::{
	_prelude::*,
	profile::ClaimsError,
	provider::{IdentifierError, ProviderDescriptorError},
};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Descriptor failed builder validation.
	#[error(transparent)]
	Descriptor(#[from] ProviderDescriptorError),
	/// Claim payload could not be read.
	#[error(transparent)]
	Claims(#[from] ClaimsError),
	/// Provider identifier failed validation.
	#[error(transparent)]
	Identifier(#[from] IdentifierError),
}

/// Configuration failures raised while building or inspecting a provider.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Options did not carry an issuer URL.
	#[error("Expected issuer.")]
	MissingIssuer,
	/// Options payload could not be deserialized.
	#[error("Provider options are invalid at `{path}`.", path = .source.path())]
	InvalidOptions {
		/// Structured parsing failure, including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Discovery document URL derived from the issuer does not parse.
	#[error("Discovery URL `{url}` is invalid.")]
	InvalidDiscoveryUrl {
		/// Concatenated discovery URL.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}
