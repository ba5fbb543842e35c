//! Caller-supplied OAuth client options passed through to the host framework.

// crates.io
use oauth2::{ClientId, ClientSecret, Scope};
// self
use crate::{_prelude::*, error::ConfigError};

/// Scopes requested when the caller does not override them.
pub const DEFAULT_SCOPES: [&str; 3] = ["openid", "email", "profile"];

/// Generic OAuth client options supplied by the caller.
///
/// Only the issuer is checked by this crate, and only for presence. Everything else is carried
/// on the descriptor for the host framework to use during the authorization-code exchange.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOptions {
	/// Issuer URL of the Cognito user pool (required by the Shibboleth factory).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub issuer: Option<String>,
	/// OAuth client identifier registered with the user pool.
	pub client_id: ClientId,
	/// Optional client secret; never serialized.
	#[serde(default, skip_serializing)]
	pub client_secret: Option<ClientSecret>,
	/// Scopes requested during authorization.
	#[serde(default = "default_scopes")]
	pub scopes: Vec<Scope>,
	/// Extra query parameters appended to the authorization request.
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub authorization_params: BTreeMap<String, String>,
}
impl ProviderOptions {
	/// Creates options for the provided client identifier with default scopes and no issuer.
	pub fn new(client_id: impl Into<String>) -> Self {
		Self {
			issuer: None,
			client_id: ClientId::new(client_id.into()),
			client_secret: None,
			scopes: default_scopes(),
			authorization_params: BTreeMap::new(),
		}
	}

	/// Parses options from a JSON document, reporting the failing path on error.
	pub fn from_json(payload: &str) -> Result<Self, ConfigError> {
		let de = &mut serde_json::Deserializer::from_str(payload);

		serde_path_to_error::deserialize(de).map_err(|source| ConfigError::InvalidOptions { source })
	}

	/// Sets the issuer URL.
	pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
		self.issuer = Some(issuer.into());

		self
	}

	/// Sets the client secret for confidential clients.
	pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
		self.client_secret = Some(ClientSecret::new(secret.into()));

		self
	}

	/// Replaces the requested scopes.
	pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scopes = scopes.into_iter().map(|scope| Scope::new(scope.into())).collect();

		self
	}

	/// Adds an extra authorization request parameter.
	pub fn with_authorization_param(
		mut self,
		key: impl Into<String>,
		value: impl Into<String>,
	) -> Self {
		self.authorization_params.insert(key.into(), value.into());

		self
	}

	/// Returns the issuer, failing when it is absent or empty.
	pub fn issuer(&self) -> Result<&str, ConfigError> {
		match self.issuer.as_deref() {
			Some(issuer) if !issuer.is_empty() => Ok(issuer),
			_ => Err(ConfigError::MissingIssuer),
		}
	}

	/// Returns the space-delimited `scope` parameter value.
	pub fn scope_param(&self) -> String {
		self.scopes.iter().map(|scope| scope.as_str()).collect::<Vec<_>>().join(" ")
	}
}

fn default_scopes() -> Vec<Scope> {
	DEFAULT_SCOPES.iter().map(|scope| Scope::new((*scope).to_owned())).collect()
}
