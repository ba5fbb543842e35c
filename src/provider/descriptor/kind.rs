// self
use crate::_prelude::*;

/// Protocol type understood by the host framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
	#[default]
	/// Plain OAuth 2.0 provider (optionally with discovery and ID tokens).
	OAuth,
	/// Full OpenID Connect provider.
	Oidc,
}
impl ProviderKind {
	/// Returns the identifier used by the host framework.
	pub fn as_str(self) -> &'static str {
		match self {
			ProviderKind::OAuth => "oauth",
			ProviderKind::Oidc => "oidc",
		}
	}
}
impl Display for ProviderKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Security check performed by the host across the authorization redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Check {
	/// PKCE code verifier/challenge.
	Pkce,
	/// Opaque `state` parameter.
	State,
	/// ID-token `nonce` claim.
	Nonce,
	/// No check at all.
	None,
}
impl Check {
	/// Checks the host framework applies when a descriptor does not choose.
	pub const DEFAULTS: [Check; 2] = [Check::Pkce, Check::State];

	/// Returns the identifier used by the host framework.
	pub fn as_str(self) -> &'static str {
		match self {
			Check::Pkce => "pkce",
			Check::State => "state",
			Check::Nonce => "nonce",
			Check::None => "none",
		}
	}
}
impl Display for Check {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
