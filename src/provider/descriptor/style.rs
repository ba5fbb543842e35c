// self
use crate::_prelude::*;

/// Branding used by the host when rendering a sign-in button.
///
/// Purely presentational; nothing in the authorization flow reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderStyle {
	/// Logo path for light themes.
	pub logo: String,
	/// Logo path for dark themes.
	pub logo_dark: String,
	/// Button background for light themes.
	pub bg: String,
	/// Button text color for light themes.
	pub text: String,
	/// Button background for dark themes.
	pub bg_dark: String,
	/// Button text color for dark themes.
	pub text_dark: String,
}
impl ProviderStyle {
	/// Cognito-branded style used by the Shibboleth bridge.
	pub fn shibboleth() -> Self {
		Self {
			logo: "/cognito.svg".into(),
			logo_dark: "/cognito.svg".into(),
			bg: "#fff".into(),
			text: "#C17B9E".into(),
			bg_dark: "#fff".into(),
			text_dark: "#C17B9E".into(),
		}
	}
}
