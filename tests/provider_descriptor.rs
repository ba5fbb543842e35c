// crates.io
use serde_json::json;
// self
use oauth2_shibboleth::{
	error::{ConfigError, Error},
	profile::{Claims, ProfileMapper, ShibbolethProfileMapper},
	provider::{
		Check, ProviderDescriptor, ProviderDescriptorBuilder, ProviderDescriptorError, ProviderId,
		ProviderKind, ProviderOptions, ProviderStyle, shibboleth_provider,
	},
	url::ParseError,
};

fn options() -> ProviderOptions {
	ProviderOptions::new("client-abc")
		.with_issuer("https://cognito-idp.us-east-2.amazonaws.com/us-east-2_Pool")
		.with_client_secret("client-secret")
}

fn builder(id: &str) -> ProviderDescriptorBuilder<Option<String>> {
	let provider_id =
		ProviderId::new(id).expect("Failed to build provider identifier for mock descriptor.");

	ProviderDescriptor::builder(provider_id, options())
}

fn subject_mapper(claims: &Claims) -> Option<String> {
	claims.subject().map(str::to_owned)
}

#[test]
fn builder_rejects_incomplete_descriptors() {
	let err = builder("mock")
		.profile(subject_mapper)
		.build()
		.expect_err("Descriptor builder should reject a missing discovery URL.");

	assert_eq!(err, ProviderDescriptorError::MissingWellKnown);

	let err = builder("mock")
		.well_known("https://idp.example.edu/.well-known/openid-configuration")
		.build()
		.expect_err("Descriptor builder should reject a missing profile mapper.");

	assert_eq!(err, ProviderDescriptorError::MissingProfileMapper);

	let err = builder("mock")
		.name("  ")
		.well_known("https://idp.example.edu/.well-known/openid-configuration")
		.profile(subject_mapper)
		.build()
		.expect_err("Descriptor builder should reject blank names.");

	assert_eq!(err, ProviderDescriptorError::EmptyName);
}

#[test]
fn builder_validates_checks() {
	let base = || {
		builder("checks")
			.well_known("https://idp.example.edu/.well-known/openid-configuration")
			.profile(subject_mapper)
	};

	assert_eq!(
		base().checks([]).build().expect_err("Empty checks must be rejected."),
		ProviderDescriptorError::NoChecks
	);
	assert_eq!(
		base().checks([Check::None, Check::State]).build().expect_err("`none` is exclusive."),
		ProviderDescriptorError::ConflictingChecks
	);

	let descriptor = base().build().expect("Default checks should be accepted.");

	assert!(descriptor.requires(Check::Pkce));
	assert!(descriptor.requires(Check::State));
	assert!(!descriptor.requires(Check::Nonce));
}

#[test]
fn builder_defaults_name_to_identifier() {
	let descriptor = builder("generic-oidc")
		.kind(ProviderKind::Oidc)
		.well_known("https://idp.example.edu/.well-known/openid-configuration")
		.profile(subject_mapper)
		.build()
		.expect("Descriptor builder should succeed for a complete configuration.");

	assert_eq!(descriptor.name, "generic-oidc");
	assert_eq!(descriptor.kind, ProviderKind::Oidc);
	assert!(!descriptor.id_token);
	assert_eq!(descriptor.style, ProviderStyle::default());
	assert_eq!(descriptor.map_profile(&Claims::new().with("sub", "abc")), Some("abc".into()));
}

#[test]
fn shibboleth_descriptor_matches_host_shape() {
	let descriptor = shibboleth_provider(options()).expect("Shibboleth descriptor should build.");
	let json = serde_json::to_value(&descriptor).expect("Descriptor should serialize.");

	assert_eq!(
		json,
		json!({
			"id": "shibboleth",
			"name": "Shibboleth",
			"type": "oauth",
			"wellKnown": "https://cognito-idp.us-east-2.amazonaws.com/us-east-2_Pool/.well-known/openid-configuration",
			"idToken": true,
			"checks": ["nonce"],
			"style": {
				"logo": "/cognito.svg",
				"logoDark": "/cognito.svg",
				"bg": "#fff",
				"text": "#C17B9E",
				"bgDark": "#fff",
				"textDark": "#C17B9E"
			},
			"options": {
				"issuer": "https://cognito-idp.us-east-2.amazonaws.com/us-east-2_Pool",
				"clientId": "client-abc",
				"scopes": ["openid", "email", "profile"]
			}
		})
	);
}

#[test]
fn shibboleth_descriptor_passes_options_through() {
	let descriptor = shibboleth_provider(options().with_authorization_param("prompt", "login"))
		.expect("Shibboleth descriptor should build.");

	assert_eq!(descriptor.options.client_id.as_str(), "client-abc");
	assert_eq!(
		descriptor.options.client_secret.as_ref().map(|secret| secret.secret().as_str()),
		Some("client-secret")
	);
	assert_eq!(
		descriptor.options.authorization_params.get("prompt").map(String::as_str),
		Some("login")
	);
	assert!(!format!("{descriptor:?}").contains("client-secret"));
}

#[test]
fn discovery_url_parses_lazily() {
	let descriptor = shibboleth_provider(options()).expect("Shibboleth descriptor should build.");
	let url = descriptor.well_known_url().expect("Discovery URL should parse.");

	assert_eq!(url.host_str(), Some("cognito-idp.us-east-2.amazonaws.com"));
	assert_eq!(url.path(), "/us-east-2_Pool/.well-known/openid-configuration");

	let descriptor = shibboleth_provider(ProviderOptions::new("client").with_issuer("pool"))
		.expect("Malformed issuers are accepted at construction time.");

	assert!(matches!(
		descriptor.well_known_url(),
		Err(ConfigError::InvalidDiscoveryUrl { source: ParseError::RelativeUrlWithoutBase, .. })
	));
}

#[test]
fn missing_issuer_is_a_config_error() {
	let options = ProviderOptions::from_json(r#"{"clientId":"client-abc"}"#)
		.expect("Options without issuer still deserialize.");
	let err = shibboleth_provider(options).expect_err("Missing issuer must be rejected.");

	assert!(matches!(err, Error::Config(ConfigError::MissingIssuer)));
}

#[test]
fn descriptors_are_shareable() {
	fn assert_send_sync<T: Send + Sync>(_: &T) {}

	let descriptor = shibboleth_provider(options()).expect("Shibboleth descriptor should build.");
	let cloned = descriptor.clone();

	assert_send_sync(&descriptor);
	let claims = Claims::new().with("sub", "abc");

	assert_eq!(cloned.map_profile(&claims), ShibbolethProfileMapper.map_profile(&claims));
}
