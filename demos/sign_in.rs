//! Builds the Shibboleth descriptor from JSON options and maps a sample ID-token payload the way
//! a host OAuth client would after its authorization-code exchange.

// crates.io
use color_eyre::Result;
// self
use oauth2_shibboleth::{
	profile::Claims,
	provider::{ProviderOptions, shibboleth_provider},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let options = ProviderOptions::from_json(
		r#"{
			"issuer": "https://cognito-idp.us-east-2.amazonaws.com/us-east-2_Demo",
			"clientId": "demo-client",
			"clientSecret": "demo-secret"
		}"#,
	)?;
	let descriptor = shibboleth_provider(options)?;

	println!(
		"Provider `{}` ({}) discovers via {}.",
		descriptor.id,
		descriptor.name,
		descriptor.well_known_url()?
	);
	println!("Host must verify: {:?}.", descriptor.checks);

	let claims = Claims::from_json(
		r#"{
			"sub": "demo-subject",
			"custom:osuid": "500000001",
			"custom:idmid": "IDM0001",
			"custom:affiliation": "[member%40osu.edu,student%40osu.edu]",
			"name": "Demo User",
			"nickname": "demo.1",
			"email": "demo.1@osu.edu"
		}"#,
	)?;
	let profile = descriptor.map_profile(&claims);

	println!("{}", serde_json::to_string_pretty(&profile)?);

	let missing = profile.missing_claims();

	if !missing.is_empty() {
		eprintln!("Sign-in carried no {missing:?}; those fields stay empty.");
	}

	Ok(())
}
