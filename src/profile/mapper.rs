//! Profile mappers that turn ID-token claims into the profile record returned to the host.

// self
use crate::{
	_prelude::*,
	obs::{self, Stage, StageOutcome, StageSpan},
	profile::{
		CLAIM_AFFILIATION, CLAIM_DEPARTMENT, CLAIM_EMAIL, CLAIM_IDMID, CLAIM_NAME, CLAIM_NICKNAME,
		CLAIM_OSUID, CLAIM_SUBJECT, Claims, parse_affiliation,
	},
};

/// Base URL of the OSU photo service used for avatars.
pub const AVATAR_BASE_URL: &str = "https://opic.osu.edu";
/// Width requested from the photo service.
pub const AVATAR_WIDTH: u32 = 128;

/// Maps one sign-in's claims into a profile record.
///
/// Mappers are pure: the same claims must always produce the same profile. Any
/// `Fn(&Claims) -> P + Send + Sync` closure is a mapper.
pub trait ProfileMapper: Send + Sync {
	/// Profile record produced by the mapper.
	type Profile;

	/// Builds the profile for one sign-in.
	fn map_profile(&self, claims: &Claims) -> Self::Profile;
}
impl<F, P> ProfileMapper for F
where
	F: Send + Sync + Fn(&Claims) -> P,
{
	type Profile = P;

	fn map_profile(&self, claims: &Claims) -> P {
		self(claims)
	}
}

/// Normalized user profile exposing the Shibboleth attributes.
///
/// Every field is optional: an absent claim leaves its field empty instead of failing the
/// sign-in. Use [`ShibbolethProfile::missing_claims`] to reject incomplete profiles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShibbolethProfile {
	/// Subject identifier (`sub`).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Institutional OSU identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub osuid: Option<String>,
	/// Identity-management identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub idmid: Option<String>,
	/// Display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Nickname.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub nickname: Option<String>,
	/// Email address.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	/// Avatar URL derived from the email.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
	/// Affiliation tags such as `member` or `staff`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub affiliations: Option<Vec<String>>,
	/// Department name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub department: Option<String>,
}
impl ShibbolethProfile {
	/// Lists the claim keys whose absence left a field empty, in field order.
	pub fn missing_claims(&self) -> Vec<&'static str> {
		[
			(self.id.is_none(), CLAIM_SUBJECT),
			(self.osuid.is_none(), CLAIM_OSUID),
			(self.idmid.is_none(), CLAIM_IDMID),
			(self.name.is_none(), CLAIM_NAME),
			(self.nickname.is_none(), CLAIM_NICKNAME),
			(self.email.is_none(), CLAIM_EMAIL),
			(self.affiliations.is_none(), CLAIM_AFFILIATION),
			(self.department.is_none(), CLAIM_DEPARTMENT),
		]
		.into_iter()
		.filter_map(|(missing, key)| missing.then_some(key))
		.collect()
	}

	/// Affiliation tags, empty when the claim was absent.
	pub fn affiliations(&self) -> &[String] {
		self.affiliations.as_deref().unwrap_or_default()
	}

	/// Checks whether the profile carries the given affiliation tag.
	pub fn has_affiliation(&self, tag: &str) -> bool {
		self.affiliations().iter().any(|affiliation| affiliation == tag)
	}
}

/// Default mapper for the Shibboleth bridge.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShibbolethProfileMapper;
impl ProfileMapper for ShibbolethProfileMapper {
	type Profile = ShibbolethProfile;

	fn map_profile(&self, claims: &Claims) -> ShibbolethProfile {
		const STAGE: Stage = Stage::ProfileMapping;

		let _span = StageSpan::new(STAGE, "shibboleth_profile").entered();

		obs::record_stage_outcome(STAGE, StageOutcome::Attempt);

		let text = |key: &str| claims.get_str(key).map(str::to_owned);
		let email = text(CLAIM_EMAIL);
		let profile = ShibbolethProfile {
			id: text(CLAIM_SUBJECT),
			osuid: text(CLAIM_OSUID),
			idmid: text(CLAIM_IDMID),
			name: text(CLAIM_NAME),
			nickname: text(CLAIM_NICKNAME),
			image: email.as_deref().map(avatar_url),
			email,
			affiliations: claims.get_str(CLAIM_AFFILIATION).map(parse_affiliation),
			department: text(CLAIM_DEPARTMENT),
		};
		let missing = profile.missing_claims();

		if missing.is_empty() {
			obs::record_stage_outcome(STAGE, StageOutcome::Success);
		} else {
			obs::trace_missing_claims(&missing);
			obs::record_stage_outcome(STAGE, StageOutcome::Degraded);
		}

		profile
	}
}

/// Builds the OSU photo-service avatar URL for an email address.
pub fn avatar_url(email: &str) -> String {
	format!("{AVATAR_BASE_URL}/{email}?width={AVATAR_WIDTH}")
}
