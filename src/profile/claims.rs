//! Raw ID-token claims delivered by the identity provider at sign-in.

// crates.io
use serde_json::{Map, Value};
// self
use crate::_prelude::*;

/// Subject identifier claim.
pub const CLAIM_SUBJECT: &str = "sub";
/// Display name claim.
pub const CLAIM_NAME: &str = "name";
/// Email address claim.
pub const CLAIM_EMAIL: &str = "email";
/// Nickname claim.
pub const CLAIM_NICKNAME: &str = "nickname";
/// Institutional OSU identifier released by Shibboleth.
pub const CLAIM_OSUID: &str = "custom:osuid";
/// Identity-management identifier released by Shibboleth.
pub const CLAIM_IDMID: &str = "custom:idmid";
/// Encoded affiliation list released by Shibboleth.
pub const CLAIM_AFFILIATION: &str = "custom:affiliation";
/// Department released by Shibboleth.
pub const CLAIM_DEPARTMENT: &str = "custom:department";

/// Errors raised while reading a claim payload.
#[derive(Debug, ThisError)]
pub enum ClaimsError {
	/// Payload is not valid JSON or not a JSON object.
	#[error("Claim payload is invalid at `{path}`.", path = .source.path())]
	InvalidPayload {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// A decoded JSON value is not an object.
	#[error("Claim payload must be a JSON object, got {kind}.")]
	NotAnObject {
		/// JSON kind that was supplied instead.
		kind: &'static str,
	},
}

/// Open-ended claim map keyed by claim name.
///
/// Values stay loosely typed; accessors return `None` instead of failing when a claim is absent
/// or carries a different JSON type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);
impl Claims {
	/// Creates an empty claim map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses claims from a JSON object document.
	pub fn from_json(payload: &str) -> Result<Self, ClaimsError> {
		let de = &mut serde_json::Deserializer::from_str(payload);

		serde_path_to_error::deserialize(de).map_err(|source| ClaimsError::InvalidPayload { source })
	}

	/// Wraps an already decoded JSON value.
	pub fn from_value(value: Value) -> Result<Self, ClaimsError> {
		match value {
			Value::Object(map) => Ok(Self(map)),
			other => Err(ClaimsError::NotAnObject { kind: json_kind(&other) }),
		}
	}

	/// Adds or replaces a claim.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.0.insert(key.into(), value.into());

		self
	}

	/// Returns the raw value of a claim.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Returns a claim's value when it is a JSON string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(Value::as_str)
	}

	/// Checks whether the claim is present, whatever its type.
	pub fn contains(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Subject identifier (`sub`).
	pub fn subject(&self) -> Option<&str> {
		self.get_str(CLAIM_SUBJECT)
	}

	/// Number of claims carried.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no claims are carried.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates claims in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.0.iter()
	}

	/// Unwraps the underlying JSON map.
	pub fn into_inner(self) -> Map<String, Value> {
		self.0
	}
}
impl From<Map<String, Value>> for Claims {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}
impl TryFrom<Value> for Claims {
	type Error = ClaimsError;

	fn try_from(value: Value) -> Result<Self, Self::Error> {
		Self::from_value(value)
	}
}
impl<K> FromIterator<(K, Value)> for Claims
where
	K: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, Value)>,
	{
		Self(iter.into_iter().map(|(key, value)| (key.into(), value)).collect())
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn accessors_tolerate_missing_and_mistyped_claims() {
		let claims = Claims::new().with(CLAIM_SUBJECT, "abc-123").with(CLAIM_OSUID, 42);

		assert_eq!(claims.subject(), Some("abc-123"));
		assert_eq!(claims.get_str(CLAIM_OSUID), None);
		assert!(claims.contains(CLAIM_OSUID));
		assert_eq!(claims.get_str(CLAIM_DEPARTMENT), None);
		assert!(!claims.contains(CLAIM_DEPARTMENT));
		assert_eq!(claims.len(), 2);
	}

	#[test]
	fn from_json_requires_an_object() {
		let claims = Claims::from_json(r#"{"sub":"abc","custom:department":"Physics","exp":1}"#)
			.expect("Object payload should parse.");

		assert_eq!(claims.get_str(CLAIM_DEPARTMENT), Some("Physics"));
		assert!(matches!(Claims::from_json("[1, 2]"), Err(ClaimsError::InvalidPayload { .. })));
		assert!(matches!(Claims::from_json("{"), Err(ClaimsError::InvalidPayload { .. })));
	}

	#[test]
	fn from_value_reports_json_kind() {
		let err = Claims::from_value(json!("sub")).expect_err("Strings are not claim maps.");

		assert!(matches!(err, ClaimsError::NotAnObject { kind: "a string" }));
		assert_eq!(err.to_string(), "Claim payload must be a JSON object, got a string.");

		let claims = Claims::try_from(json!({ "sub": "abc" })).expect("Objects are claim maps.");

		assert_eq!(claims.subject(), Some("abc"));
	}

	#[test]
	fn collects_from_pairs() {
		let claims: Claims =
			[(CLAIM_EMAIL, json!("user@osu.edu")), (CLAIM_NAME, json!("Brutus"))].into_iter().collect();

		assert_eq!(claims.get_str(CLAIM_EMAIL), Some("user@osu.edu"));
		assert_eq!(claims.iter().count(), 2);
	}
}
