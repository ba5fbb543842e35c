//! Parser for the encoded `custom:affiliation` claim.

/// Encoded institutional domain stripped from every affiliation entry.
pub const ENCODED_DOMAIN_SUFFIX: &str = "%40osu.edu";

/// Converts an encoded affiliation claim into affiliation tags.
///
/// The claim looks like `[member%40osu.edu,staff%40osu.edu]`. The first and last characters are
/// dropped by position (no bracket matching), every [`ENCODED_DOMAIN_SUFFIX`] is removed, and
/// the rest is split on commas with each entry trimmed. Order and duplicates are preserved and
/// nothing is validated, so malformed input yields odd tags (including empty ones) instead of an
/// error.
///
/// ```
/// use oauth2_shibboleth::parse_affiliation;
///
/// assert_eq!(parse_affiliation("[member%40osu.edu, staff%40osu.edu]"), ["member", "staff"]);
/// ```
pub fn parse_affiliation(value: &str) -> Vec<String> {
	strip_outer(value)
		.replace(ENCODED_DOMAIN_SUFFIX, "")
		.split(',')
		.map(|affiliation| affiliation.trim().to_owned())
		.collect()
}

// Inputs shorter than two characters come back untouched.
fn strip_outer(value: &str) -> &str {
	let mut chars = value.chars();

	match (chars.next(), chars.next_back()) {
		(Some(_), Some(_)) => chars.as_str(),
		_ => value,
	}
}
