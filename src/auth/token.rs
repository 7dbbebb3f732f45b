//! Normalized token credentials and token endpoint response parsing.

// crates.io
use url::form_urlencoded;
// self
use crate::{_prelude::*, error::AuthorizationError};

/// Redacted token secret wrapper keeping sensitive material out of logs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns true when the wrapped value is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Normalized token-exchange result handed back to the external engine.
///
/// `access_token` and `token_type` are mandatory; every other field is parsed
/// best-effort from the provider response.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCredentials {
	/// Access token secret; callers must avoid logging it.
	pub access_token: TokenSecret,
	/// Refresh token secret; empty when the provider omitted one.
	pub refresh_token: TokenSecret,
	/// Token type reported by the provider (typically `Bearer`).
	pub token_type: String,
	/// Relative access token expiry in seconds, when supplied.
	pub access_token_expires_in: Option<i64>,
	/// Relative refresh token expiry in seconds, when supplied.
	pub refresh_token_expires_in: Option<i64>,
}
impl TokenCredentials {
	/// Parses a URL-encoded token endpoint body into normalized credentials.
	///
	/// Patreon answers token exchanges with form data rather than JSON. The
	/// `access_token` and `token_type` fields are required, and an empty value
	/// counts as missing; `refresh_token` and both expiry fields degrade to
	/// empty/`None` when absent or malformed.
	pub fn from_form_body(body: &[u8]) -> Result<Self, AuthorizationError> {
		let mut access_token = None;
		let mut refresh_token = None;
		let mut token_type = None;
		let mut access_token_expires_in = None;
		let mut refresh_token_expires_in = None;

		for (key, value) in form_urlencoded::parse(body) {
			match key.as_ref() {
				"access_token" => access_token = non_empty(value.into_owned()),
				"refresh_token" => refresh_token = non_empty(value.into_owned()),
				"token_type" => token_type = non_empty(value.into_owned()),
				"expires_in" => access_token_expires_in = parse_expires_in(&value),
				"refresh_token_expires_in" => refresh_token_expires_in = parse_expires_in(&value),
				_ => {},
			}
		}

		let access_token = access_token.ok_or(AuthorizationError::MissingAccessToken)?;
		let token_type = token_type.ok_or(AuthorizationError::MissingTokenType)?;

		Ok(Self {
			access_token: TokenSecret::new(access_token),
			refresh_token: TokenSecret::new(refresh_token.unwrap_or_default()),
			token_type,
			access_token_expires_in,
			refresh_token_expires_in,
		})
	}

	/// Returns true when the provider issued a refresh token.
	pub fn has_refresh_token(&self) -> bool {
		!self.refresh_token.is_empty()
	}

	/// Access token lifetime as a [`Duration`], when the provider supplied one.
	pub fn access_token_ttl(&self) -> Option<Duration> {
		self.access_token_expires_in.map(Duration::seconds)
	}

	/// Refresh token lifetime as a [`Duration`], when the provider supplied one.
	pub fn refresh_token_ttl(&self) -> Option<Duration> {
		self.refresh_token_expires_in.map(Duration::seconds)
	}

	/// Absolute access token expiry derived from the provided issue instant.
	pub fn access_token_expires_at(&self, issued_at: OffsetDateTime) -> Option<OffsetDateTime> {
		self.access_token_ttl().map(|ttl| issued_at + ttl)
	}

	/// Absolute refresh token expiry derived from the provided issue instant.
	pub fn refresh_token_expires_at(&self, issued_at: OffsetDateTime) -> Option<OffsetDateTime> {
		self.refresh_token_ttl().map(|ttl| issued_at + ttl)
	}
}
impl Debug for TokenCredentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenCredentials")
			.field("access_token", &"<redacted>")
			.field("refresh_token", &"<redacted>")
			.field("token_type", &self.token_type)
			.field("access_token_expires_in", &self.access_token_expires_in)
			.field("refresh_token_expires_in", &self.refresh_token_expires_in)
			.finish()
	}
}

fn non_empty(value: String) -> Option<String> {
	if value.is_empty() { None } else { Some(value) }
}

/// Best-effort expiry parsing: numeric strings yield integers, anything else `None`.
fn parse_expires_in(value: &str) -> Option<i64> {
	value.parse().ok()
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn full_form_body_parses_every_field() {
		let body = b"access_token=access-1&refresh_token=refresh-1&token_type=Bearer\
			&expires_in=2678400&refresh_token_expires_in=5356800";
		let credentials = TokenCredentials::from_form_body(body)
			.expect("Complete token endpoint bodies should parse successfully.");

		assert_eq!(credentials.access_token.expose(), "access-1");
		assert_eq!(credentials.refresh_token.expose(), "refresh-1");
		assert_eq!(credentials.token_type, "Bearer");
		assert_eq!(credentials.access_token_expires_in, Some(2678400));
		assert_eq!(credentials.refresh_token_expires_in, Some(5356800));
		assert!(credentials.has_refresh_token());
	}

	#[test]
	fn minimal_form_body_degrades_optionals() {
		let credentials = TokenCredentials::from_form_body(b"access_token=X&token_type=Y")
			.expect("Minimal token endpoint bodies should parse successfully.");

		assert_eq!(credentials.access_token.expose(), "X");
		assert_eq!(credentials.token_type, "Y");
		assert_eq!(credentials.refresh_token.expose(), "");
		assert!(!credentials.has_refresh_token());
		assert_eq!(credentials.access_token_expires_in, None);
		assert_eq!(credentials.refresh_token_expires_in, None);
	}

	#[test]
	fn missing_access_token_is_an_authorization_error() {
		let err = TokenCredentials::from_form_body(b"token_type=Bearer")
			.expect_err("Bodies without an access token must fail.");

		assert_eq!(err, AuthorizationError::MissingAccessToken);
		assert_eq!(err.to_string(), "Missing access token.");

		// Present-but-empty counts as missing.
		let err = TokenCredentials::from_form_body(b"access_token=&token_type=Bearer")
			.expect_err("Empty access token values must fail.");

		assert_eq!(err, AuthorizationError::MissingAccessToken);
	}

	#[test]
	fn missing_token_type_is_an_authorization_error() {
		let err = TokenCredentials::from_form_body(b"access_token=access-1")
			.expect_err("Bodies without a token type must fail.");

		assert_eq!(err, AuthorizationError::MissingTokenType);
		assert_eq!(err.to_string(), "Missing token type.");
	}

	#[test]
	fn non_numeric_expiries_degrade_to_none() {
		let credentials = TokenCredentials::from_form_body(
			b"access_token=X&token_type=Y&expires_in=soon&refresh_token_expires_in=",
		)
		.expect("Malformed expiry fields must not fail the parse.");

		assert_eq!(credentials.access_token_expires_in, None);
		assert_eq!(credentials.refresh_token_expires_in, None);
		assert_eq!(credentials.access_token_ttl(), None);
	}

	#[test]
	fn url_encoded_values_decode() {
		let credentials =
			TokenCredentials::from_form_body(b"access_token=a%2Bb%3D&token_type=Bearer")
				.expect("Percent-encoded values should decode successfully.");

		assert_eq!(credentials.access_token.expose(), "a+b=");
	}

	#[test]
	fn expiry_helpers_compute_absolute_instants() {
		let credentials = TokenCredentials::from_form_body(
			b"access_token=X&token_type=Y&expires_in=3600&refresh_token_expires_in=7200",
		)
		.expect("Numeric expiry fields should parse successfully.");
		let issued_at = macros::datetime!(2025-01-01 00:00 UTC);

		assert_eq!(credentials.access_token_ttl(), Some(Duration::hours(1)));
		assert_eq!(
			credentials.access_token_expires_at(issued_at),
			Some(macros::datetime!(2025-01-01 01:00 UTC))
		);
		assert_eq!(
			credentials.refresh_token_expires_at(issued_at),
			Some(macros::datetime!(2025-01-01 02:00 UTC))
		);
	}

	#[test]
	fn secret_formatters_redact() {
		let credentials = TokenCredentials::from_form_body(b"access_token=hush&token_type=Bearer")
			.expect("Token endpoint body should parse successfully.");
		let rendered = format!("{credentials:?}");

		assert!(!rendered.contains("hush"));
		assert!(rendered.contains("<redacted>"));
		assert_eq!(format!("{}", credentials.access_token), "<redacted>");
	}
}
