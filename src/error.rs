//! Strategy-level error types shared across hooks, configuration, and transports.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical strategy error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Recoverable authorization failure that aborts the login attempt.
	#[error(transparent)]
	Authorization(#[from] AuthorizationError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Identity endpoint returned an unusable payload.
	#[error(transparent)]
	Identity(#[from] IdentityError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
}

/// User-visible authorization failures surfaced through the external engine.
///
/// Both variants abort the login attempt. Every other absent or malformed token
/// field degrades to an empty or `None` value instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum AuthorizationError {
	/// Token endpoint response omitted the `access_token` field.
	#[error("Missing access token.")]
	MissingAccessToken,
	/// Token endpoint response omitted the `token_type` field.
	#[error("Missing token type.")]
	MissingTokenType,
}

/// Configuration and validation failures raised while assembling the strategy.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// A strategy endpoint URL failed to parse.
	#[error("The {endpoint} endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must use HTTPS.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Requested scope selection cannot be resolved.
	#[error("Requested scopes are invalid.")]
	InvalidScope(#[from] crate::auth::ScopeError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Failures produced while decoding the identity endpoint response.
#[derive(Debug, ThisError)]
pub enum IdentityError {
	/// Identity endpoint responded with malformed JSON that could not be parsed.
	#[error("Identity endpoint returned malformed JSON.")]
	Malformed {
		/// Structured parsing failure including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
	/// Identity endpoint responded with a non-success status.
	#[error("Identity endpoint returned HTTP {status}.")]
	Endpoint {
		/// HTTP status code of the response.
		status: u16,
		/// Preview of the response body for diagnostics.
		body_preview: Option<String>,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the identity endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the identity endpoint.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
