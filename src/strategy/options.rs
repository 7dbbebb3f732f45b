//! Configuration surface consumed by [`PatreonStrategy`](crate::strategy::PatreonStrategy).

// self
use crate::{
	_prelude::*,
	auth::{ScopeSelection, TokenSecret},
	error::ConfigError,
};

/// Default authorization endpoint.
pub const DEFAULT_AUTHORIZATION_URL: &str = "https://www.patreon.com/oauth2/authorize";
/// Default token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://www.patreon.com/api/oauth2/token";
/// Default identity ("who am I") endpoint.
pub const DEFAULT_IDENTITY_URL: &str = "https://www.patreon.com/api/oauth2/v2/identity";

/// Options record mirroring the provider credentials and endpoint overrides.
///
/// Only the application credentials and the callback URL are mandatory; the
/// scope selection defaults to `identity[email]` and every endpoint falls back
/// to the production Patreon URL.
#[derive(Clone, Debug)]
pub struct PatreonStrategyOptions {
	/// OAuth application client identifier.
	pub client_id: String,
	/// OAuth application client secret.
	pub client_secret: TokenSecret,
	/// Redirect URI registered with the provider.
	pub callback_url: Url,
	/// Requested scope selection; `None` resolves to the default scope.
	pub scope: Option<ScopeSelection>,
	/// Authorization endpoint override.
	pub authorization_url: Option<Url>,
	/// Token endpoint override.
	pub token_url: Option<Url>,
	/// Identity endpoint override.
	pub identity_url: Option<Url>,
}
impl PatreonStrategyOptions {
	/// Creates options from the mandatory application credentials.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		callback_url: Url,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: TokenSecret::new(client_secret),
			callback_url,
			scope: None,
			authorization_url: None,
			token_url: None,
			identity_url: None,
		}
	}

	/// Sets the requested scope selection.
	pub fn with_scope(mut self, scope: impl Into<ScopeSelection>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Overrides the authorization endpoint.
	pub fn with_authorization_url(mut self, url: Url) -> Self {
		self.authorization_url = Some(url);

		self
	}

	/// Overrides the token endpoint.
	pub fn with_token_url(mut self, url: Url) -> Self {
		self.token_url = Some(url);

		self
	}

	/// Overrides the identity endpoint.
	pub fn with_identity_url(mut self, url: Url) -> Self {
		self.identity_url = Some(url);

		self
	}

	/// Resolves the scope selection, validating it and applying the default.
	pub fn resolved_scope(&self) -> Result<ScopeSelection, ConfigError> {
		let scope = self.scope.clone().unwrap_or_default();

		scope.validate()?;

		Ok(scope)
	}

	/// Resolves endpoint overrides against the Patreon defaults.
	pub fn resolved_endpoints(&self) -> Result<StrategyEndpoints, ConfigError> {
		let authorization = resolve_endpoint(
			"authorization",
			self.authorization_url.clone(),
			DEFAULT_AUTHORIZATION_URL,
		)?;
		let token = resolve_endpoint("token", self.token_url.clone(), DEFAULT_TOKEN_URL)?;
		let identity = resolve_endpoint("identity", self.identity_url.clone(), DEFAULT_IDENTITY_URL)?;

		Ok(StrategyEndpoints { authorization, token, identity })
	}
}

/// Endpoint set resolved from the options record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyEndpoints {
	/// Authorization endpoint used for the login redirect.
	pub authorization: Url,
	/// Token endpoint used for the code exchange.
	pub token: Url,
	/// Identity endpoint used for the profile fetch.
	pub identity: Url,
}

fn resolve_endpoint(
	name: &'static str,
	overridden: Option<Url>,
	default: &str,
) -> Result<Url, ConfigError> {
	let url = match overridden {
		Some(url) => url,
		None => Url::parse(default)
			.map_err(|source| ConfigError::InvalidEndpoint { endpoint: name, source })?,
	};

	if url.scheme() != "https" {
		return Err(ConfigError::InsecureEndpoint { endpoint: name, url: url.to_string() });
	}

	Ok(url)
}
