//! Engine configuration facade for the generic `oauth2` client.
//!
//! The strategy never implements the authorization-code exchange itself. This
//! module wires Patreon's endpoints and the application credentials into
//! `oauth2`'s [`BasicClient`] so the embedding application can drive the
//! redirect, state verification, and code exchange with the generic engine and
//! feed the results back through the strategy hooks.

pub use oauth2;

// crates.io
use oauth2::{
	AuthType, AuthUrl, ClientId, ClientSecret, EndpointNotSet, EndpointSet, RedirectUrl, TokenUrl,
	basic::BasicClient,
};
// self
use crate::{_prelude::*, error::ConfigError, strategy::StrategyEndpoints};

/// `oauth2` client carrying the strategy's authorization/token endpoints and
/// redirect URL.
pub type PatreonOAuthClient =
	BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Configures the generic `oauth2` engine with the strategy endpoints and
/// credentials.
///
/// Patreon accepts client credentials as POST body parameters, so the client
/// is switched to [`AuthType::RequestBody`].
pub fn configure_oauth_client(
	endpoints: &StrategyEndpoints,
	client_id: &str,
	client_secret: &str,
	callback_url: &Url,
) -> Result<PatreonOAuthClient> {
	let auth_url = AuthUrl::new(endpoints.authorization.to_string())
		.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "authorization", source })?;
	let token_url = TokenUrl::new(endpoints.token.to_string())
		.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "token", source })?;
	let redirect_url = RedirectUrl::new(callback_url.to_string())
		.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "callback", source })?;
	let oauth_client = BasicClient::new(ClientId::new(client_id.to_owned()))
		.set_client_secret(ClientSecret::new(client_secret.to_owned()))
		.set_auth_uri(auth_url)
		.set_token_uri(token_url)
		.set_redirect_uri(redirect_url)
		.set_auth_type(AuthType::RequestBody);

	Ok(oauth_client)
}
