#![cfg(feature = "reqwest")]

// self
use oauth2_patreon::{
	auth::PatreonScope,
	error::{AuthorizationError, ConfigError, Error},
	strategy::{
		DEFAULT_TOKEN_URL, PatreonStrategy, PatreonStrategyOptions, ReqwestPatreonStrategy,
		STRATEGY_NAME, StrategyHooks,
	},
	url::Url,
};

fn options() -> PatreonStrategyOptions {
	let callback_url = Url::parse("https://example.app/callback")
		.expect("Callback URL fixture should parse successfully.");

	PatreonStrategyOptions::new("CLIENT_ID", "CLIENT_SECRET", callback_url)
}

fn strategy(options: PatreonStrategyOptions) -> ReqwestPatreonStrategy {
	PatreonStrategy::new(options).expect("Strategy should build successfully.")
}

#[test]
fn authorization_endpoint_targets_patreon_regardless_of_scope() {
	for configured in [
		options(),
		options().with_scope("custom"),
		options().with_scope(vec![PatreonScope::CampaignPosts]),
	] {
		let strategy = strategy(configured);

		assert_eq!(strategy.endpoints.authorization.host_str(), Some("www.patreon.com"));
		assert_eq!(strategy.endpoints.authorization.path(), "/oauth2/authorize");
	}
}

#[test]
fn token_and_identity_endpoints_default_to_production() {
	let strategy = strategy(options());

	assert_eq!(strategy.endpoints.token.as_str(), DEFAULT_TOKEN_URL);
	assert_eq!(
		strategy.endpoints.identity.as_str(),
		"https://www.patreon.com/api/oauth2/v2/identity"
	);
}

#[test]
fn scope_parameter_matches_the_selection() {
	// Raw strings forward verbatim, even when unrecognized.
	let raw = strategy(options().with_scope("custom"));

	assert_eq!(raw.authorization_params(), vec![("scope", "custom".to_owned())]);

	// Typed lists join with single spaces in the given order.
	let listed = strategy(
		options().with_scope(vec![PatreonScope::IdentityMemberships, PatreonScope::Identity]),
	);

	assert_eq!(
		listed.authorization_params(),
		vec![("scope", "identity.memberships identity".to_owned())]
	);

	// No selection falls back to the default scope.
	let defaulted = strategy(options());

	assert_eq!(defaulted.authorization_params(), vec![("scope", "identity[email]".to_owned())]);
}

#[test]
fn hooks_normalize_token_endpoint_bodies() {
	let strategy = strategy(options());
	let credentials = strategy
		.credentials_from_response(
			b"access_token=access-1&refresh_token=refresh-1&token_type=Bearer\
			&expires_in=2678400&refresh_token_expires_in=5356800",
		)
		.expect("Complete token endpoint bodies should parse through the hook.");

	assert_eq!(credentials.access_token.expose(), "access-1");
	assert_eq!(credentials.refresh_token.expose(), "refresh-1");
	assert_eq!(credentials.token_type, "Bearer");
	assert_eq!(credentials.access_token_expires_in, Some(2678400));
	assert_eq!(credentials.refresh_token_expires_in, Some(5356800));
}

#[test]
fn missing_token_fields_abort_with_descriptive_errors() {
	let strategy = strategy(options());
	let err = strategy
		.credentials_from_response(b"token_type=Bearer")
		.expect_err("Bodies without an access token must abort the login attempt.");

	assert!(matches!(err, Error::Authorization(AuthorizationError::MissingAccessToken)));
	assert_eq!(err.to_string(), "Missing access token.");

	let err = strategy
		.credentials_from_response(b"access_token=access-1")
		.expect_err("Bodies without a token type must abort the login attempt.");

	assert!(matches!(err, Error::Authorization(AuthorizationError::MissingTokenType)));
	assert_eq!(err.to_string(), "Missing token type.");
}

#[test]
fn provider_tag_matches_the_registration_name() {
	assert_eq!(strategy(options()).provider(), STRATEGY_NAME);
}

#[test]
fn oauth_client_configures_the_generic_engine() {
	let strategy = strategy(options());

	assert!(strategy.oauth_client().is_ok());
}

#[test]
fn insecure_endpoint_overrides_fail_construction() {
	let token_url = Url::parse("http://patreon.test/token")
		.expect("Insecure URL fixture should parse successfully.");
	let err = PatreonStrategy::new(options().with_token_url(token_url))
		.expect_err("Plain HTTP endpoint overrides must be rejected.");

	assert!(matches!(
		err,
		Error::Config(ConfigError::InsecureEndpoint { endpoint: "token", .. })
	));
}
