//! Patreon strategy adapter and the hook seam consumed by generic engines.
//!
//! The crate supplies provider-specific behavior at three fixed extension
//! points of the redirect → callback → token exchange → identity fetch cycle:
//! authorization request parameters, token response parsing, and the identity
//! fetch. Everything else (redirects, state verification, session plumbing)
//! belongs to the embedding engine.

pub mod options;

pub use options::*;

// self
use crate::{
	_prelude::*,
	auth::{ScopeSelection, TokenCredentials, TokenSecret},
	error::IdentityError,
	http::IdentityHttpClient,
	identity::{IdentityDocument, PatreonIdentity},
	oauth::{self, PatreonOAuthClient},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestIdentityClient;

/// Name under which the strategy registers with an engine.
pub const STRATEGY_NAME: &str = "patreon";

/// Boxed future returned by [`StrategyHooks`] and [`Verifier`] implementations.
pub type StrategyFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// Provider hook points consumed by a generic OAuth 2.0 strategy engine.
///
/// The engine owns the authorization-code flow end to end; implementors only
/// decorate the authorization request, translate the token endpoint body, and
/// produce the normalized identity.
pub trait StrategyHooks
where
	Self: Send + Sync,
{
	/// Normalized identity type handed to the verification callback.
	type Identity;

	/// Stable provider tag used for registration and identity stamping.
	fn provider(&self) -> &'static str;

	/// Extra query parameters appended to the authorization redirect.
	///
	/// The engine contributes `client_id`, `redirect_uri`, `response_type`, and
	/// `state`; hooks only supply provider-specific additions.
	fn authorization_params(&self) -> Vec<(&'static str, String)>;

	/// Parses the raw token endpoint body into normalized credentials.
	fn credentials_from_response(&self, body: &[u8]) -> Result<TokenCredentials>;

	/// Fetches and normalizes the provider identity for an access token.
	fn fetch_identity<'a>(&'a self, access_token: &'a str) -> StrategyFuture<'a, Self::Identity>;
}

/// Parameters handed to the application's verification callback after a
/// successful exchange.
#[derive(Clone, Debug)]
pub struct VerifyParams {
	/// Normalized identity produced by the identity fetch.
	pub identity: PatreonIdentity,
	/// Normalized credentials produced by the token exchange.
	pub credentials: TokenCredentials,
}

/// Verification callback seam supplied by the embedding application.
///
/// Engines invoke the verifier once the identity fetch succeeds; the returned
/// user value is whatever the application persists in its session layer.
pub trait Verifier<User>
where
	Self: Send + Sync,
{
	/// Maps the verified identity + credentials pair onto an application user.
	fn verify<'a>(&'a self, params: VerifyParams) -> StrategyFuture<'a, User>;
}
impl<User, F> Verifier<User> for F
where
	F: Fn(VerifyParams) -> Result<User> + Send + Sync,
	User: Send + 'static,
{
	fn verify<'a>(&'a self, params: VerifyParams) -> StrategyFuture<'a, User> {
		let result = self(params);

		Box::pin(async move { result })
	}
}

#[cfg(feature = "reqwest")]
/// Strategy specialized for the crate's default reqwest transport.
pub type ReqwestPatreonStrategy = PatreonStrategy<ReqwestIdentityClient>;

/// Patreon strategy adapter generic over the identity transport.
///
/// Options are resolved eagerly during construction so every authentication
/// attempt stays stateless: no mutable state is held between requests.
pub struct PatreonStrategy<C>
where
	C: ?Sized + IdentityHttpClient,
{
	/// Resolved endpoint set (authorization, token, identity).
	pub endpoints: StrategyEndpoints,
	/// OAuth application client identifier.
	pub client_id: String,
	/// Redirect URI registered with the provider.
	pub callback_url: Url,
	/// Resolved scope selection.
	pub scope: ScopeSelection,
	client_secret: TokenSecret,
	http_client: Arc<C>,
}
impl<C> PatreonStrategy<C>
where
	C: ?Sized + IdentityHttpClient,
{
	/// Creates a strategy that reuses the caller-provided transport.
	pub fn with_http_client(
		options: PatreonStrategyOptions,
		http_client: impl Into<Arc<C>>,
	) -> Result<Self> {
		let endpoints = options.resolved_endpoints()?;
		let scope = options.resolved_scope()?;

		Ok(Self {
			endpoints,
			client_id: options.client_id,
			callback_url: options.callback_url,
			scope,
			client_secret: options.client_secret,
			http_client: http_client.into(),
		})
	}

	/// Resolved `scope` parameter value forwarded to the authorization request.
	pub fn scope_value(&self) -> String {
		self.scope.resolve()
	}

	/// Configures the generic `oauth2` engine with this strategy's endpoints and
	/// credentials.
	pub fn oauth_client(&self) -> Result<PatreonOAuthClient> {
		oauth::configure_oauth_client(
			&self.endpoints,
			&self.client_id,
			self.client_secret.expose(),
			&self.callback_url,
		)
	}
}
#[cfg(feature = "reqwest")]
impl PatreonStrategy<ReqwestIdentityClient> {
	/// Creates a strategy with the crate's default reqwest transport.
	pub fn new(options: PatreonStrategyOptions) -> Result<Self> {
		Self::with_http_client(options, ReqwestIdentityClient::default())
	}
}
impl<C> StrategyHooks for PatreonStrategy<C>
where
	C: ?Sized + IdentityHttpClient,
{
	type Identity = PatreonIdentity;

	fn provider(&self) -> &'static str {
		STRATEGY_NAME
	}

	fn authorization_params(&self) -> Vec<(&'static str, String)> {
		vec![("scope", self.scope_value())]
	}

	fn credentials_from_response(&self, body: &[u8]) -> Result<TokenCredentials> {
		const KIND: FlowKind = FlowKind::TokenExchange;

		let _guard = FlowSpan::new(KIND, "credentials_from_response").entered();

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = TokenCredentials::from_form_body(body).map_err(Error::from);

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}

	fn fetch_identity<'a>(&'a self, access_token: &'a str) -> StrategyFuture<'a, PatreonIdentity> {
		const KIND: FlowKind = FlowKind::Identity;

		let span = FlowSpan::new(KIND, "fetch_identity");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let fut = span.instrument(async move {
			let response =
				self.http_client.get_with_bearer(&self.endpoints.identity, access_token).await?;

			if !response.is_success() {
				return Err(IdentityError::Endpoint {
					status: response.status,
					body_preview: response.body_preview(),
				}
				.into());
			}

			let document = IdentityDocument::from_json(&response.body, response.status)?;

			Ok(document.normalize())
		});

		Box::pin(async move {
			let result = fut.await;

			match &result {
				Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
				Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
			}

			result
		})
	}
}
impl<C> Debug for PatreonStrategy<C>
where
	C: ?Sized + IdentityHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("PatreonStrategy")
			.field("endpoints", &self.endpoints)
			.field("client_id", &self.client_id)
			.field("callback_url", &self.callback_url)
			.field("scope", &self.scope)
			.field("client_secret_set", &!self.client_secret.is_empty())
			.finish()
	}
}
