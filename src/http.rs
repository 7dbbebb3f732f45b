//! Transport primitives for the identity fetch.
//!
//! The module exposes [`IdentityHttpClient`] so downstream crates can integrate
//! custom HTTP clients without pulling in reqwest. Implementations issue a
//! single bearer-authenticated GET and hand back the status code plus raw body;
//! decoding stays inside the strategy so transports never learn about the
//! provider's payload shapes.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::{ACCEPT, AUTHORIZATION};
// self
use crate::{_prelude::*, error::TransportError};

/// Boxed future returned by [`IdentityHttpClient`] implementations.
pub type IdentityFuture<'a> =
	Pin<Box<dyn Future<Output = Result<IdentityResponse, TransportError>> + 'a + Send>>;

/// Raw identity endpoint response captured by the transport.
///
/// Transports report every completed HTTP exchange here, including non-2xx
/// statuses; only connection-level failures surface as [`TransportError`].
#[derive(Clone, Debug)]
pub struct IdentityResponse {
	/// HTTP status code returned by the identity endpoint.
	pub status: u16,
	/// Raw response body bytes.
	pub body: Vec<u8>,
}
impl IdentityResponse {
	const BODY_PREVIEW_LIMIT: usize = 256;

	/// Returns true when the status code is in the 2xx range.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Truncated, lossy body preview suitable for diagnostics.
	pub fn body_preview(&self) -> Option<String> {
		if self.body.is_empty() {
			return None;
		}

		let text = String::from_utf8_lossy(&self.body);

		if text.chars().count() <= Self::BODY_PREVIEW_LIMIT {
			return Some(text.into_owned());
		}

		let mut buf = String::new();

		for (idx, ch) in text.chars().enumerate() {
			if idx >= Self::BODY_PREVIEW_LIMIT {
				buf.push('…');

				break;
			}
			buf.push(ch);
		}

		Some(buf)
	}
}

/// Abstraction over HTTP transports capable of executing the bearer-authenticated
/// identity fetch.
///
/// The trait is the strategy's only dependency on an HTTP stack. Implementations
/// must be `Send + Sync + 'static` so a strategy can be shared across tasks, and
/// the returned futures must be `Send` for the lifetime of the in-flight request.
pub trait IdentityHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Issues a GET with an `Authorization: Bearer <token>` header against `url`.
	fn get_with_bearer<'a>(&'a self, url: &'a Url, access_token: &'a str) -> IdentityFuture<'a>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestIdentityClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestIdentityClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestIdentityClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestIdentityClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl IdentityHttpClient for ReqwestIdentityClient {
	fn get_with_bearer<'a>(&'a self, url: &'a Url, access_token: &'a str) -> IdentityFuture<'a> {
		let request = self
			.0
			.get(url.clone())
			.header(ACCEPT, "application/json")
			.header(AUTHORIZATION, format!("Bearer {access_token}"));

		Box::pin(async move {
			let response = request.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(IdentityResponse { status, body })
		})
	}
}
