//! Patreon strategy for Rust's generic OAuth 2.0 engines—scope resolution, token
//! normalization, and identity reshaping in one adapter crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod http;
pub mod identity;
pub mod oauth;
pub mod obs;
pub mod strategy;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		http::ReqwestIdentityClient,
		strategy::{PatreonStrategy, PatreonStrategyOptions},
	};

	/// Strategy type alias used by reqwest-backed integration tests.
	pub type ReqwestTestStrategy = PatreonStrategy<ReqwestIdentityClient>;

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_identity_client() -> ReqwestIdentityClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestIdentityClient::with_client(client)
	}

	/// Constructs a [`PatreonStrategy`] pointed at a mock identity endpoint, backed by the
	/// insecure reqwest transport used across integration tests.
	pub fn build_reqwest_test_strategy(identity_url: Url) -> ReqwestTestStrategy {
		let callback_url = Url::parse("https://app.example.com/callback")
			.expect("Failed to parse test callback URL.");
		let options = PatreonStrategyOptions::new("client-test", "secret-test", callback_url)
			.with_identity_url(identity_url);

		PatreonStrategy::with_http_client(options, test_reqwest_identity_client())
			.expect("Failed to build test strategy.")
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {httpmock as _, tokio as _};
