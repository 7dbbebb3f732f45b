//! Social connection sub-objects attached to Patreon identities.

// self
use crate::_prelude::*;

/// Connected social accounts reported by the identity endpoint.
///
/// Most platforms expose a nullable identifier string; Instagram, Twitter, and
/// YouTube return richer sub-objects with platform-specific fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConnections {
	/// Discord account identifier.
	pub discord: Option<String>,
	/// Facebook account identifier.
	pub facebook: Option<String>,
	/// Google account identifier.
	pub google: Option<String>,
	/// Instagram connection details.
	pub instagram: Option<InstagramConnection>,
	/// Reddit account identifier.
	pub reddit: Option<String>,
	/// Spotify account identifier.
	pub spotify: Option<String>,
	/// Spotify open-access account identifier.
	pub spotify_open_access: Option<String>,
	/// TikTok account identifier.
	pub tiktok: Option<String>,
	/// Twitch account identifier.
	pub twitch: Option<String>,
	/// Twitter connection details.
	pub twitter: Option<TwitterConnection>,
	/// Vimeo account identifier.
	pub vimeo: Option<String>,
	/// YouTube connection details.
	pub youtube: Option<YoutubeConnection>,
}

/// Instagram account linked to the Patreon identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstagramConnection {
	/// Scopes granted to the linked account.
	pub scopes: Vec<String>,
	/// Public profile URL.
	pub url: String,
	/// Platform-side user identifier.
	pub user_id: String,
}

/// Twitter account linked to the Patreon identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterConnection {
	/// Public profile URL.
	pub url: String,
	/// Platform-side user identifier.
	pub user_id: String,
}

/// YouTube account linked to the Patreon identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeConnection {
	/// Scopes granted to the linked account.
	pub scopes: Vec<String>,
	/// Public channel URL.
	pub url: String,
	/// Platform-side user identifier.
	pub user_id: String,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn nullable_platforms_deserialize() {
		let connections: SocialConnections = serde_json::from_str(
			r#"{
				"discord": "discord-1",
				"facebook": null,
				"twitter": {"url": "https://twitter.com/alice", "user_id": "42"},
				"youtube": {"scopes": ["readonly"], "url": "https://youtube.com/@alice", "user_id": "UC1"}
			}"#,
		)
		.expect("Social connections should deserialize with mixed null/object values.");

		assert_eq!(connections.discord.as_deref(), Some("discord-1"));
		assert_eq!(connections.facebook, None);
		assert_eq!(connections.google, None);

		let twitter =
			connections.twitter.expect("Twitter connection should be populated when present.");

		assert_eq!(twitter.user_id, "42");

		let youtube =
			connections.youtube.expect("YouTube connection should be populated when present.");

		assert_eq!(youtube.scopes, vec!["readonly".to_owned()]);
	}

	#[test]
	fn missing_block_defaults_to_disconnected() {
		let connections: SocialConnections =
			serde_json::from_str("{}").expect("An empty object should deserialize to defaults.");

		assert_eq!(connections, SocialConnections::default());
	}
}
