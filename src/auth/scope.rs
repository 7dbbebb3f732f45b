//! Scope modeling for the Patreon authorization request.

// self
use crate::_prelude::*;

/// Separator used when joining scope lists into a single `scope` parameter.
pub const SCOPE_SEPARATOR: &str = " ";

/// Errors emitted when validating scope selections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ScopeError {
	/// Empty scope selections are not allowed.
	#[error("Scope selection cannot be empty.")]
	Empty,
	/// The scope string is not one of the permitted Patreon values.
	#[error("Unrecognized Patreon scope: {scope}.")]
	Unrecognized {
		/// The offending scope string.
		scope: String,
	},
}

/// Scopes permitted by the Patreon authorization endpoint.
///
/// See <https://docs.patreon.com/#scopes> for the provider documentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PatreonScope {
	/// Basic identity attributes without the email address.
	Identity,
	/// Identity attributes including the email address.
	IdentityEmail,
	/// Memberships held by the authenticated user.
	IdentityMemberships,
	/// Campaign data owned by the authenticated creator.
	Campaigns,
	/// Webhook management for owned campaigns.
	CampaignsWebhook,
	/// Member lists for owned campaigns.
	CampaignsMembers,
	/// Member email addresses for owned campaigns.
	CampaignsMembersEmails,
	/// Member shipping addresses for owned campaigns.
	CampaignsMembersAddress,
	/// Posts published on owned campaigns.
	CampaignPosts,
}
impl PatreonScope {
	/// Scope applied when the embedding application supplies none.
	pub const DEFAULT: PatreonScope = PatreonScope::IdentityEmail;

	/// Returns the provider-facing scope string.
	pub const fn as_str(self) -> &'static str {
		match self {
			PatreonScope::Identity => "identity",
			PatreonScope::IdentityEmail => "identity[email]",
			PatreonScope::IdentityMemberships => "identity.memberships",
			PatreonScope::Campaigns => "campaigns",
			PatreonScope::CampaignsWebhook => "w:campaigns.webhook",
			PatreonScope::CampaignsMembers => "campaigns.members",
			PatreonScope::CampaignsMembersEmails => "campaigns.members[emails]",
			PatreonScope::CampaignsMembersAddress => "campaigns.members.address",
			PatreonScope::CampaignPosts => "campaign.posts",
		}
	}
}
impl Display for PatreonScope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for PatreonScope {
	type Err = ScopeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"identity" => Ok(PatreonScope::Identity),
			"identity[email]" => Ok(PatreonScope::IdentityEmail),
			"identity.memberships" => Ok(PatreonScope::IdentityMemberships),
			"campaigns" => Ok(PatreonScope::Campaigns),
			"w:campaigns.webhook" => Ok(PatreonScope::CampaignsWebhook),
			"campaigns.members" => Ok(PatreonScope::CampaignsMembers),
			"campaigns.members[emails]" => Ok(PatreonScope::CampaignsMembersEmails),
			"campaigns.members.address" => Ok(PatreonScope::CampaignsMembersAddress),
			"campaign.posts" => Ok(PatreonScope::CampaignPosts),
			_ => Err(ScopeError::Unrecognized { scope: s.to_owned() }),
		}
	}
}
impl From<PatreonScope> for String {
	fn from(value: PatreonScope) -> Self {
		value.as_str().to_owned()
	}
}
impl TryFrom<String> for PatreonScope {
	type Error = ScopeError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

/// Scope selection accepted from the embedding application.
///
/// A raw string is forwarded to the authorization request unchanged, while a
/// typed list is joined with [`SCOPE_SEPARATOR`] in the given order. Raw
/// strings are deliberately not checked against [`PatreonScope`] so callers
/// can request values the provider added after this crate shipped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScopeSelection {
	/// Space-separated scope string forwarded verbatim.
	Raw(String),
	/// Explicit list of recognized scope tokens.
	List(Vec<PatreonScope>),
}
impl ScopeSelection {
	/// Validates the selection without resolving it.
	pub fn validate(&self) -> Result<(), ScopeError> {
		match self {
			ScopeSelection::Raw(raw) if raw.trim().is_empty() => Err(ScopeError::Empty),
			ScopeSelection::List(list) if list.is_empty() => Err(ScopeError::Empty),
			_ => Ok(()),
		}
	}

	/// Resolves the selection into the `scope` parameter value.
	pub fn resolve(&self) -> String {
		match self {
			ScopeSelection::Raw(raw) => raw.clone(),
			ScopeSelection::List(list) =>
				list.iter().map(|scope| scope.as_str()).collect::<Vec<_>>().join(SCOPE_SEPARATOR),
		}
	}

	/// Parses the selection into typed tokens, rejecting unknown values.
	pub fn typed(&self) -> Result<Vec<PatreonScope>, ScopeError> {
		match self {
			ScopeSelection::Raw(raw) => raw.split_whitespace().map(str::parse).collect(),
			ScopeSelection::List(list) => Ok(list.clone()),
		}
	}
}
impl Default for ScopeSelection {
	fn default() -> Self {
		ScopeSelection::List(vec![PatreonScope::DEFAULT])
	}
}
impl Display for ScopeSelection {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.resolve())
	}
}
impl From<&str> for ScopeSelection {
	fn from(value: &str) -> Self {
		ScopeSelection::Raw(value.to_owned())
	}
}
impl From<String> for ScopeSelection {
	fn from(value: String) -> Self {
		ScopeSelection::Raw(value)
	}
}
impl From<Vec<PatreonScope>> for ScopeSelection {
	fn from(value: Vec<PatreonScope>) -> Self {
		ScopeSelection::List(value)
	}
}
impl FromIterator<PatreonScope> for ScopeSelection {
	fn from_iter<I: IntoIterator<Item = PatreonScope>>(iter: I) -> Self {
		ScopeSelection::List(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn raw_selections_resolve_verbatim() {
		let selection = ScopeSelection::from("identity campaigns");

		assert_eq!(selection.resolve(), "identity campaigns");

		// Unrecognized raw values still pass through untouched.
		let custom = ScopeSelection::from("custom");

		assert_eq!(custom.resolve(), "custom");
		assert!(custom.validate().is_ok());
	}

	#[test]
	fn list_selections_join_in_given_order() {
		let selection = ScopeSelection::from(vec![
			PatreonScope::CampaignsMembers,
			PatreonScope::Identity,
			PatreonScope::IdentityEmail,
		]);

		assert_eq!(selection.resolve(), "campaigns.members identity identity[email]");
	}

	#[test]
	fn default_selection_is_identity_email() {
		assert_eq!(ScopeSelection::default().resolve(), "identity[email]");
	}

	#[test]
	fn empty_selections_fail_validation() {
		assert_eq!(ScopeSelection::from("").validate(), Err(ScopeError::Empty));
		assert_eq!(ScopeSelection::from("   ").validate(), Err(ScopeError::Empty));
		assert_eq!(
			ScopeSelection::List(Vec::new()).validate(),
			Err(ScopeError::Empty),
			"Empty scope lists must be rejected.",
		);
	}

	#[test]
	fn typed_parsing_round_trips_known_scopes() {
		let selection = ScopeSelection::from("identity[email] w:campaigns.webhook");
		let typed =
			selection.typed().expect("Known scope strings should parse into typed tokens.");

		assert_eq!(typed, vec![PatreonScope::IdentityEmail, PatreonScope::CampaignsWebhook]);

		let err = ScopeSelection::from("identity nonsense")
			.typed()
			.expect_err("Unknown scope strings must be rejected by typed parsing.");

		assert!(matches!(err, ScopeError::Unrecognized { .. }));
	}

	#[test]
	fn scope_serde_uses_provider_strings() {
		let json = serde_json::to_string(&PatreonScope::CampaignsMembersEmails)
			.expect("Scope should serialize successfully.");

		assert_eq!(json, "\"campaigns.members[emails]\"");

		let scope: PatreonScope = serde_json::from_str("\"campaign.posts\"")
			.expect("Scope should deserialize from the provider string.");

		assert_eq!(scope, PatreonScope::CampaignPosts);
		assert!(serde_json::from_str::<PatreonScope>("\"campaign\"").is_err());
	}

	#[test]
	fn selection_serde_accepts_string_or_list() {
		let raw: ScopeSelection = serde_json::from_str("\"identity campaigns\"")
			.expect("String selections should deserialize.");

		assert_eq!(raw, ScopeSelection::from("identity campaigns"));

		let list: ScopeSelection = serde_json::from_str("[\"identity\",\"campaign.posts\"]")
			.expect("List selections should deserialize.");

		assert_eq!(
			list,
			ScopeSelection::from(vec![PatreonScope::Identity, PatreonScope::CampaignPosts])
		);
	}
}
