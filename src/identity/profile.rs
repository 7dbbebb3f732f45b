//! Identity endpoint document shapes and the normalized Patreon profile.

// self
use crate::{_prelude::*, error::IdentityError, identity::SocialConnections};

/// Fixed provider tag stamped onto every normalized identity.
pub const PROVIDER: &str = "patreon";

/// Raw identity resource as the identity endpoint returns it.
///
/// The document keeps the provider's field names so `serde` can decode the
/// response directly; [`IdentityDocument::normalize`] reshapes it into the
/// engine-facing [`PatreonIdentity`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityDocument {
	/// Provider-side identity identifier.
	pub id: String,
	/// Resource type reported by the provider (typically `user`).
	#[serde(rename = "type")]
	pub kind: String,
	/// Identity attributes block.
	pub attributes: IdentityAttributes,
	/// Relationship links attached to the identity.
	pub relationships: Option<IdentityRelationships>,
}
impl IdentityDocument {
	/// Decodes an identity endpoint body, reporting the JSON path on failure.
	pub fn from_json(body: &[u8], status: u16) -> Result<Self, IdentityError> {
		let mut deserializer = serde_json::Deserializer::from_slice(body);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| IdentityError::Malformed { source, status })
	}

	/// Reshapes the raw document into the normalized identity record.
	pub fn normalize(self) -> PatreonIdentity {
		let display_name = self.attributes.full_name.clone();

		PatreonIdentity {
			provider: PROVIDER.into(),
			display_name,
			id: self.id,
			kind: self.kind,
			attributes: self.attributes,
			relationships: self.relationships,
		}
	}
}
/// Identity attributes block mirroring the provider response.
///
/// Attribute availability tracks the granted scopes, so every field falls back
/// to an empty default instead of failing the decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityAttributes {
	/// Free-form self description.
	pub about: String,
	/// Account creation timestamp as reported by the provider.
	pub created: String,
	/// Email address; requires the `identity[email]` scope.
	pub email: String,
	/// Given name.
	pub first_name: String,
	/// Full display name.
	pub full_name: String,
	/// Profile image URL.
	pub image_url: String,
	/// Family name.
	pub last_name: String,
	/// Connected social accounts.
	pub social_connections: SocialConnections,
	/// Thumbnail image URL.
	pub thumb_url: String,
	/// Canonical profile URL.
	pub url: String,
	/// Vanity handle.
	pub vanity: String,
}

/// Relationship links attached to the identity resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityRelationships {
	/// Campaign owned by the identity.
	pub campaign: Option<CampaignRelationship>,
	/// Memberships held by the identity.
	pub memberships: Option<MembershipsRelationship>,
}

/// Campaign relationship with its related-resource link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignRelationship {
	/// Reference to the campaign resource.
	pub data: ResourceRef,
	/// Links block for the campaign resource.
	pub links: RelationshipLinks,
}

/// Memberships relationship carrying the related resource references.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MembershipsRelationship {
	/// References to the membership resources.
	pub data: Vec<ResourceRef>,
}

/// Links block attached to a relationship.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipLinks {
	/// URL of the related resource.
	pub related: String,
}

/// Reference to a related resource by identifier and type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRef {
	/// Identifier of the related resource.
	pub id: String,
	/// Type of the related resource.
	#[serde(rename = "type")]
	pub kind: String,
}

/// Normalized identity record handed to the external engine.
///
/// Adds the fixed provider tag and a display name derived from the full-name
/// attribute on top of the raw document fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatreonIdentity {
	/// Fixed provider tag (always `patreon`).
	#[serde(default = "default_provider")]
	pub provider: String,
	/// Display name derived from the full-name attribute.
	pub display_name: String,
	/// Provider-side identity identifier.
	pub id: String,
	/// Resource type reported by the provider.
	#[serde(rename = "type")]
	pub kind: String,
	/// Identity attributes block.
	pub attributes: IdentityAttributes,
	/// Relationship links attached to the identity.
	pub relationships: Option<IdentityRelationships>,
}
impl PatreonIdentity {
	/// Email attribute, when the granted scopes exposed one.
	pub fn email(&self) -> Option<&str> {
		non_empty(&self.attributes.email)
	}

	/// Vanity handle, when set.
	pub fn vanity(&self) -> Option<&str> {
		non_empty(&self.attributes.vanity)
	}

	/// Campaign resource reference, when the identity owns a campaign.
	pub fn campaign(&self) -> Option<&ResourceRef> {
		self.relationships.as_ref()?.campaign.as_ref().map(|campaign| &campaign.data)
	}

	/// Membership resource references held by the identity.
	pub fn memberships(&self) -> &[ResourceRef] {
		self.relationships
			.as_ref()
			.and_then(|relationships| relationships.memberships.as_ref())
			.map(|memberships| memberships.data.as_slice())
			.unwrap_or_default()
	}
}

fn default_provider() -> String {
	PROVIDER.into()
}

fn non_empty(value: &str) -> Option<&str> {
	if value.is_empty() { None } else { Some(value) }
}
