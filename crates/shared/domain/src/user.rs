//! User domain entity and related types.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::constants::{FIELD_EMAIL, FIELD_ID, FIELD_NAME, FIELD_PHONE, PHONE_CONFLICT_MESSAGE};
use crate::error::{DomainError, DomainResult};

/// Caller-supplied user identifier
pub type UserId = i64;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Caller-supplied identifier (not guaranteed unique)
    #[cfg_attr(feature = "openapi", schema(value_type = i64, example = 1))]
    pub id: UserId,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "jane@example.com"))]
    pub email: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "Jane Doe"))]
    pub name: Option<String>,
    /// Phone numbers, unique across the directory
    #[cfg_attr(feature = "openapi", schema(example = json!(["555-0100"])))]
    pub phone: Vec<String>,
}

impl User {
    /// Check if any of the given numbers is one of this user's phones
    pub fn shares_phone_with(&self, phones: &[String]) -> bool {
        self.phone.iter().any(|p| phones.contains(p))
    }

    /// Overlay the fields present in `patch`; absent fields are kept.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
    }

    /// Three-way comparison on a single attribute.
    ///
    /// `None` means the attribute is not part of the user record, so every
    /// pair compares equal.
    pub fn compare_by(&self, other: &Self, field: Option<UserField>) -> Ordering {
        match field {
            Some(UserField::Id) => self.id.cmp(&other.id),
            // Option orders None before Some: missing values sort first
            Some(UserField::Email) => self.email.cmp(&other.email),
            Some(UserField::Name) => self.name.cmp(&other.name),
            Some(UserField::Phone) => self.phone.cmp(&other.phone),
            None => Ordering::Equal,
        }
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewUser {
    /// Identifier chosen by the caller
    #[cfg_attr(feature = "openapi", schema(value_type = i64, example = 3))]
    pub id: UserId,
    /// Email address
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "jane@example.com"))]
    pub email: Option<String>,
    /// Display name
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "Jane Doe"))]
    pub name: Option<String>,
    /// Phone numbers; none may belong to an existing user
    #[cfg_attr(feature = "openapi", schema(example = json!(["555-0199"])))]
    pub phone: Vec<String>,
}

impl From<NewUser> for User {
    fn from(new: NewUser) -> Self {
        Self {
            id: new.id,
            email: new.email,
            name: new.name,
            phone: new.phone,
        }
    }
}

/// Partial user update; absent or null fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserPatch {
    /// New identifier
    #[cfg_attr(feature = "openapi", schema(value_type = Option<i64>))]
    pub id: Option<UserId>,
    /// New email address
    pub email: Option<String>,
    /// New display name
    #[cfg_attr(feature = "openapi", schema(example = "Jane Smith"))]
    pub name: Option<String>,
    /// Replacement phone list
    pub phone: Option<Vec<String>>,
}

/// User attribute a listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Email,
    Name,
    Phone,
}

impl UserField {
    /// Resolve an attribute name. Unknown names yield `None`.
    pub fn from_attribute(name: &str) -> Option<Self> {
        match name {
            FIELD_ID => Some(UserField::Id),
            FIELD_EMAIL => Some(UserField::Email),
            FIELD_NAME => Some(UserField::Name),
            FIELD_PHONE => Some(UserField::Phone),
            _ => None,
        }
    }
}

/// Stable ascending sort of `users` by the named attribute.
///
/// Users with equal keys keep their relative order, and an unknown
/// attribute leaves the slice as it was.
pub fn sort_users(users: &mut [User], attribute: &str) {
    let field = UserField::from_attribute(attribute);
    users.sort_by(|a, b| a.compare_by(b, field));
}

/// Fail with a conflict if any of `phones` already belongs to one of `users`.
pub fn ensure_phones_available<'a>(
    users: impl IntoIterator<Item = &'a User>,
    phones: &[String],
) -> DomainResult<()> {
    if users.into_iter().any(|u| u.shares_phone_with(phones)) {
        return Err(DomainError::conflict(PHONE_CONFLICT_MESSAGE));
    }
    Ok(())
}

/// Parse a textual id (e.g. a path segment) into a [`UserId`].
pub fn parse_user_id(raw: &str) -> DomainResult<UserId> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::validation(format!("Invalid user id: {raw}")))
}
