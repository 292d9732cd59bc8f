//! Domain-level constants.
//!
//! These constants define business rules and the names clients use to
//! refer to user attributes.

// =============================================================================
// User Attributes
// =============================================================================

/// Attribute name of the user identifier
pub const FIELD_ID: &str = "id";

/// Attribute name of the email address
pub const FIELD_EMAIL: &str = "email";

/// Attribute name of the display name
pub const FIELD_NAME: &str = "name";

/// Attribute name of the phone number list
pub const FIELD_PHONE: &str = "phone";

/// All attributes a directory listing can be sorted by
pub const SORTABLE_FIELDS: &[&str] = &[FIELD_ID, FIELD_EMAIL, FIELD_NAME, FIELD_PHONE];

/// Check if an attribute name refers to a known user attribute
pub fn is_sortable_field(name: &str) -> bool {
    SORTABLE_FIELDS.contains(&name)
}

// =============================================================================
// Messages
// =============================================================================

/// Entity name used in not-found errors
pub const USER_ENTITY: &str = "User";

/// Message returned when a phone number is already taken
pub const PHONE_CONFLICT_MESSAGE: &str = "Phone numbers must be unique";
