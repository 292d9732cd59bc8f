//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the user record, its partial-update and ordering rules, and the seed
//! data the directory starts from.

pub mod constants;
pub mod error;
pub mod seed;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use seed::seed_users;
pub use user::{
    ensure_phones_available, parse_user_id, sort_users, NewUser, User, UserField, UserId, UserPatch,
};
