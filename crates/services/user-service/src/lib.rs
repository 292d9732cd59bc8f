//! User Service Library
//!
//! This crate owns the in-memory user directory and the use cases built
//! on it. The HTTP layer depends only on the [`UserService`] trait.

pub mod config;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::UserServiceConfig;
use crate::repository::UserStore;

pub use crate::service::{UserManager, UserService};

/// Build the user service backed by a fresh in-memory directory.
pub fn build_user_service(config: &UserServiceConfig) -> Arc<dyn UserService> {
    let store = if config.seed {
        UserStore::seeded()
    } else {
        UserStore::default()
    };
    info!(seeded = config.seed, "User directory initialized");

    Arc::new(UserManager::new(Arc::new(store)))
}
