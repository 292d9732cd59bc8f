//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified HTTP error handling
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, ErrorBody, ErrorResponse};
