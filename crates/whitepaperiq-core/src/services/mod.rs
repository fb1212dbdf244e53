//! Service Operations
//!
//! One module per backend area. Each adds methods to [`crate::ApiClient`].

pub mod analysis;
pub mod auth;
pub mod organization;
pub mod project;
pub mod search;
pub mod user;
