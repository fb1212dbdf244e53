//! WhitepaperIQ Core
//!
//! Everything the web app needs that does not touch the DOM:
//! - models: DTOs mirrored from the backend API
//! - client + services: typed wrappers around the REST endpoints
//! - storage + session: persisted session keys and the session state machine
//! - validation, filters, format, links: form checks and view helpers

pub mod config;
pub mod envelope;
pub mod error;
pub mod filters;
pub mod format;
pub mod links;
pub mod models;
pub mod session;
pub mod storage;
pub mod transport;
pub mod validation;

mod client;
mod services;

#[cfg(test)]
mod testing;
#[cfg(test)]
mod tests;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use services::search::DEFAULT_SEARCH_LIMIT;
pub use session::{SessionEffect, SessionEvent, SessionMachine, SessionState, StorageChange};
pub use storage::{MemoryStorage, SessionStorage};
pub use transport::{ApiRequest, HttpTransport, Method, RawResponse, ReqwestTransport};
