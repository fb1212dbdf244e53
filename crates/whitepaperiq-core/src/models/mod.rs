//! API Models
//!
//! Data structures matching the backend's API contracts.

mod analysis;
mod auth;
mod organization;
mod pagination;
mod project;
mod search;

pub use analysis::*;
pub use auth::*;
pub use organization::*;
pub use pagination::{Pagination, Paginated, QueryParams, HistoryParams};
pub use project::*;
pub use search::*;
pub(crate) use search::TrendingPage;

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` as the field's default
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
