//! Routed Pages
//!
//! One component per route. Pages fetch through [`crate::api::client`] and
//! report failures as toasts or inline banners.

mod analyses;
mod invite;
mod login;
mod not_found;
mod projects;
mod search;
mod search_results;
mod settings;
mod token_detail;
mod trending;

pub use analyses::AnalysesPage;
pub use invite::InvitePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;
pub use search::SearchPage;
pub use search_results::SearchResultsPage;
pub use settings::SettingsPage;
pub use token_detail::TokenDetailPage;
pub use trending::TrendingPage;
