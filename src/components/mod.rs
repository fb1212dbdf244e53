//! UI Components
//!
//! Layouts and reusable Leptos components.

mod add_member_modal;
mod analysis_report;
mod auth_layout;
mod delete_confirm_button;
mod form_field;
mod main_layout;
mod member_modal;
mod pagination_bar;
mod protected_route;
mod sidebar;
mod toast_stack;

pub use add_member_modal::AddMemberModal;
pub use analysis_report::AnalysisReport;
pub use auth_layout::AuthLayout;
pub use delete_confirm_button::DeleteConfirmButton;
pub use form_field::FormField;
pub use main_layout::MainLayout;
pub use member_modal::MemberModal;
pub use pagination_bar::PaginationBar;
pub use protected_route::ProtectedRoute;
pub use sidebar::Sidebar;
pub use toast_stack::ToastStack;
