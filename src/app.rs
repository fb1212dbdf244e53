//! WhitepaperIQ Frontend App
//!
//! Root component: shared state, session startup and routing.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{ProtectedRoute, ToastStack};
use crate::context::AppContext;
use crate::pages::{
    AnalysesPage, InvitePage, LoginPage, NotFoundPage, ProjectsPage, SearchPage, SearchResultsPage, SettingsPage,
    TokenDetailPage, TrendingPage,
};
use crate::session;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::restored());
    provide_context(store);
    provide_context(AppContext::new());

    session::start(store);

    view! {
        <Router>
            <ToastStack />
            <Routes fallback=NotFoundPage>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/invite/:token") view=InvitePage />
                <Route path=path!("/") view=|| view! { <Redirect path="/search" /> } />
                <Route path=path!("/search") view=|| view! { <ProtectedRoute><SearchPage /></ProtectedRoute> } />
                <Route
                    path=path!("/search/results")
                    view=|| view! { <ProtectedRoute><SearchResultsPage /></ProtectedRoute> }
                />
                <Route
                    path=path!("/token/:ticker")
                    view=|| view! { <ProtectedRoute><TokenDetailPage /></ProtectedRoute> }
                />
                <Route path=path!("/projects") view=|| view! { <ProtectedRoute><ProjectsPage /></ProtectedRoute> } />
                <Route path=path!("/trending") view=|| view! { <ProtectedRoute><TrendingPage /></ProtectedRoute> } />
                <Route path=path!("/analyses") view=|| view! { <ProtectedRoute><AnalysesPage /></ProtectedRoute> } />
                <Route path=path!("/settings") view=|| view! { <ProtectedRoute><SettingsPage /></ProtectedRoute> } />
            </Routes>
        </Router>
    }
}
