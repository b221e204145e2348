//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AuthConfig;
use crate::pages::{feed::FeedPage, login::LoginPage, signup::SignupPage};
use crate::state::posts::PostsState;
use crate::state::session::AuthSession;

/// Root application component.
///
/// Builds the auth session (restoring any stored user) and the post list,
/// provides both as context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(AuthSession::in_browser(AuthConfig::from_build_env()));
    provide_context(RwSignal::new(PostsState::default()));

    view! {
        <Title text="foo-rum" />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=FeedPage />
                <Route path=StaticSegment("login") view=LoginPage />
                <Route path=StaticSegment("signup") view=SignupPage />
            </Routes>
        </Router>
    }
}
