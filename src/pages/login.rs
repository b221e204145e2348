//! Standalone sign-in route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::login_form::LoginForm;
use crate::state::session::use_auth_session;

/// Sign-in page. Returns to the feed once the session is authenticated.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = ReadSignal::from(use_auth_session().state());
    let navigate = use_navigate();

    Effect::new(move || {
        if auth.get().is_authenticated {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <div class="auth-page">
            <LoginForm />
            <p class="auth-page__switch">
                "Do not have an account? "
                <a href="/signup">"Sign Up"</a>
            </p>
        </div>
    }
}
