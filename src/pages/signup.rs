//! Standalone sign-up route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::signup_form::SignupForm;
use crate::state::session::use_auth_session;

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = ReadSignal::from(use_auth_session().state());
    let navigate = use_navigate();

    Effect::new(move || {
        if auth.get().is_authenticated {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <div class="auth-page">
            <SignupForm />
            <p class="auth-page__switch">
                "Already have an account? "
                <a href="/login">"Sign In"</a>
            </p>
        </div>
    }
}
