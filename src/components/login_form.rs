//! Email + password sign-in form.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;

use crate::net::types::Credentials;
use crate::state::session::use_auth_session;

fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Sign-in form bound to the session facade.
///
/// Clears any stale session error when mounted. `on_switch`, when given,
/// renders a "Sign Up" link that hands over to the sign-up flow.
#[component]
pub fn LoginForm(#[prop(optional)] on_switch: Option<Callback<()>>) -> impl IntoView {
    let session = use_auth_session();
    session.clear_error();
    let auth = ReadSignal::from(session.state());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => {
                form_error.set(None);
                let session = session.clone();
                leptos::task::spawn_local(async move { session.login(credentials).await });
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    let error_text = move || form_error.get().map(str::to_owned).or_else(|| auth.get().error);
    let busy = move || auth.get().loading;

    view! {
        <div class="auth-card">
            <p class="auth-card__title">"Sign in to continue"</p>
            <p class="auth-card__subtitle">"Sign in to access all the features on this app"</p>
            <Show when=move || error_text().is_some()>
                <p class="auth-card__error">{error_text}</p>
            </Show>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label" for="login-email">"Email or username"</label>
                <input
                    id="login-email"
                    class="auth-form__input"
                    type="email"
                    placeholder="Enter your email or username"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    disabled=busy
                />
                <label class="auth-form__label" for="login-password">"Password"</label>
                <input
                    id="login-password"
                    class="auth-form__input"
                    type="password"
                    placeholder="Enter your password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    disabled=busy
                />
                <button class="auth-form__submit" type="submit" disabled=busy>
                    {move || if busy() { "Signing In..." } else { "Sign In" }}
                </button>
            </form>
            {on_switch
                .map(|switch| {
                    view! {
                        <p class="auth-card__switch">
                            "Do not have an account?"
                            <button type="button" on:click=move |_| switch.run(())>
                                "Sign Up"
                            </button>
                        </p>
                    }
                })}
        </div>
    }
}
