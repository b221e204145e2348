//! Sign-up form: email, username and a confirmed password.

#[cfg(test)]
#[path = "signup_form_test.rs"]
mod signup_form_test;

use leptos::prelude::*;

use crate::net::types::SignupProfile;
use crate::state::session::use_auth_session;

/// Raw sign-up form fields as typed.
struct SignupInput<'a> {
    email: &'a str,
    username: &'a str,
    password: &'a str,
    repeat_password: &'a str,
}

fn validate_signup_input(input: &SignupInput<'_>) -> Result<SignupProfile, &'static str> {
    let email = input.email.trim();
    let username = input.username.trim();
    if email.is_empty() || username.is_empty() || input.password.is_empty() {
        return Err("Fill in every field.");
    }
    if input.password != input.repeat_password {
        return Err("Passwords do not match.");
    }
    Ok(SignupProfile { email: email.to_owned(), password: input.password.to_owned(), username: username.to_owned() })
}

#[component]
pub fn SignupForm(#[prop(optional)] on_switch: Option<Callback<()>>) -> impl IntoView {
    let session = use_auth_session();
    session.clear_error();
    let auth = ReadSignal::from(session.state());

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let repeat_password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let (email, username, password, repeat_password) = (
            email.get_untracked(),
            username.get_untracked(),
            password.get_untracked(),
            repeat_password.get_untracked(),
        );
        let input = SignupInput {
            email: &email,
            username: &username,
            password: &password,
            repeat_password: &repeat_password,
        };
        match validate_signup_input(&input) {
            Ok(profile) => {
                form_error.set(None);
                let session = session.clone();
                leptos::task::spawn_local(async move { session.signup(profile).await });
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    // Editing either password field dismisses a mismatch message.
    let on_password_input = move |value: String, target: RwSignal<String>| {
        target.set(value);
        form_error.set(None);
    };

    let error_text = move || form_error.get().map(str::to_owned).or_else(|| auth.get().error);
    let busy = move || auth.get().loading;

    view! {
        <div class="auth-card">
            <p class="auth-card__title">"Create an account to continue"</p>
            <p class="auth-card__subtitle">"Create an account to access all the features on this app"</p>
            <Show when=move || error_text().is_some()>
                <p class="auth-card__error">{error_text}</p>
            </Show>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label" for="signup-email">"Email"</label>
                <input
                    id="signup-email"
                    class="auth-form__input"
                    type="email"
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    disabled=busy
                />
                <label class="auth-form__label" for="signup-username">"Username"</label>
                <input
                    id="signup-username"
                    class="auth-form__input"
                    type="text"
                    placeholder="Choose a username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                    disabled=busy
                />
                <label class="auth-form__label" for="signup-password">"Password"</label>
                <input
                    id="signup-password"
                    class="auth-form__input"
                    type="password"
                    placeholder="Enter your password"
                    prop:value=move || password.get()
                    on:input=move |ev| on_password_input(event_target_value(&ev), password)
                    disabled=busy
                />
                <label class="auth-form__label" for="signup-repeat-password">"Repeat password"</label>
                <input
                    id="signup-repeat-password"
                    class="auth-form__input"
                    type="password"
                    placeholder="Enter your password again"
                    prop:value=move || repeat_password.get()
                    on:input=move |ev| on_password_input(event_target_value(&ev), repeat_password)
                    disabled=busy
                />
                <button class="auth-form__submit" type="submit" disabled=busy>
                    {move || if busy() { "Signing Up..." } else { "Sign Up" }}
                </button>
            </form>
            {on_switch
                .map(|switch| {
                    view! {
                        <p class="auth-card__switch">
                            "Already have an account?"
                            <button type="button" on:click=move |_| switch.run(())>
                                "Sign In"
                            </button>
                        </p>
                    }
                })}
        </div>
    }
}
