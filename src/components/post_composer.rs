//! Post composer shown at the top of the feed.

#[cfg(test)]
#[path = "post_composer_test.rs"]
mod post_composer_test;

use leptos::prelude::*;

fn composer_hint(authenticated: bool, content: &str) -> &'static str {
    if !authenticated {
        "Sign in to post"
    } else if content.trim().is_empty() {
        "Enter some content to post"
    } else {
        "Send post"
    }
}

fn can_send(authenticated: bool, content: &str) -> bool {
    authenticated && !content.trim().is_empty()
}

/// Text box plus send button.
///
/// Focusing or submitting while signed out calls `on_unauthenticated`
/// instead of accepting input.
#[component]
pub fn PostComposer(
    authenticated: Signal<bool>,
    on_submit: Callback<String>,
    on_unauthenticated: Callback<()>,
) -> impl IntoView {
    let content = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !authenticated.get_untracked() {
            on_unauthenticated.run(());
            return;
        }
        let text = content.get_untracked();
        if can_send(true, &text) {
            on_submit.run(text);
            content.set(String::new());
        }
    };

    let on_focus = move |_| {
        if !authenticated.get_untracked() {
            on_unauthenticated.run(());
        }
    };

    view! {
        <form class="composer" on:submit=submit>
            <textarea
                class="composer__input"
                placeholder="How are you feeling today?"
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
                on:focus=on_focus
            ></textarea>
            <button
                class=move || {
                    if can_send(authenticated.get(), &content.get()) {
                        "composer__send"
                    } else {
                        "composer__send composer__send--disabled"
                    }
                }
                type="submit"
                title=move || composer_hint(authenticated.get(), &content.get())
            >
                "Send"
            </button>
        </form>
    }
}
