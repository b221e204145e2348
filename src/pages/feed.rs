//! Feed page: header, composer, post list and the auth dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing route. Reading is open to everyone; posting and liking ask a
//! signed-out visitor to sign in first by opening the login dialog, which
//! closes itself once the session becomes authenticated.

use leptos::prelude::*;

use crate::components::alert::{Alert, LONG_NOTICE, Notice, NoticeKind};
use crate::components::login_form::LoginForm;
use crate::components::modal::Modal;
use crate::components::post_card::PostCard;
use crate::components::post_composer::PostComposer;
use crate::components::signup_form::SignupForm;
use crate::state::posts::{PostsAction, PostsState, new_post, reduce};
use crate::state::session::use_auth_session;
use crate::util::browser::{now_iso8601, set_body_scroll_locked};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthDialog {
    Login,
    Signup,
}

#[component]
pub fn FeedPage() -> impl IntoView {
    let session = use_auth_session();
    let auth = ReadSignal::from(session.state());
    let posts = expect_context::<RwSignal<PostsState>>();
    let dialog = RwSignal::new(None::<AuthDialog>);
    let notice = RwSignal::new(None::<Notice>);

    Effect::new(move || {
        if auth.get().is_authenticated && dialog.get().is_some() {
            dialog.set(None);
        }
    });

    Effect::new(move || set_body_scroll_locked(dialog.get().is_some()));
    on_cleanup(|| set_body_scroll_locked(false));

    let open_login = Callback::new(move |()| dialog.set(Some(AuthDialog::Login)));
    let open_signup = Callback::new(move |()| dialog.set(Some(AuthDialog::Signup)));
    let close_dialog = Callback::new(move |()| dialog.set(None));
    let close_notice = Callback::new(move |()| notice.set(None));

    let on_post = Callback::new(move |content: String| {
        let Some(author) = auth.get_untracked().user else {
            dialog.set(Some(AuthDialog::Login));
            return;
        };
        if let Some(post) = new_post(&content, author, now_iso8601()) {
            posts.update(|s| *s = reduce(s, PostsAction::Add(post)));
            notice.set(Some(Notice::info("Posted", "Your post is now at the top of the feed.")));
        }
    });

    let on_toggle_like = Callback::new(move |id: String| {
        if !auth.get_untracked().is_authenticated {
            dialog.set(Some(AuthDialog::Login));
            return;
        }
        posts.update(|s| *s = reduce(s, PostsAction::ToggleLike(id)));
    });

    let on_header_action = move |_| {
        if auth.get_untracked().is_authenticated {
            session.logout();
            notice.set(Some(
                Notice::info("Signed out", "You have been signed out.").kind(NoticeKind::Success).auto_close(LONG_NOTICE),
            ));
        } else {
            dialog.set(Some(AuthDialog::Login));
        }
    };

    let authenticated = Signal::derive(move || auth.get().is_authenticated);
    let login_open = Signal::derive(move || dialog.get() == Some(AuthDialog::Login));
    let signup_open = Signal::derive(move || dialog.get() == Some(AuthDialog::Signup));

    view! {
        <div class="feed-page">
            <header class="feed-header">
                <span class="feed-header__brand">"foo-rum"</span>
                <div class="feed-header__actions">
                    <span class="feed-header__user">
                        {move || auth.get().user.map(|u| u.display_name().to_owned())}
                    </span>
                    <button class="feed-header__action" type="button" on:click=on_header_action>
                        {move || if auth.get().is_authenticated { "Logout" } else { "Login" }}
                    </button>
                </div>
            </header>
            <PostComposer authenticated=authenticated on_submit=on_post on_unauthenticated=open_login />
            <div class="feed-list">
                {move || {
                    posts
                        .get()
                        .posts
                        .into_iter()
                        .map(|post| view! { <PostCard post=post on_toggle_like=on_toggle_like /> })
                        .collect_view()
                }}
                <Show when=move || posts.with(|s| s.posts.is_empty())>
                    <p class="feed-list__empty">"No posts yet. Be the first to share something."</p>
                </Show>
            </div>
            <Modal open=login_open on_close=close_dialog>
                <LoginForm on_switch=open_signup />
            </Modal>
            <Modal open=signup_open on_close=close_dialog>
                <SignupForm on_switch=open_login />
            </Modal>
            <Alert notice=Signal::from(notice) on_close=close_notice />
        </div>
    }
}
