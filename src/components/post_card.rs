//! Single post in the feed list.

use leptos::prelude::*;

use crate::state::posts::Post;

#[component]
pub fn PostCard(post: Post, on_toggle_like: Callback<String>) -> impl IntoView {
    let Post { id, content, author, timestamp, liked } = post;
    let name = author.display_name().to_owned();
    let avatar = author.avatar.unwrap_or_default();
    let datetime = timestamp.clone();

    view! {
        <article class="post-card">
            <header class="post-card__author">
                <img class="post-card__avatar" src=avatar alt="" />
                <span class="post-card__name">{name}</span>
                <time class="post-card__time" datetime=datetime>{timestamp}</time>
            </header>
            <p class="post-card__body">{content}</p>
            <button
                class={if liked { "post-card__like post-card__like--active" } else { "post-card__like" }}
                type="button"
                on:click=move |_| on_toggle_like.run(id.clone())
            >
                {if liked { "Liked" } else { "Like" }}
            </button>
        </article>
    }
}
