//! Feed posts authored in this browser session.
//!
//! Posts live only in memory; a reload starts with an empty list.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub content: String,
    pub author: User,
    /// RFC 3339 creation time.
    pub timestamp: String,
    pub liked: bool,
}

/// Partial update applied by [`PostsAction::Update`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub content: Option<String>,
    pub liked: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostsAction {
    Add(Post),
    Update { id: String, patch: PostPatch },
    Delete(String),
    ToggleLike(String),
}

/// Newest-first list of posts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostsState {
    pub posts: Vec<Post>,
}

/// Build a post from composer input, or `None` if the content is blank.
#[must_use]
pub fn new_post(content: &str, author: User, timestamp: String) -> Option<Post> {
    let content = content.trim();
    if content.is_empty() {
        return None;
    }
    Some(Post {
        id: uuid::Uuid::new_v4().to_string(),
        content: content.to_owned(),
        author,
        timestamp,
        liked: false,
    })
}

/// Apply `action`, returning the next list. Unknown ids leave the list as is.
#[must_use]
pub fn reduce(state: &PostsState, action: PostsAction) -> PostsState {
    let mut posts = state.posts.clone();
    match action {
        PostsAction::Add(post) => posts.insert(0, post),
        PostsAction::Update { id, patch } => {
            if let Some(post) = posts.iter_mut().find(|p| p.id == id) {
                if let Some(content) = patch.content {
                    post.content = content;
                }
                if let Some(liked) = patch.liked {
                    post.liked = liked;
                }
            }
        }
        PostsAction::Delete(id) => posts.retain(|p| p.id != id),
        PostsAction::ToggleLike(id) => {
            if let Some(post) = posts.iter_mut().find(|p| p.id == id) {
                post.liked = !post.liked;
            }
        }
    }
    PostsState { posts }
}
