use super::*;

// =============================================================
// Helpers
// =============================================================

fn author() -> User {
    User { id: "u-1".to_owned(), email: "demo@example.com".to_owned(), username: Some("demo".to_owned()), avatar: None }
}

fn post(id: &str, content: &str) -> Post {
    Post {
        id: id.to_owned(),
        content: content.to_owned(),
        author: author(),
        timestamp: "2024-01-01T00:00:00Z".to_owned(),
        liked: false,
    }
}

fn two_posts() -> PostsState {
    let state = reduce(&PostsState::default(), PostsAction::Add(post("a", "first")));
    reduce(&state, PostsAction::Add(post("b", "second")))
}

// =============================================================
// new_post
// =============================================================

#[test]
fn new_post_trims_content() {
    let p = new_post("  hello feed \n", author(), "ts".to_owned()).unwrap();
    assert_eq!(p.content, "hello feed");
    assert!(!p.liked);
    assert_eq!(p.timestamp, "ts");
}

#[test]
fn new_post_blank_is_none() {
    assert!(new_post("   \t", author(), "ts".to_owned()).is_none());
    assert!(new_post("", author(), "ts".to_owned()).is_none());
}

// =============================================================
// reduce
// =============================================================

#[test]
fn add_prepends() {
    let state = two_posts();
    let ids: Vec<&str> = state.posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
}

#[test]
fn update_applies_patch_to_matching_post() {
    let patch = PostPatch { content: Some("edited".to_owned()), liked: Some(true) };
    let state = reduce(&two_posts(), PostsAction::Update { id: "a".to_owned(), patch });
    let a = state.posts.iter().find(|p| p.id == "a").unwrap();
    assert_eq!(a.content, "edited");
    assert!(a.liked);
    let b = state.posts.iter().find(|p| p.id == "b").unwrap();
    assert_eq!(b.content, "second");
}

#[test]
fn update_empty_patch_is_noop() {
    let before = two_posts();
    let after = reduce(&before, PostsAction::Update { id: "a".to_owned(), patch: PostPatch::default() });
    assert_eq!(before, after);
}

#[test]
fn delete_removes_only_matching() {
    let state = reduce(&two_posts(), PostsAction::Delete("b".to_owned()));
    assert_eq!(state.posts.len(), 1);
    assert_eq!(state.posts[0].id, "a");
}

#[test]
fn toggle_like_flips_twice_back() {
    let once = reduce(&two_posts(), PostsAction::ToggleLike("a".to_owned()));
    assert!(once.posts.iter().find(|p| p.id == "a").unwrap().liked);
    let twice = reduce(&once, PostsAction::ToggleLike("a".to_owned()));
    assert!(!twice.posts.iter().find(|p| p.id == "a").unwrap().liked);
}

#[test]
fn unknown_id_is_noop() {
    let before = two_posts();
    assert_eq!(reduce(&before, PostsAction::Delete("zzz".to_owned())), before);
    assert_eq!(reduce(&before, PostsAction::ToggleLike("zzz".to_owned())), before);
}
