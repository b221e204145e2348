use super::*;

#[test]
fn info_notice_closes_after_short_delay() {
    let notice = Notice::info("Posted", "Your post is live.");
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.auto_close, Some(Duration::from_millis(1200)));
}

#[test]
fn builders_override_kind_and_delay() {
    let notice = Notice::info("Signed out", "See you soon.").kind(NoticeKind::Success).auto_close(LONG_NOTICE);
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.auto_close, Some(Duration::from_millis(3000)));

    assert_eq!(notice.sticky().auto_close, None);
}

#[test]
fn each_kind_has_its_own_panel_class() {
    let classes = [NoticeKind::Info, NoticeKind::Warning, NoticeKind::Error, NoticeKind::Success]
        .map(NoticeKind::panel_class);
    for class in classes {
        assert!(class.starts_with("alert__panel alert__panel--"));
    }
    let unique: std::collections::HashSet<_> = classes.into_iter().collect();
    assert_eq!(unique.len(), 4);
}
