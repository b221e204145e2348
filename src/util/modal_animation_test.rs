use super::*;

// =============================================================
// AnimationTimings
// =============================================================

#[test]
fn modal_exit_duration_is_backdrop_path() {
    assert_eq!(AnimationTimings::modal().exit_duration(), Duration::from_millis(600));
}

#[test]
fn alert_exit_duration_is_panel_or_backdrop_path() {
    assert_eq!(AnimationTimings::alert().exit_duration(), Duration::from_millis(250));
}

#[test]
fn exit_duration_picks_slowest_layer() {
    let mut timings = AnimationTimings::modal();
    timings.content.delay.exit = 900;
    assert_eq!(timings.exit_duration(), Duration::from_millis(1150));
}

// =============================================================
// ModalVisibility
// =============================================================

#[test]
fn default_is_hidden() {
    let v = ModalVisibility::default();
    assert!(!v.is_open());
    assert!(!v.should_render());
    assert!(!v.animated());
}

#[test]
fn open_mounts_before_animating() {
    let mut v = ModalVisibility::default();
    let generation = v.open();
    assert!(v.should_render());
    assert!(!v.animated());
    v.mark_entered(generation);
    assert!(v.animated());
}

#[test]
fn close_keeps_rendering_until_exit_finishes() {
    let mut v = ModalVisibility::default();
    let opened = v.open();
    v.mark_entered(opened);
    let closed = v.close();
    assert!(!v.animated());
    assert!(v.should_render());
    v.finish_exit(closed);
    assert!(!v.should_render());
}

#[test]
fn reopen_during_exit_ignores_stale_finish() {
    let mut v = ModalVisibility::default();
    v.open();
    let closed = v.close();
    let reopened = v.open();
    v.finish_exit(closed);
    assert!(v.should_render());
    v.mark_entered(reopened);
    assert!(v.animated());
}

#[test]
fn is_current_tracks_latest_open() {
    let mut v = ModalVisibility::default();
    let first = v.open();
    assert!(v.is_current(first));
    v.close();
    assert!(!v.is_current(first));
    let second = v.open();
    assert!(!v.is_current(first));
    assert!(v.is_current(second));
}

#[test]
fn stale_enter_after_close_is_ignored() {
    let mut v = ModalVisibility::default();
    let opened = v.open();
    v.close();
    v.mark_entered(opened);
    assert!(!v.animated());
}

// =============================================================
// Styles
// =============================================================

#[test]
fn entered_styles_use_enter_timings() {
    let timings = AnimationTimings::modal();
    let mut v = ModalVisibility::default();
    let generation = v.open();
    v.mark_entered(generation);

    let backdrop = v.backdrop_style(&timings);
    assert!(backdrop.contains("opacity: 0.75"));
    assert!(backdrop.contains("transition-duration: 1000ms"));

    let panel = v.panel_style(&timings);
    assert!(panel.contains("transform: none;"));
    assert!(!panel.contains("opacity"));
    assert!(panel.contains("transition-delay: 250ms"));
    assert!(panel.contains("ease-out"));

    let content = v.content_style(&timings);
    assert!(content.contains("opacity: 1"));
    assert!(content.contains("transition-delay: 600ms"));
}

#[test]
fn exiting_styles_use_exit_timings() {
    let timings = AnimationTimings::modal();
    let v = ModalVisibility::default();

    let backdrop = v.backdrop_style(&timings);
    assert!(backdrop.contains("opacity: 0;"));
    assert!(backdrop.contains("transition-duration: 500ms"));
    assert!(backdrop.contains("transition-delay: 100ms"));

    let panel = v.panel_style(&timings);
    assert!(panel.contains("translateY(100vh)"));
    assert!(panel.contains("ease-in;"));

    let content = v.content_style(&timings);
    assert!(content.contains("translateY(25%)"));
    assert!(content.contains("transition-duration: 250ms"));
}

#[test]
fn alert_panel_drops_in_and_fades() {
    let timings = AnimationTimings::alert();
    let mut v = ModalVisibility::default();

    let hidden = v.panel_style(&timings);
    assert!(hidden.starts_with("opacity: 0; "));
    assert!(hidden.contains("translateY(-20px) scale(0.95)"));
    assert!(hidden.contains("transition-property: transform, opacity"));

    let generation = v.open();
    v.mark_entered(generation);
    let shown = v.panel_style(&timings);
    assert!(shown.starts_with("opacity: 1; "));
    assert!(shown.contains("transition-delay: 100ms"));
    assert!(shown.contains("cubic-bezier(0.34, 1.56, 0.64, 1)"));
    assert!(v.backdrop_style(&timings).contains("opacity: 0.3;"));
}
