//! Auto-dismissing notice shown over the feed.
//!
//! Shares the open/close sequencing of [`super::modal::Modal`] but drops in
//! from the top with the alert timings, and asks its owner to close it once
//! the notice's auto-close delay passes.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use std::time::Duration;

use leptos::prelude::*;

use super::modal::schedule;
use crate::util::modal_animation::{AnimationTimings, ENTER_TICK, ModalVisibility};

/// Auto-close delay for a notice raised by a quick action.
pub const SHORT_NOTICE: Duration = Duration::from_millis(1200);
/// Auto-close delay for a page-level notice.
pub const LONG_NOTICE: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

impl NoticeKind {
    pub fn panel_class(self) -> &'static str {
        match self {
            Self::Info => "alert__panel alert__panel--info",
            Self::Warning => "alert__panel alert__panel--warning",
            Self::Error => "alert__panel alert__panel--error",
            Self::Success => "alert__panel alert__panel--success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: &'static str,
    pub kind: NoticeKind,
    /// `None` keeps the notice up until dismissed.
    pub auto_close: Option<Duration>,
}

impl Notice {
    /// Info notice that closes after [`SHORT_NOTICE`].
    pub fn info(title: &'static str, message: &'static str) -> Self {
        Self { title, message, kind: NoticeKind::Info, auto_close: Some(SHORT_NOTICE) }
    }

    #[must_use]
    pub fn kind(mut self, kind: NoticeKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn auto_close(mut self, after: Duration) -> Self {
        self.auto_close = Some(after);
        self
    }

    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.auto_close = None;
        self
    }
}

/// Notice dialog driven by `notice`; `on_close` should set it back to `None`.
///
/// The last notice stays on screen through the exit animation.
#[component]
pub fn Alert(notice: Signal<Option<Notice>>, on_close: Callback<()>) -> impl IntoView {
    let timings = AnimationTimings::alert();
    let visibility = RwSignal::new(ModalVisibility::default());
    let shown = RwSignal::new(None::<Notice>);

    Effect::new(move || {
        if let Some(next) = notice.get() {
            let auto_close = next.auto_close;
            shown.set(Some(next));
            let generation = visibility.try_update(ModalVisibility::open).unwrap_or_default();
            schedule(ENTER_TICK, move || visibility.update(|v| v.mark_entered(generation)));
            if let Some(after) = auto_close {
                schedule(after, move || {
                    if visibility.with_untracked(|v| v.is_current(generation)) {
                        on_close.run(());
                    }
                });
            }
        } else if visibility.with_untracked(ModalVisibility::is_open) {
            let generation = visibility.try_update(ModalVisibility::close).unwrap_or_default();
            schedule(timings.exit_duration(), move || visibility.update(|v| v.finish_exit(generation)));
        }
    });

    view! {
        <Show when=move || visibility.get().should_render()>
            <div
                class="alert"
                role="alert"
                style:pointer-events=move || if notice.with(Option::is_some) { "auto" } else { "none" }
            >
                <div
                    class="alert__backdrop"
                    style=move || visibility.get().backdrop_style(&timings)
                    on:click=move |_| on_close.run(())
                ></div>
                <div
                    class=move || shown.with(|n| n.as_ref().map_or(NoticeKind::Info, |n| n.kind).panel_class())
                    style=move || visibility.get().panel_style(&timings)
                >
                    <div class="alert__content" style=move || visibility.get().content_style(&timings)>
                        <h3 class="alert__title">{move || shown.with(|n| n.as_ref().map(|n| n.title))}</h3>
                        <p class="alert__message">{move || shown.with(|n| n.as_ref().map(|n| n.message))}</p>
                    </div>
                    <button class="alert__close" type="button" aria-label="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
            </div>
        </Show>
    }
}
