//! Animated dialog shell used for the sign-in and sign-up flows.

use std::time::Duration;

use leptos::prelude::*;

use crate::util::modal_animation::{AnimationTimings, ENTER_TICK, ModalVisibility};

/// Run `f` after `delay` on the browser event loop.
pub(crate) fn schedule(delay: Duration, f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        f();
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = delay;
        f();
    }
}

/// Slide-up dialog that stays mounted through its exit animation.
///
/// Clicking the backdrop or pressing Escape requests a close via `on_close`;
/// the caller owns `open`.
#[component]
pub fn Modal(open: Signal<bool>, on_close: Callback<()>, children: ChildrenFn) -> impl IntoView {
    let timings = AnimationTimings::modal();
    let visibility = RwSignal::new(ModalVisibility::default());

    Effect::new(move || {
        if open.get() {
            let generation = visibility.try_update(ModalVisibility::open).unwrap_or_default();
            schedule(ENTER_TICK, move || visibility.update(|v| v.mark_entered(generation)));
        } else if visibility.with_untracked(ModalVisibility::is_open) {
            let generation = visibility.try_update(ModalVisibility::close).unwrap_or_default();
            schedule(timings.exit_duration(), move || visibility.update(|v| v.finish_exit(generation)));
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <Show when=move || visibility.get().should_render()>
            <div
                class="modal"
                style:pointer-events=move || if open.get() { "auto" } else { "none" }
                on:keydown=on_keydown
                tabindex="-1"
            >
                <div
                    class="modal__backdrop"
                    style=move || visibility.get().backdrop_style(&timings)
                    on:click=move |_| on_close.run(())
                ></div>
                <div class="modal__panel" style=move || visibility.get().panel_style(&timings)>
                    <div class="modal__content" style=move || visibility.get().content_style(&timings)>
                        {children()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
