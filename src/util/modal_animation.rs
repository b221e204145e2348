//! Open/close sequencing for modals and alerts.
//!
//! DESIGN
//! ======
//! A dialog has three animated layers (backdrop, panel, content), each with
//! its own enter/exit duration and delay. Closing keeps the dialog mounted
//! until the slowest exit finishes. Every open/close bumps a generation so a
//! timer scheduled by an earlier toggle cannot act on a later one.

#[cfg(test)]
#[path = "modal_animation_test.rs"]
mod modal_animation_test;

use std::time::Duration;

/// Milliseconds for the enter and exit directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phased {
    pub enter: u64,
    pub exit: u64,
}

impl Phased {
    const fn pick(self, entering: bool) -> u64 {
        if entering { self.enter } else { self.exit }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerTiming {
    pub duration: Phased,
    pub delay: Phased,
}

impl LayerTiming {
    const fn exit_total(self) -> u64 {
        self.duration.exit + self.delay.exit
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTimings {
    pub backdrop: LayerTiming,
    pub panel: LayerTiming,
    pub content: LayerTiming,
    pub panel_easing_enter: &'static str,
    pub panel_easing_exit: &'static str,
    /// Panel transform before entering and after exiting.
    pub panel_hidden: &'static str,
    /// Whether the panel also fades along with its transform.
    pub panel_fades: bool,
    /// Backdrop opacity once fully entered.
    pub backdrop_opacity: f32,
}

impl AnimationTimings {
    /// Slide-up sheet used for the sign-in and sign-up dialogs.
    #[must_use]
    pub const fn modal() -> Self {
        Self {
            backdrop: LayerTiming { duration: Phased { enter: 1000, exit: 500 }, delay: Phased { enter: 0, exit: 100 } },
            panel: LayerTiming { duration: Phased { enter: 400, exit: 250 }, delay: Phased { enter: 250, exit: 0 } },
            content: LayerTiming { duration: Phased { enter: 250, exit: 250 }, delay: Phased { enter: 600, exit: 0 } },
            panel_easing_enter: "ease-out",
            panel_easing_exit: "ease-in",
            panel_hidden: "translateY(100vh)",
            panel_fades: false,
            backdrop_opacity: 0.75,
        }
    }

    /// Drop-in used for notices.
    #[must_use]
    pub const fn alert() -> Self {
        Self {
            backdrop: LayerTiming { duration: Phased { enter: 300, exit: 200 }, delay: Phased { enter: 0, exit: 50 } },
            panel: LayerTiming { duration: Phased { enter: 400, exit: 250 }, delay: Phased { enter: 100, exit: 0 } },
            content: LayerTiming { duration: Phased { enter: 200, exit: 200 }, delay: Phased { enter: 200, exit: 0 } },
            panel_easing_enter: "cubic-bezier(0.34, 1.56, 0.64, 1)",
            panel_easing_exit: "ease-in",
            panel_hidden: "translateY(-20px) scale(0.95)",
            panel_fades: true,
            backdrop_opacity: 0.3,
        }
    }

    /// How long a closing dialog must stay mounted.
    #[must_use]
    pub fn exit_duration(&self) -> Duration {
        let ms = self
            .backdrop
            .exit_total()
            .max(self.panel.exit_total())
            .max(self.content.exit_total());
        Duration::from_millis(ms)
    }
}

/// Wait between mounting and starting the enter transition, so the browser
/// paints the initial frame first.
pub const ENTER_TICK: Duration = Duration::from_millis(10);

/// Mount and animation flags for one dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalVisibility {
    open: bool,
    should_render: bool,
    animated: bool,
    generation: u64,
}

impl ModalVisibility {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the dialog should be in the DOM.
    pub fn should_render(&self) -> bool {
        self.should_render
    }

    /// Whether layers are at their entered position.
    pub fn animated(&self) -> bool {
        self.animated
    }

    /// Mount the dialog. Returns the generation to pass to [`Self::mark_entered`].
    pub fn open(&mut self) -> u64 {
        self.open = true;
        self.should_render = true;
        self.generation += 1;
        self.generation
    }

    pub fn mark_entered(&mut self, generation: u64) {
        if self.is_current(generation) {
            self.animated = true;
        }
    }

    /// Start the exit. Returns the generation to pass to [`Self::finish_exit`].
    pub fn close(&mut self) -> u64 {
        self.open = false;
        self.animated = false;
        self.generation += 1;
        self.generation
    }

    /// Whether `generation` is still the open state it was issued for.
    pub fn is_current(&self, generation: u64) -> bool {
        self.open && generation == self.generation
    }

    pub fn finish_exit(&mut self, generation: u64) {
        if !self.open && generation == self.generation {
            self.should_render = false;
        }
    }

    #[must_use]
    pub fn backdrop_style(&self, timings: &AnimationTimings) -> String {
        let entering = self.animated;
        let opacity = if entering { timings.backdrop_opacity } else { 0.0 };
        format!(
            "opacity: {opacity}; transition-property: opacity; transition-duration: {}ms; transition-delay: {}ms;",
            timings.backdrop.duration.pick(entering),
            timings.backdrop.delay.pick(entering),
        )
    }

    #[must_use]
    pub fn panel_style(&self, timings: &AnimationTimings) -> String {
        let entering = self.animated;
        let transform = if entering { "none" } else { timings.panel_hidden };
        let easing = if entering { timings.panel_easing_enter } else { timings.panel_easing_exit };
        let (opacity, properties) = match (timings.panel_fades, entering) {
            (false, _) => (String::new(), "transform"),
            (true, true) => ("opacity: 1; ".to_owned(), "transform, opacity"),
            (true, false) => ("opacity: 0; ".to_owned(), "transform, opacity"),
        };
        format!(
            "{opacity}transform: {transform}; transition-property: {properties}; transition-duration: {}ms; transition-delay: {}ms; transition-timing-function: {easing};",
            timings.panel.duration.pick(entering),
            timings.panel.delay.pick(entering),
        )
    }

    #[must_use]
    pub fn content_style(&self, timings: &AnimationTimings) -> String {
        let entering = self.animated;
        let (opacity, offset) = if entering { (1, "0") } else { (0, "25%") };
        format!(
            "opacity: {opacity}; transform: translateY({offset}); transition-property: opacity, transform; transition-duration: {}ms; transition-delay: {}ms;",
            timings.content.duration.pick(entering),
            timings.content.delay.pick(entering),
        )
    }
}
