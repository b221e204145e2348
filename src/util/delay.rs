//! Injectable waits for the simulated auth round-trip.
//!
//! `TimerDelay` sleeps on a browser timer under `csr` and resolves
//! immediately elsewhere. `NoDelay` always resolves immediately.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

impl<T: Delay> Delay for Arc<T> {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).sleep(duration)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        async move {
            #[cfg(feature = "csr")]
            gloo_timers::future::sleep(duration).await;
            #[cfg(not(feature = "csr"))]
            let _ = duration;
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> {
        std::future::ready(())
    }
}
