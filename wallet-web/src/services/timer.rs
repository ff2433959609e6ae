//! Browser timer for the controller

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use lib_core::timer::Timer;

/// `setTimeout`-backed sleep; never blocks the event loop.
pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}
