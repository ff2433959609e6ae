//! Display surface seam.
//!
//! The controller never touches the DOM; it hands views and messages to a
//! [`DisplaySurface`]. The surface owns the auto-hide timer for transient
//! errors, so a newer message cancels the pending hide of an older one.

use std::rc::Rc;

use crate::state::ConnectionView;

pub trait DisplaySurface {
    /// Render status, address (short and full), network and balance.
    fn render(&self, view: &ConnectionView);

    /// Show `message` and hide it again after `duration_ms`.
    fn show_transient_error(&self, message: &str, duration_ms: u32);

    /// Hide any visible error immediately.
    fn hide_error(&self);

    /// Enable or disable the user-facing connect action.
    fn set_action_enabled(&self, enabled: bool);
}

impl<D: DisplaySurface + ?Sized> DisplaySurface for Rc<D> {
    fn render(&self, view: &ConnectionView) {
        (**self).render(view)
    }

    fn show_transient_error(&self, message: &str, duration_ms: u32) {
        (**self).show_transient_error(message, duration_ms)
    }

    fn hide_error(&self) {
        (**self).hide_error()
    }

    fn set_action_enabled(&self, enabled: bool) {
        (**self).set_action_enabled(enabled)
    }
}
