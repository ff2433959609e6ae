//! Wallet connection context
//!
//! Owns the page's [`ConnectionController`] and the signals its display
//! surface writes to. Components read the signals; user actions go through
//! the controller.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use lib_core::config::core_config;
use lib_core::display::DisplaySurface;
use lib_core::{ConnectionController, ConnectionView};

use crate::services::provider::EthereumProvider;
use crate::services::timer::GlooTimer;

pub type WebController = ConnectionController<Rc<EthereumProvider>, SignalDisplay, GlooTimer>;

/// Display surface backed by Leptos signals
pub struct SignalDisplay {
    view: RwSignal<ConnectionView>,
    error: RwSignal<Option<String>>,
    action_enabled: RwSignal<bool>,
    // Dropping a pending Timeout cancels it
    hide_timer: RefCell<Option<Timeout>>,
}

impl DisplaySurface for SignalDisplay {
    fn render(&self, view: &ConnectionView) {
        self.view.set(view.clone());
    }

    fn show_transient_error(&self, message: &str, duration_ms: u32) {
        self.error.set(Some(message.to_string()));
        let error = self.error;
        let timer = Timeout::new(duration_ms, move || error.set(None));
        self.hide_timer.replace(Some(timer));
    }

    fn hide_error(&self) {
        self.hide_timer.take();
        self.error.set(None);
    }

    fn set_action_enabled(&self, enabled: bool) {
        self.action_enabled.set(enabled);
    }
}

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub view: RwSignal<ConnectionView>,
    pub error: RwSignal<Option<String>>,
    pub action_enabled: RwSignal<bool>,
    controller: StoredValue<Rc<WebController>, LocalStorage>,
    provider: StoredValue<Option<Rc<EthereumProvider>>, LocalStorage>,
}

impl WalletContext {
    fn new() -> Self {
        let config = core_config().clone();
        let provider = EthereumProvider::detect();

        let view = RwSignal::new(ConnectionView::default());
        let error = RwSignal::new(None);
        let action_enabled = RwSignal::new(true);
        let display = SignalDisplay {
            view,
            error,
            action_enabled,
            hide_timer: RefCell::new(None),
        };

        let controller = ConnectionController::new(provider.clone(), display, GlooTimer, config);
        view.set(controller.view());

        Self {
            view,
            error,
            action_enabled,
            controller: StoredValue::new_local(Rc::new(controller)),
            provider: StoredValue::new_local(provider),
        }
    }

    pub fn controller(&self) -> Rc<WebController> {
        self.controller.get_value()
    }

    pub fn native_symbol(&self) -> String {
        self.controller.with_value(|c| c.config().native_symbol.clone())
    }

    /// Listen for provider events, then pick up an authorized account.
    pub fn start(&self) {
        let controller = self.controller();
        let provider = self.provider.get_value();
        controller.start(provider.as_deref(), |task| leptos::task::spawn_local(task));
    }

    pub fn connect(&self) {
        let controller = self.controller();
        leptos::task::spawn_local(async move {
            if let Err(e) = controller.connect().await {
                log::warn!("Wallet connection failed: {}", e);
            }
        });
    }

    pub fn refresh(&self) {
        let controller = self.controller();
        leptos::task::spawn_local(async move {
            if let Err(e) = controller.refresh().await {
                log::warn!("Refresh failed: {}", e);
            }
        });
    }

    pub fn disconnect(&self) {
        self.controller.with_value(|c| c.disconnect());
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
