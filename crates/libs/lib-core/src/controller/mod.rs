//! # Connection Controller
//!
//! Owns the [`ConnectionState`] and drives it from two directions: user
//! actions (`connect`, `disconnect`, `refresh`) and provider events
//! (`accountsChanged`, `chainChanged`, `disconnect`). Every transition is
//! rendered to the [`DisplaySurface`] as soon as it is applied.
//!
//! ## Staleness
//!
//! Provider calls cannot be cancelled, and events may arrive while a call is
//! suspended. Each state-changing entry point takes a new request generation;
//! a continuation that resumes under an older generation drops its result
//! without touching state. State is only mutated between awaits, so no
//! borrow of the state is ever held across a suspension point.
//!
//! ## Flow
//!
//! ```text
//! Disconnected --connect()--> Connecting --accounts ok--> Connected | WrongNetwork
//! Connecting --failure--> Failed --(immediately)--> Disconnected
//! Connected | WrongNetwork --onDisconnect / onAccountsChanged([])--> Disconnected
//! Connected <--onChainChanged / refresh--> WrongNetwork
//! ```

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use lib_utils::{validate_hex_address, validate_not_empty};
use shared::dto::event::{ProviderEvent, ProviderEventKind};
use shared::dto::provider::{ConnectInfo, ProviderError};
use shared::dto::rpc::BLOCK_LATEST;
use tracing::{debug, info, warn};

use crate::balance::format_native_amount;
use crate::config::NetworkConfig;
use crate::display::DisplaySurface;
use crate::error::{ConnectError, Result};
use crate::network::{network_name, same_chain};
use crate::provider::{ProviderEvents, WalletProvider};
use crate::state::{Balance, ConnectionDiagnostics, ConnectionState, ConnectionStatus, ConnectionView};
use crate::timer::{with_timeout, Timer};


/// Message shown when the wallet drops the connection without a reason
pub const WALLET_DISCONNECTED: &str = "Wallet disconnected";
/// Message shown when the wallet switches to another account
pub const ACCOUNT_CHANGED: &str = "Account changed";

pub struct ConnectionController<P, D, T> {
    provider: Option<P>,
    display: D,
    timer: T,
    config: NetworkConfig,
    state: RefCell<ConnectionState>,
    generation: Cell<u64>,
}

impl<P, D, T> ConnectionController<P, D, T>
where
    P: WalletProvider,
    D: DisplaySurface,
    T: Timer,
{
    /// `provider` is `None` when no wallet is injected into the page.
    pub fn new(provider: Option<P>, display: D, timer: T, config: NetworkConfig) -> Self {
        Self {
            provider,
            display,
            timer,
            config,
            state: RefCell::new(ConnectionState::default()),
            generation: Cell::new(0),
        }
    }

    // region:    --- Accessors

    pub fn state(&self) -> ConnectionState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.state.borrow().status
    }

    pub fn address(&self) -> Option<String> {
        self.state.borrow().address.clone()
    }

    pub fn is_connected(&self) -> bool {
        self.state.borrow().is_connected()
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub fn view(&self) -> ConnectionView {
        ConnectionView::from_state(&self.state.borrow(), &self.config)
    }

    pub fn diagnostics(&self) -> ConnectionDiagnostics {
        let state = self.state.borrow();
        ConnectionDiagnostics {
            status: state.status,
            address: state.address.clone(),
            chain_id: state.chain_id.clone(),
            balance: state.balance.as_ref().map(|b| b.display().to_string()),
            last_error: state.last_error.clone(),
            provider_present: self.provider.is_some(),
            target_chain_id: self.config.target_chain_id.clone(),
            generation: self.generation.get(),
        }
    }

    // endregion: --- Accessors

    // region:    --- User actions

    /// Request account access and evaluate network and balance.
    pub async fn connect(&self) -> Result<()> {
        let Some(provider) = self.provider.as_ref() else {
            let err = ConnectError::ProviderUnavailable;
            warn!("connect requested but no wallet provider is injected");
            let message = err.user_message();
            self.apply(|state| state.last_error = Some(message.clone()));
            self.notify(&message);
            return Err(err);
        };

        let status = self.status();
        if !status.allows_connect() {
            debug!(?status, "connect ignored, already connecting or connected");
            return Ok(());
        }

        let ticket = self.begin();
        info!(ticket, "connecting wallet");
        self.display.hide_error();
        self.apply(|state| {
            state.status = ConnectionStatus::Connecting;
            state.last_error = None;
        });

        let accounts = match self.request(provider.request_accounts()).await {
            Ok(accounts) => accounts,
            Err(err) => {
                let message = connect_failure_message(&err);
                return self.fail(ticket, err, message);
            }
        };
        if self.is_stale(ticket, "request_accounts") {
            return Ok(());
        }
        debug!(count = accounts.len(), "accounts received");

        let Some(address) = first_account(accounts) else {
            let err = ConnectError::NoAccounts;
            let message = err.user_message();
            return self.fail(ticket, err, message);
        };
        self.adopt(&address);

        if self.config.settle_delay_ms > 0 {
            self.timer.sleep(self.config.settle_delay_ms).await;
            if self.is_stale(ticket, "settle delay") {
                return Ok(());
            }
        }

        self.refresh_with(ticket, &address).await
    }

    /// Pick up an account the user already authorized, without prompting.
    pub async fn auto_connect(&self) {
        let Some(provider) = self.provider.as_ref() else {
            debug!("auto-connect skipped, no wallet provider");
            return;
        };

        // Snapshot only: a lookup that finds nothing must not invalidate other flows
        let snapshot = self.generation.get();
        let selected = match provider.selected_address() {
            Some(address) => Some(address),
            None => match self.request(provider.accounts()).await {
                Ok(accounts) => first_account(accounts),
                Err(err) => {
                    warn!(error = %err, "auto-connect account lookup failed");
                    return;
                }
            },
        };
        if self.is_stale(snapshot, "auto-connect lookup") {
            return;
        }

        let Some(address) = selected.filter(|a| !a.trim().is_empty()) else {
            debug!("no previously authorized account");
            return;
        };

        let ticket = self.begin();
        info!(address = %address, "auto-connecting to authorized account");
        self.apply(|state| state.status = ConnectionStatus::Connecting);
        self.adopt(&address);
        if let Err(err) = self.refresh_with(ticket, &address).await {
            warn!(error = %err, "auto-connect failed");
        }
    }

    /// Forget the connection locally (the wallet keeps its authorization).
    pub fn disconnect(&self) {
        self.begin();
        info!("disconnecting wallet");
        self.apply(|state| state.reset(None));
        self.display.hide_error();
    }

    /// Re-read network and balance for the current account.
    pub async fn refresh(&self) -> Result<()> {
        let Some(address) = self.address() else {
            info!("refresh skipped, no address connected");
            return Ok(());
        };
        let ticket = self.begin();
        self.refresh_with(ticket, &address).await
    }

    /// Query the active chain and, on the target chain, the native balance of `address`.
    pub async fn refresh_network_and_balance(&self, address: &str) -> Result<()> {
        validate_not_empty(address, "address").map_err(ConnectError::InvalidInput)?;
        let ticket = self.begin();
        self.refresh_with(ticket, address).await
    }

    // endregion: --- User actions

    // region:    --- Provider events

    pub async fn dispatch(&self, event: ProviderEvent) {
        match event {
            ProviderEvent::AccountsChanged(accounts) => self.on_accounts_changed(accounts).await,
            ProviderEvent::ChainChanged(chain_id) => self.on_chain_changed(&chain_id).await,
            ProviderEvent::Connect(info) => self.on_connect(&info),
            ProviderEvent::Disconnect(reason) => self.on_disconnect(reason),
        }
    }

    pub async fn on_accounts_changed(&self, accounts: Vec<String>) {
        debug!(?accounts, "accountsChanged");

        let Some(address) = first_account(accounts) else {
            self.begin();
            info!("wallet returned no accounts, treating as disconnect");
            self.apply(|state| state.reset(Some(WALLET_DISCONNECTED.to_string())));
            self.notify(WALLET_DISCONNECTED);
            return;
        };

        if self.address().as_deref() == Some(address.as_str()) {
            debug!("accountsChanged with the active account, nothing to do");
            return;
        }

        let ticket = self.begin();
        info!(address = %address, "account changed");
        self.apply(|state| {
            state.status = ConnectionStatus::Connecting;
            state.balance = None;
        });
        self.adopt(&address);
        self.notify(ACCOUNT_CHANGED);

        if let Err(err) = self.refresh_with(ticket, &address).await {
            warn!(error = %err, "refresh after account change failed");
        }
    }

    /// Re-evaluate network and balance in place; no page reload.
    pub async fn on_chain_changed(&self, chain_id: &str) {
        let Some(address) = self.address() else {
            debug!(chain_id, "chainChanged ignored, no account held");
            return;
        };

        let ticket = self.begin();
        info!(chain_id, ticket, "chain changed, re-evaluating network");
        if let Err(err) = self.refresh_with(ticket, &address).await {
            warn!(error = %err, "refresh after chain change failed");
        }
    }

    pub fn on_connect(&self, info: &ConnectInfo) {
        info!(chain_id = %info.chain_id, "wallet provider connected");
    }

    pub fn on_disconnect(&self, reason: ProviderError) {
        self.begin();
        info!(reason = %reason, "wallet provider disconnected");
        let message = if reason.message.trim().is_empty() {
            WALLET_DISCONNECTED.to_string()
        } else {
            format!("{}: {}", WALLET_DISCONNECTED, reason.message)
        };
        self.apply(|state| state.reset(Some(message.clone())));
        self.notify(&message);
    }

    /// Register this controller for every provider event kind.
    ///
    /// `spawn` schedules the handler future on the page's executor.
    pub fn subscribe<E, S>(self: &Rc<Self>, events: &E, spawn: S)
    where
        E: ProviderEvents + ?Sized,
        S: Fn(LocalBoxFuture<'static, ()>) + Clone + 'static,
        P: 'static,
        D: 'static,
        T: 'static,
    {
        for kind in ProviderEventKind::ALL {
            let controller = Rc::clone(self);
            let spawn = spawn.clone();
            events.on_event(
                kind,
                Rc::new(move |event: ProviderEvent| {
                    let controller = Rc::clone(&controller);
                    spawn(async move { controller.dispatch(event).await }.boxed_local());
                }),
            );
            debug!(event = kind.name(), "subscribed to provider event");
        }
    }

    /// Page start-up: listen for provider events, then auto-connect.
    ///
    /// Listeners go in first so events raised while the auto-connect lookup
    /// is pending are handled; the generation check drops the lookup result.
    pub fn start<E, S>(self: &Rc<Self>, events: Option<&E>, spawn: S)
    where
        E: ProviderEvents + ?Sized,
        S: Fn(LocalBoxFuture<'static, ()>) + Clone + 'static,
        P: 'static,
        D: 'static,
        T: 'static,
    {
        match events {
            Some(events) => self.subscribe(events, spawn.clone()),
            None => warn!("no wallet provider, events not subscribed"),
        }

        let controller = Rc::clone(self);
        spawn(async move { controller.auto_connect().await }.boxed_local());
    }

    // endregion: --- Provider events

    // region:    --- Internals

    fn provider(&self) -> Result<&P> {
        self.provider.as_ref().ok_or(ConnectError::ProviderUnavailable)
    }

    /// Start a new request generation, invalidating everything in flight.
    fn begin(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    fn is_stale(&self, ticket: u64, step: &str) -> bool {
        let current = self.generation.get();
        if current != ticket {
            debug!(ticket, current, step, "discarding stale provider response");
            return true;
        }
        false
    }

    async fn request<R>(&self, call: impl Future<Output = std::result::Result<R, ProviderError>>) -> Result<R> {
        with_timeout(&self.timer, self.config.request_timeout_ms, call)
            .await?
            .map_err(ConnectError::from_provider)
    }

    fn apply(&self, update: impl FnOnce(&mut ConnectionState)) {
        {
            let mut state = self.state.borrow_mut();
            update(&mut state);
        }
        self.render();
    }

    fn render(&self) {
        let view = self.view();
        self.display.set_action_enabled(view.action_enabled);
        self.display.render(&view);
    }

    fn notify(&self, message: &str) {
        self.display.show_transient_error(message, self.config.error_display_ms);
    }

    fn adopt(&self, address: &str) {
        if let Err(reason) = validate_hex_address(address) {
            warn!(address, reason = %reason, "provider returned a non-standard address");
        }
        self.apply(|state| state.address = Some(address.to_string()));
    }

    /// Pass through `Failed`, then settle in `Disconnected`.
    fn fail(&self, ticket: u64, err: ConnectError, message: String) -> Result<()> {
        if self.is_stale(ticket, "failure") {
            return Ok(());
        }
        warn!(error = %err, "wallet connection failed");

        self.apply(|state| {
            state.status = ConnectionStatus::Failed;
            state.balance = None;
            state.last_error = Some(message.clone());
        });
        self.notify(&message);
        self.apply(|state| state.reset(Some(message.clone())));
        Err(err)
    }

    async fn refresh_with(&self, ticket: u64, address: &str) -> Result<()> {
        let provider = self.provider()?;
        debug!(address, ticket, "refreshing network and balance");

        let chain_id = match self.request(provider.chain_id()).await {
            Ok(chain_id) => chain_id,
            Err(err) => {
                if self.is_stale(ticket, "chain_id") {
                    return Ok(());
                }
                let message = match &err {
                    ConnectError::ConnectionError(detail) => format!("Network error: {}", detail),
                    other => other.user_message(),
                };
                return self.fail(ticket, err, message);
            }
        };
        if self.is_stale(ticket, "chain_id") {
            return Ok(());
        }
        debug!(chain_id = %chain_id, expected = %self.config.target_chain_id, "chain id received");

        if !same_chain(&chain_id, &self.config.target_chain_id) {
            let network = network_name(&chain_id);
            let message = format!(
                "Connected to {}. Please switch to {}",
                network, self.config.target_chain_name
            );
            info!(chain_id = %chain_id, network, "wallet is on the wrong network");
            self.apply(|state| {
                state.status = ConnectionStatus::WrongNetwork;
                state.address = Some(address.to_string());
                state.chain_id = Some(chain_id.clone());
                state.balance = None;
                state.last_error = Some(message.clone());
            });
            self.notify(&message);
            return Ok(());
        }

        let outcome = match self.request(provider.balance(address, BLOCK_LATEST)).await {
            Ok(raw) => {
                debug!(raw = %raw, "balance response");
                format_native_amount(Some(&raw), self.config.native_decimals, self.config.balance_precision)
            }
            Err(err) => Err(err),
        };
        if self.is_stale(ticket, "balance") {
            return Ok(());
        }

        match outcome {
            Ok(amount) => {
                if amount.chars().all(|c| c == '0' || c == '.') {
                    info!(symbol = %self.config.native_symbol, "balance is zero, a faucet can fund this account");
                }
                info!(amount = %amount, "wallet connected on target network");
                self.apply(|state| {
                    state.status = ConnectionStatus::Connected;
                    state.address = Some(address.to_string());
                    state.chain_id = Some(chain_id.clone());
                    state.balance = Some(Balance::Amount(amount.clone()));
                    state.last_error = None;
                });
            }
            Err(err) => {
                let detail = match err {
                    ConnectError::ConnectionError(detail) => detail,
                    other => other.to_string(),
                };
                let message = ConnectError::BalanceFetchFailed(detail).user_message();
                warn!(error = %message, "balance unavailable, connection kept");
                self.apply(|state| {
                    state.status = ConnectionStatus::Connected;
                    state.address = Some(address.to_string());
                    state.chain_id = Some(chain_id.clone());
                    state.balance = Some(Balance::Unavailable);
                    state.last_error = Some(message.clone());
                });
                self.notify(&message);
            }
        }

        Ok(())
    }

    // endregion: --- Internals
}

fn connect_failure_message(err: &ConnectError) -> String {
    match err {
        ConnectError::ConnectionError(detail) => format!("Failed to connect wallet: {}", detail),
        other => other.user_message(),
    }
}

fn first_account(accounts: Vec<String>) -> Option<String> {
    accounts.into_iter().next().filter(|a| !a.trim().is_empty())
}
