//! # Provider Seam
//!
//! The injected wallet is an opaque collaborator. [`WalletProvider`] covers
//! the request/response surface the controller needs; [`ProviderEvents`]
//! covers event subscription. `wallet-web` implements both over
//! `window.ethereum`; tests implement them with scripted fakes.
//!
//! Everything runs on a single-threaded executor (the browser event loop),
//! so the traits are `?Send`.

use std::rc::Rc;

use async_trait::async_trait;
use shared::dto::event::{ProviderEvent, ProviderEventKind};
use shared::dto::provider::ProviderError;

/// Request/response calls on the injected provider
#[async_trait(?Send)]
pub trait WalletProvider {
    /// `eth_requestAccounts`: prompts the user; rejects with code 4001 on refusal.
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// `eth_accounts`: already-authorized accounts, never prompts.
    async fn accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// `eth_chainId`
    async fn chain_id(&self) -> Result<String, ProviderError>;

    /// `eth_getBalance(address, block)`: smallest-unit balance as a hex quantity.
    async fn balance(&self, address: &str, block: &str) -> Result<String, ProviderError>;

    /// Synchronous read of the provider's selected account, if it exposes one.
    fn selected_address(&self) -> Option<String>;
}

/// Callback invoked with each decoded provider event
pub type EventHandler = Rc<dyn Fn(ProviderEvent)>;

/// Typed event registration on the injected provider
pub trait ProviderEvents {
    fn on_event(&self, kind: ProviderEventKind, handler: EventHandler);
}

#[async_trait(?Send)]
impl<P: WalletProvider + ?Sized> WalletProvider for Rc<P> {
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        (**self).request_accounts().await
    }

    async fn accounts(&self) -> Result<Vec<String>, ProviderError> {
        (**self).accounts().await
    }

    async fn chain_id(&self) -> Result<String, ProviderError> {
        (**self).chain_id().await
    }

    async fn balance(&self, address: &str, block: &str) -> Result<String, ProviderError> {
        (**self).balance(address, block).await
    }

    fn selected_address(&self) -> Option<String> {
        (**self).selected_address()
    }
}
