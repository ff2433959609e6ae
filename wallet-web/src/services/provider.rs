//! EIP-1193 bindings for `window.ethereum`
//!
//! The page only ever talks to the single injected provider. Requests go
//! through `provider.request({ method, params })`; events are registered
//! with `provider.on(name, listener)`. JavaScript rejections are converted
//! into [`ProviderError`] so nothing above this module sees a `JsValue`.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use js_sys::Reflect;
use lib_core::provider::{EventHandler, ProviderEvents, WalletProvider};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::dto::event::{ProviderEvent, ProviderEventKind};
use shared::dto::provider::{ConnectInfo, ProviderError};
use shared::dto::rpc::{RequestArguments, ETH_ACCOUNTS, ETH_CHAIN_ID, ETH_GET_BALANCE, ETH_REQUEST_ACCOUNTS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(inline_js = "
export function ethereumProvider() {
    if (typeof window === 'undefined' || !window.ethereum) {
        return null;
    }
    return window.ethereum;
}

export async function ethereumRequest(provider, args) {
    return await provider.request(args);
}

export function ethereumOn(provider, event, listener) {
    if (typeof provider.on === 'function') {
        provider.on(event, listener);
        return true;
    }
    return false;
}

export function ethereumSelectedAddress(provider) {
    const address = provider.selectedAddress;
    return typeof address === 'string' && address.length > 0 ? address : null;
}
")]
extern "C" {
    #[wasm_bindgen(js_name = ethereumProvider)]
    fn ethereum_provider() -> JsValue;

    #[wasm_bindgen(js_name = ethereumRequest, catch)]
    async fn ethereum_request(provider: &JsValue, args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = ethereumOn)]
    fn ethereum_on(provider: &JsValue, event: &str, listener: &js_sys::Function) -> bool;

    #[wasm_bindgen(js_name = ethereumSelectedAddress)]
    fn ethereum_selected_address(provider: &JsValue) -> Option<String>;
}

/// The injected `window.ethereum` object
pub struct EthereumProvider {
    inner: JsValue,
    // Listeners must outlive the registration; the provider never removes them.
    listeners: RefCell<Vec<Closure<dyn FnMut(JsValue)>>>,
}

impl EthereumProvider {
    /// `None` when no wallet extension injected a provider.
    pub fn detect() -> Option<Rc<Self>> {
        let inner = ethereum_provider();
        if inner.is_null() || inner.is_undefined() {
            log::warn!("window.ethereum not found");
            return None;
        }
        log::info!("EIP-1193 provider detected");
        Some(Rc::new(Self {
            inner,
            listeners: RefCell::new(Vec::new()),
        }))
    }

    async fn request(&self, args: RequestArguments) -> Result<JsValue, ProviderError> {
        log::debug!("provider request: {}", args.method);
        let js_args = args
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| ProviderError::message(format!("Failed to encode {}: {}", args.method, e)))?;
        ethereum_request(&self.inner, js_args).await.map_err(to_provider_error)
    }

    async fn request_string(&self, args: RequestArguments) -> Result<String, ProviderError> {
        let method = args.method.clone();
        self.request(args).await?.as_string().ok_or_else(|| {
            ProviderError::message(format!("Unexpected {} response: not a string", method))
        })
    }
}

#[async_trait(?Send)]
impl WalletProvider for EthereumProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        let value = self.request(RequestArguments::new(ETH_REQUEST_ACCOUNTS)).await?;
        decode(value, ETH_REQUEST_ACCOUNTS)
    }

    async fn accounts(&self) -> Result<Vec<String>, ProviderError> {
        let value = self.request(RequestArguments::new(ETH_ACCOUNTS)).await?;
        decode(value, ETH_ACCOUNTS)
    }

    async fn chain_id(&self) -> Result<String, ProviderError> {
        self.request_string(RequestArguments::new(ETH_CHAIN_ID)).await
    }

    async fn balance(&self, address: &str, block: &str) -> Result<String, ProviderError> {
        let args = RequestArguments::new(ETH_GET_BALANCE).with_params(vec![address.into(), block.into()]);
        self.request_string(args).await
    }

    fn selected_address(&self) -> Option<String> {
        ethereum_selected_address(&self.inner)
    }
}

impl ProviderEvents for EthereumProvider {
    fn on_event(&self, kind: ProviderEventKind, handler: EventHandler) {
        let listener = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
            handler(decode_event(kind, payload));
        });

        if ethereum_on(&self.inner, kind.name(), listener.as_ref().unchecked_ref()) {
            self.listeners.borrow_mut().push(listener);
        } else {
            log::warn!("provider does not support events, '{}' not registered", kind.name());
        }
    }
}

fn decode<T: DeserializeOwned>(value: JsValue, method: &str) -> Result<T, ProviderError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| ProviderError::message(format!("Unexpected {} response: {}", method, e)))
}

fn decode_event(kind: ProviderEventKind, payload: JsValue) -> ProviderEvent {
    match kind {
        ProviderEventKind::AccountsChanged => {
            let accounts = serde_wasm_bindgen::from_value(payload).unwrap_or_else(|e| {
                log::warn!("malformed accountsChanged payload: {}", e);
                Vec::new()
            });
            ProviderEvent::AccountsChanged(accounts)
        }
        ProviderEventKind::ChainChanged => ProviderEvent::ChainChanged(payload.as_string().unwrap_or_default()),
        ProviderEventKind::Connect => {
            let chain_id = Reflect::get(&payload, &JsValue::from_str("chainId"))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default();
            ProviderEvent::Connect(ConnectInfo { chain_id })
        }
        ProviderEventKind::Disconnect => ProviderEvent::Disconnect(to_provider_error(payload)),
    }
}

/// Normalize a rejection: `{ code, message }` objects, `Error`s or bare strings.
fn to_provider_error(err: JsValue) -> ProviderError {
    if let Some(text) = err.as_string() {
        return ProviderError::message(text);
    }

    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64);
    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err));

    ProviderError { code, message }
}
