//! Connect Wallet Page
//!
//! Status, address, network and balance of the injected wallet, with the
//! connect action and the transient error area.

use leptos::prelude::*;

use crate::state::connection::use_wallet_context;
use crate::utils::format::{balance_label, status_class};

#[component]
pub fn ConnectPage() -> impl IntoView {
    let wallet = use_wallet_context();
    let symbol = wallet.native_symbol();
    let target = wallet.controller().config().target_chain_name.clone();

    let view_state = wallet.view;
    let has_address = move || view_state.with(|v| v.full_address.is_some());

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="width: 100%; max-width: 520px;">
                <h1 style="color: #ffffff; font-size: 32px; margin-bottom: 12px; font-weight: 700;">
                    "Connect Wallet"
                </h1>
                <p class="subtitle">{format!("Network: {}", target)}</p>

                {move || wallet.error.get().map(|err| view! {
                    <div class="error">
                        <p style="text-align: center;">{err}</p>
                    </div>
                })}

                <div class="info">
                    <div class="row">
                        <span class="label">"Status"</span>
                        <span class=move || view_state.with(|v| status_class(v.status))>
                            {move || view_state.with(|v| v.status_text.clone())}
                        </span>
                    </div>
                    <div class="row">
                        <span class="label">"Address"</span>
                        <span
                            class="wallet-address"
                            title=move || view_state.with(|v| v.full_address.clone().unwrap_or_default())
                        >
                            {move || view_state.with(|v| v.short_address.clone())}
                        </span>
                    </div>
                    {move || view_state.with(|v| v.full_address.clone()).map(|full| view! {
                        <div class="row">
                            <span class="label">"Full Address"</span>
                            <span class="wallet-address" style="word-break: break-all; font-size: 0.85em;">{full}</span>
                        </div>
                    })}
                    <div class="row">
                        <span class="label">"Network"</span>
                        <span>{move || view_state.with(|v| v.network_name.clone())}</span>
                    </div>
                    <div class="row">
                        <span class="label">"Balance"</span>
                        <span>{move || view_state.with(|v| balance_label(&v.balance_text, &symbol))}</span>
                    </div>
                </div>

                <button
                    class="btn"
                    style="width: 100%;"
                    disabled=move || !wallet.action_enabled.get()
                    on:click=move |_| wallet.connect()
                >
                    {move || view_state.with(|v| v.action_label.clone())}
                </button>

                <Show when=has_address>
                    <div style="display: flex; gap: 12px; margin-top: 12px;">
                        <button class="btn btn-secondary" style="flex: 1;" on:click=move |_| wallet.refresh()>
                            "Refresh"
                        </button>
                        <button class="btn btn-secondary" style="flex: 1;" on:click=move |_| wallet.disconnect()>
                            "Disconnect"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
