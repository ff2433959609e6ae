//! Connection Status Page - diagnostics snapshot of the controller

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::connection::use_wallet_context;

#[component]
pub fn StatusPage() -> impl IntoView {
    let wallet = use_wallet_context();
    let navigate = use_navigate();

    let on_disconnect = move |_| {
        wallet.disconnect();
        navigate("/", Default::default());
    };

    // Re-read the snapshot whenever the controller renders a new view
    let diagnostics = move || {
        wallet.view.track();
        wallet.controller().diagnostics()
    };

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="width: 100%; max-width: 600px;">
                <h1 class="card-title" style="text-align: center; margin-bottom: var(--spacing-md);">
                    "Connection Status"
                </h1>

                {move || {
                    let snapshot = diagnostics();
                    let provider_text = if snapshot.provider_present { "Detected" } else { "Not detected" };
                    view! {
                        <div style="background: var(--bg-card); padding: var(--spacing-lg); border-radius: var(--border-radius); border: 1px solid var(--border-color); margin-bottom: var(--spacing-lg);">
                            <p style="color: var(--text-secondary);">"Wallet provider"</p>
                            <p style="margin-bottom: var(--spacing-md);">{provider_text}</p>
                            <p style="color: var(--text-secondary);">"Target chain"</p>
                            <p style="margin-bottom: var(--spacing-md); font-family: monospace;">{snapshot.target_chain_id.clone()}</p>
                            <pre style="font-family: monospace; font-size: 0.85em; white-space: pre-wrap; word-break: break-all;">
                                {snapshot.to_json()}
                            </pre>
                        </div>
                    }
                }}

                <div style="display: flex; gap: 12px;">
                    <button class="btn" style="flex: 1;" on:click=move |_| wallet.refresh()>
                        "Refresh"
                    </button>
                    <button class="btn" style="flex: 1; background: var(--bg-error);" on:click=on_disconnect>
                        "Disconnect Wallet"
                    </button>
                </div>
            </div>
        </div>
    }
}
