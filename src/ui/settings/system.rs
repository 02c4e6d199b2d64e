//! System configuration panel

use super::PanelButtons;
use crate::app::AppState;
use crate::storage::system_config::is_valid_server_address;
use crate::types::view::ViewCommand;
use dioxus::prelude::*;

#[component]
pub fn SystemConfigPanel() -> Element {
    let app_state = use_context::<AppState>();
    let mut address =
        use_signal(|| app_state.system_config.peek().server_address().to_string());
    let mut status = use_signal(|| Option::<String>::None);

    let valid = is_valid_server_address(&address.read());
    let status_text = status.read().clone();

    let mut app_state_ok = app_state;
    let on_ok = move |_| {
        let mut config = app_state_ok.system_config.read().clone();
        if let Err(e) = config.set_server_address(address()) {
            status.set(Some(e.to_string()));
            return;
        }
        if let Err(e) = config.store() {
            tracing::error!("Failed to save system configuration: {}", e);
            status.set(Some(e.to_string()));
            return;
        }
        app_state_ok.system_config.set(config);
        app_state_ok.dispatch(ViewCommand::Ok);
    };

    let mut app_state_cancel = app_state;
    let on_cancel = move |_| {
        tracing::debug!(
            "System configuration cancelled, address is: {}",
            app_state_cancel.system_config.read().server_address()
        );
        app_state_cancel.dispatch(ViewCommand::Cancel);
    };

    rsx! {
        div {
            class: "flex flex-col gap-3 p-6 max-w-3xl mx-auto",

            div {
                class: "flex flex-row gap-2 items-center",
                label { class: "font-medium", "Server address" }
                input {
                    r#type: "text",
                    class: "flex-1 p-2 rounded bg-white/[0.05]",
                    value: "{address}",
                    oninput: move |evt| address.set(evt.value()),
                }
                if !valid {
                    span { class: "text-xs text-[#f99]", "must be a valid http(s) URL" }
                }
            }

            {status_text.map(|text| rsx! {
                p { class: "text-xs opacity-70", "{text}" }
            })}

            PanelButtons { on_ok: on_ok, on_cancel: on_cancel }
        }
    }
}
