//! Window toolbar with the configuration commands

use crate::app::AppState;
use crate::types::view::ViewCommand;
use dioxus::prelude::*;

#[component]
pub fn Toolbar() -> Element {
    let app_state = use_context::<AppState>();
    let enabled = app_state.view.read().toolbar_enabled();
    let mut app_state_chat = app_state;
    let mut app_state_system = app_state;

    rsx! {
        div {
            class: "flex-none flex gap-2 px-4 py-2 border-b border-white/[0.1]",
            button {
                class: "py-1 px-3 rounded text-sm disabled:opacity-30",
                title: "Set up the current chat",
                disabled: !enabled,
                onclick: move |_| app_state_chat.dispatch(ViewCommand::ConfigureChat),
                "Configure chat"
            }
            button {
                class: "py-1 px-3 rounded text-sm disabled:opacity-30",
                title: "System configuration options",
                disabled: !enabled,
                onclick: move |_| app_state_system.dispatch(ViewCommand::ConfigureSystem),
                "Configure system"
            }
        }
    }
}
