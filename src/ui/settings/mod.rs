//! Configuration panels

pub mod chat;
pub mod system;

use dioxus::prelude::*;

/// OK / Cancel row shared by both panels
#[component]
fn PanelButtons(on_ok: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "flex flex-row gap-2 pt-4",
            button {
                class: "py-2 px-4 rounded-lg text-sm font-medium",
                onclick: move |_| on_ok.call(()),
                "OK"
            }
            button {
                class: "py-2 px-4 rounded-lg text-sm font-medium",
                onclick: move |_| on_cancel.call(()),
                "Cancel"
            }
        }
    }
}
