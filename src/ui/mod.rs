//! UI components for enChat
//!
//! This module contains all user interface components built with Dioxus.

pub mod chat;
pub mod settings;
pub mod toolbar;

use crate::app::AppState;
use crate::types::view::View;
use chat::ChatView;
use dioxus::prelude::*;
use settings::chat::ChatConfigPanel;
use settings::system::SystemConfigPanel;
use toolbar::Toolbar;

/// Main window: toolbar above whichever view is current
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let view = *app_state.view.read();

    rsx! {
        div {
            class: "flex flex-col h-screen bg-[#222] text-[#ddd]",
            Toolbar {}
            div {
                class: "flex-1 min-h-0",
                match view {
                    View::Main => rsx! { ChatView {} },
                    View::ChatConfig => rsx! { ChatConfigPanel {} },
                    View::SystemConfig => rsx! { SystemConfigPanel {} },
                }
            }
        }
    }
}
