//! Chat interface components
//!
//! Contains the main chat view, message display, and input components.

pub mod input;
pub mod message;

use crate::app::AppState;
use dioxus::prelude::*;
use input::ChatInput;
use message::MessageBubble;

#[component]
pub fn ChatView() -> Element {
    let app_state = use_context::<AppState>();
    let messages = app_state.session.read().messages().to_vec();
    let mut session = app_state.session;

    let handle_send = move |text: String| {
        if session.write().submit(&text).is_none() {
            tracing::debug!("Ignoring empty message");
        }
    };

    rsx! {
        div {
            class: "flex flex-col h-full min-h-0",

            // Message history
            div {
                class: "flex-1 overflow-y-auto scrollbar-thin",
                for (index, message) in messages.into_iter().enumerate() {
                    MessageBubble { key: "{index}", message: message }
                }
            }

            ChatInput { on_send: handle_send }
        }
    }
}
