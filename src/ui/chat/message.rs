//! Message display component

use crate::types::message::{Message, Role};
use dioxus::prelude::*;

const FONT_SIZE_PX: u32 = 12;
const ROLE_WIDTH_PX: u32 = 100;

/// Foreground and background colours of the role label and message text
fn colours(role: Role) -> ((&'static str, &'static str), (&'static str, &'static str)) {
    match role {
        Role::Assistant => (("#f99", "#333"), ("#ddd", "#333")),
        Role::User | Role::System => (("#99f", "#111"), ("#aaa", "#111")),
    }
}

/// One row of the chat history: role on the left, text on the right
#[component]
pub fn MessageBubble(message: Message) -> Element {
    let ((role_fg, role_bg), (text_fg, text_bg)) = colours(message.role);
    let label = message.role.label();

    let role_style = format!(
        "color: {role_fg}; background: {role_bg}; font-size: {FONT_SIZE_PX}px; width: {ROLE_WIDTH_PX}px;"
    );
    let text_style = format!("color: {text_fg}; background: {text_bg}; font-size: {FONT_SIZE_PX}px;");

    rsx! {
        div {
            class: "flex flex-row",
            div {
                class: "flex-none px-2 py-1",
                style: "{role_style}",
                "{label}"
            }
            div {
                class: "flex-1 px-2 py-1 whitespace-pre-wrap",
                style: "{text_style}",
                "{message.content}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_colours_differ_from_user() {
        assert_ne!(colours(Role::Assistant), colours(Role::User));
        assert_eq!(colours(Role::System), colours(Role::User));
    }
}
