//! Chat input component - message box with a send button

use dioxus::prelude::*;

/// Estimate how many rows the textarea needs based on content
fn compute_rows(text: &str) -> usize {
    let newlines = text.chars().filter(|&c| c == '\n').count();
    // Each visual line ~ 70 chars for our input width
    let wrap_lines: usize = text
        .lines()
        .map(|line| line.len().saturating_sub(1) / 70)
        .sum();
    (newlines + wrap_lines + 1).clamp(1, 8)
}

#[component]
pub fn ChatInput(on_send: EventHandler<String>) -> Element {
    let mut text = use_signal(String::new);

    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
            evt.prevent_default();
            if !text().trim().is_empty() {
                on_send.call(text());
                text.set(String::new());
            }
        }
    };

    let can_send = !text().trim().is_empty();
    let rows_str = compute_rows(&text()).to_string();

    rsx! {
        div {
            class: "flex flex-row gap-2 p-2 border-t border-white/[0.1]",

            textarea {
                class: "flex-1 bg-transparent outline-none resize-none p-2",
                placeholder: "Send a message...",
                value: "{text}",
                rows: "{rows_str}",
                oninput: move |evt| text.set(evt.value()),
                onkeydown: handle_keydown,
            }

            button {
                class: "flex-none w-10 rounded disabled:opacity-30",
                title: "Send (Enter)",
                disabled: !can_send,
                onclick: move |_| {
                    if can_send {
                        on_send.call(text());
                        text.set(String::new());
                    }
                },
                ">"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_rows() {
        assert_eq!(compute_rows(""), 1);
        assert_eq!(compute_rows("one\ntwo\nthree"), 3);
        assert_eq!(compute_rows(&"x".repeat(150)), 3);
        assert_eq!(compute_rows(&"\n".repeat(20)), 8);
    }
}
