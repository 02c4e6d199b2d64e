//! Chat configuration panel
//!
//! Edits a copy of the session's chat configuration. Fields are validated
//! as they are typed; OK commits the copy, Cancel drops it. Named
//! configurations can be saved to and loaded from the data directory.

use super::PanelButtons;
use crate::app::AppState;
use crate::storage::chat_config::{
    available_filenames, path_for_name, ChatConfiguration, ChatField, ChatForm,
};
use crate::types::view::ViewCommand;
use dioxus::prelude::*;
use std::path::{Path, PathBuf};

const LABEL_WIDTH_PX: u32 = 100;

/// `(path, name)` of every saved configuration, sorted by name
fn saved_configurations(dir: &Path) -> Vec<(String, String)> {
    let paths = match available_filenames(dir) {
        Ok(paths) => paths,
        Err(e) => {
            tracing::warn!("Failed to list chat configurations in {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut saved: Vec<(String, String)> = paths
        .filter_map(|path| {
            let name = path.file_stem()?.to_string_lossy().into_owned();
            Some((path.display().to_string(), name))
        })
        .collect();
    saved.sort_by(|a, b| a.1.cmp(&b.1));
    saved
}

#[component]
pub fn ChatConfigPanel() -> Element {
    let app_state = use_context::<AppState>();
    let mut draft = use_signal(|| app_state.session.peek().configuration().clone());
    let mut form = use_signal(|| ChatForm::from(app_state.session.peek().configuration()));
    let mut save_name = use_signal(|| draft.peek().name().unwrap_or_default());
    let mut status = use_signal(|| Option::<String>::None);

    let data_dir = app_state.data_dir.read().clone();
    let saved = saved_configurations(&data_dir);
    let status_text = status.read().clone();

    let mut app_state_ok = app_state;
    let on_ok = move |_| {
        let mut config = draft();
        match form.read().apply_to(&mut config) {
            Ok(()) => {
                app_state_ok.session.write().set_configuration(config);
                app_state_ok.dispatch(ViewCommand::Ok);
            }
            Err(e) => status.set(Some(e.to_string())),
        }
    };

    let mut app_state_cancel = app_state;
    let on_cancel = move |_| app_state_cancel.dispatch(ViewCommand::Cancel);

    let on_save = move |_| {
        let name = save_name.read().trim().to_string();
        if name.is_empty() {
            status.set(Some("Enter a name to save the configuration under".to_string()));
            return;
        }

        let mut config = draft();
        if let Err(e) = form.read().apply_to(&mut config) {
            status.set(Some(e.to_string()));
            return;
        }

        let path = path_for_name(&data_dir, &name);
        match config.write_to_file(Some(path.as_path())) {
            Ok(()) => {
                status.set(Some(format!("Saved \"{}\"", name)));
                draft.set(config);
            }
            Err(e) => {
                tracing::error!("Failed to save chat configuration: {}", e);
                status.set(Some(e.to_string()));
            }
        }
    };

    let on_load = move |evt: FormEvent| {
        let value = evt.value();
        if value.is_empty() {
            return;
        }

        match ChatConfiguration::load(PathBuf::from(&value)) {
            Ok(config) => {
                let name = config.name().unwrap_or_default();
                form.set(ChatForm::from(&config));
                status.set(Some(format!("Loaded \"{}\"", name)));
                save_name.set(name);
                draft.set(config);
            }
            Err(e) => {
                tracing::warn!("Failed to load chat configuration {}: {}", value, e);
                status.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div {
            class: "flex flex-col gap-3 p-6 max-w-3xl mx-auto",

            for field in ChatField::ALL {
                ChatFieldInput { key: "{field:?}", field: field, form: form }
            }

            // Saved configurations
            div {
                class: "flex flex-row gap-2 items-center pt-4",
                select {
                    class: "p-2 rounded bg-white/[0.05]",
                    onchange: on_load,
                    option { value: "", "Load configuration..." }
                    for (path, name) in saved {
                        option { key: "{path}", value: "{path}", "{name}" }
                    }
                }
                input {
                    r#type: "text",
                    class: "flex-1 p-2 rounded bg-white/[0.05]",
                    placeholder: "Configuration name",
                    value: "{save_name}",
                    oninput: move |evt| save_name.set(evt.value()),
                }
                button {
                    class: "py-2 px-4 rounded-lg text-sm font-medium",
                    onclick: on_save,
                    "Save"
                }
            }

            {status_text.map(|text| rsx! {
                p { class: "text-xs opacity-70", "{text}" }
            })}

            PanelButtons { on_ok: on_ok, on_cancel: on_cancel }
        }
    }
}

/// Label, input and live error message for one field
#[component]
fn ChatFieldInput(field: ChatField, form: Signal<ChatForm>) -> Element {
    let mut form = form;
    let field_label = field.label();
    let value = form.read().get(field).to_string();
    let error = form.read().error(field);

    if field == ChatField::SystemContent {
        return rsx! {
            div {
                class: "flex flex-col gap-1",
                label { class: "font-medium", "{field_label}" }
                textarea {
                    class: "p-2 rounded bg-white/[0.05] h-32 resize-y",
                    value: "{value}",
                    oninput: move |evt| form.write().set(field, evt.value()),
                }
            }
        };
    }

    rsx! {
        div {
            class: "flex flex-row gap-2 items-center",
            label {
                style: "width: {LABEL_WIDTH_PX}px;",
                "{field_label}"
            }
            input {
                r#type: "text",
                class: "p-2 rounded bg-white/[0.05]",
                value: "{value}",
                oninput: move |evt| form.write().set(field, evt.value()),
            }
            {error.map(|message| rsx! {
                span { class: "text-xs text-[#f99]", "{message}" }
            })}
        }
    }
}
