//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::storage::chat_config::ChatConfiguration;
use crate::storage::system_config::SystemConfiguration;
use crate::storage::{get_config_dir, get_data_dir};
use crate::types::session::ChatSession;
use crate::types::view::{View, ViewCommand};
use crate::ui::Layout;
use dioxus::prelude::*;
use std::path::PathBuf;

/// Global application state shared across components
#[derive(Clone, Copy)]
pub struct AppState {
    /// Panel currently filling the main window
    pub view: Signal<View>,
    pub session: Signal<ChatSession>,
    pub system_config: Signal<SystemConfiguration>,
    /// Directory holding saved chat configurations
    pub data_dir: Signal<PathBuf>,
}

impl AppState {
    pub fn new() -> Self {
        let config_dir = get_config_dir().unwrap_or_else(|e| {
            tracing::warn!("No config directory ({}), using the working directory", e);
            PathBuf::from(".")
        });
        let data_dir = get_data_dir().unwrap_or_else(|e| {
            tracing::warn!("No data directory ({}), using the working directory", e);
            PathBuf::from(".")
        });
        tracing::debug!("config path: {}", config_dir.display());
        tracing::debug!("data path: {}", data_dir.display());

        let system_config = SystemConfiguration::load(config_dir);
        tracing::info!("AppState initialized, server: {}", system_config.server_address());

        Self {
            view: Signal::new(View::Main),
            session: Signal::new(ChatSession::new(ChatConfiguration::default())),
            system_config: Signal::new(system_config),
            data_dir: Signal::new(data_dir),
        }
    }

    /// Move to the view `command` leads to; unavailable commands are ignored
    pub fn dispatch(&mut self, command: ViewCommand) {
        let current = *self.view.read();
        match current.apply(command) {
            Some(next) => {
                tracing::debug!("View {:?} -> {:?} on {:?}", current, next, command);
                self.view.set(next);
            }
            None => tracing::debug!("Ignoring {:?} in view {:?}", command, current),
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        Layout {}
    }
}
