//! View state machine
//!
//! The main window shows exactly one view at a time. Toolbar commands open
//! a configuration panel from the main view; the panel's OK or Cancel
//! returns to it.

/// Which panel fills the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Main,
    ChatConfig,
    SystemConfig,
}

/// User actions that move between views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    /// Toolbar: configure the current chat
    ConfigureChat,
    /// Toolbar: configure the system
    ConfigureSystem,
    /// Panel OK button
    Ok,
    /// Panel Cancel button
    Cancel,
}

impl View {
    /// Next view after `command`, or `None` if the command is not available
    /// from this view.
    pub fn apply(self, command: ViewCommand) -> Option<View> {
        match (self, command) {
            (View::Main, ViewCommand::ConfigureChat) => Some(View::ChatConfig),
            (View::Main, ViewCommand::ConfigureSystem) => Some(View::SystemConfig),
            (View::ChatConfig | View::SystemConfig, ViewCommand::Ok | ViewCommand::Cancel) => {
                Some(View::Main)
            }
            _ => None,
        }
    }

    /// Toolbar commands are only enabled while the main view is shown
    pub fn toolbar_enabled(self) -> bool {
        self == View::Main
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolbar_opens_panels() {
        assert_eq!(View::Main.apply(ViewCommand::ConfigureChat), Some(View::ChatConfig));
        assert_eq!(View::Main.apply(ViewCommand::ConfigureSystem), Some(View::SystemConfig));
    }

    #[test]
    fn test_panels_return_to_main() {
        for view in [View::ChatConfig, View::SystemConfig] {
            assert_eq!(view.apply(ViewCommand::Ok), Some(View::Main));
            assert_eq!(view.apply(ViewCommand::Cancel), Some(View::Main));
        }
    }

    #[test]
    fn test_unavailable_commands() {
        assert_eq!(View::Main.apply(ViewCommand::Ok), None);
        assert_eq!(View::Main.apply(ViewCommand::Cancel), None);
        assert_eq!(View::ChatConfig.apply(ViewCommand::ConfigureSystem), None);
        assert_eq!(View::SystemConfig.apply(ViewCommand::ConfigureChat), None);
    }

    #[test]
    fn test_toolbar_enabled() {
        assert!(View::Main.toolbar_enabled());
        assert!(!View::ChatConfig.toolbar_enabled());
        assert!(!View::SystemConfig.toolbar_enabled());
    }
}
