//! Platform-specific configuration

/// Submit shortcut display for help text.
/// Ctrl+S works on all platforms; Cmd+S is captured by most macOS terminals.
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
