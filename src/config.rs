//! Application-level configuration constants.

use log::Level;

// Logging
pub const LOG_QUERY_KEY: &str = "log";
pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

// Page text
pub const APP_TITLE: &str = "Ticket Pool Management System";
pub const CONFIG_HEADING: &str = "Configuration Settings";
pub const STATUS_HEADING: &str = "Ticket Pool Status";

// CSS classes
pub const STATUS_CARD_CLASS: &str = "status-card";
pub const STATUS_CARD_HIGHLIGHT_CLASS: &str = "status-card highlight";
pub const BUTTON_CLASS: &str = "btn";
pub const BUTTON_DISABLED_CLASS: &str = "disabled";
