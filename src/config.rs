//! Storage keys and defaults.

/// localStorage key for the theme flag (`true` = dark)
pub const THEME_KEY: &str = "theme";

/// localStorage key for the serialized todo list
pub const TODOS_KEY: &str = "todos";

/// Theme used when nothing is stored yet
pub const DEFAULT_DARK: bool = true;
