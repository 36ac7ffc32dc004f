//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::logging::log;
use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Dark theme on - read
    pub is_dark: ReadSignal<bool>,
    /// Dark theme on - write (persisted by the signal's own effect)
    set_is_dark: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(theme: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            is_dark: theme.0,
            set_is_dark: theme.1,
        }
    }

    /// Flip between dark and light
    pub fn toggle_theme(&self) {
        self.set_is_dark.update(|dark| *dark = !*dark);
        log!("[THEME] dark={}", self.is_dark.get_untracked());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
