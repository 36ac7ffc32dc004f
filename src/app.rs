//! Todo UI App
//!
//! Root shell: theme flag, background, and the todo list.

use leptos::prelude::*;
use leptos_storage::persisted_signal;

use crate::components::TodoList;
use crate::config::{DEFAULT_DARK, THEME_KEY};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let theme = persisted_signal(THEME_KEY, DEFAULT_DARK);
    let is_dark = theme.0;

    provide_context(AppContext::new(theme));

    view! {
        <div class=move || if is_dark.get() { "dark app" } else { "light app" }>
            <div class="background-image"></div>
            <TodoList />
        </div>
    }
}
