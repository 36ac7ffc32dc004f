//! New Todo Form Component
//!
//! Text input that appends a todo on submit.

use leptos::prelude::*;

use crate::models::Todo;
use crate::reducer::TodoAction;
use crate::store::{dispatch, use_todo_store};

/// Form for creating new todos. Blank input is ignored.
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_todo_store();

    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(todo) = Todo::from_input(&new_text.get()) else { return; };

        dispatch(store, TodoAction::Add(todo));
        set_new_text.set(String::new());
    };

    view! {
        <form class="row todo-container input-container mb-30" on:submit=create_todo>
            <button type="submit" class="check"></button>
            <input
                type="text"
                placeholder="Create A New Todo..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
        </form>
    }
}
