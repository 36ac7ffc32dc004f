//! Todo Item Component
//!
//! A single row in the list.

use leptos::prelude::*;

use crate::models::Todo;
use crate::reducer::TodoAction;
use crate::store::{dispatch, use_todo_store};

/// Row with a check button, the text, and a delete button
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let store = use_todo_store();

    let Todo { id, text, completed } = todo;
    let toggle_id = id.clone();

    view! {
        <div class=if completed { "completed todo todo-container" } else { "todo todo-container" }>
            <div class="row">
                <button
                    class="check"
                    on:click=move |_| dispatch(store, TodoAction::Toggle(toggle_id.clone()))
                ></button>
                <p class="title">{text}</p>
            </div>
            <button class="cancel" on:click=move |_| dispatch(store, TodoAction::Delete(id.clone()))>
                <img src="images/icon-cross.svg" alt="Delete" />
            </button>
        </div>
    }
}
