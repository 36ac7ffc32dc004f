//! Todo List Component
//!
//! Owns the todo store, keeps localStorage in sync, and lays out the
//! header, form, rows and stats bar.

use leptos::prelude::*;
use leptos_storage::LocalStorage;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TodoItem, TodoStats};
use crate::context::use_app_context;
use crate::store::{persist_todos_in, TodoState, TodoStore};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();

    let store: TodoStore = Store::new(TodoState::default());
    provide_context(store);

    persist_todos_in(store, LocalStorage::new());

    let visible = Memo::new(move |_| store.with(TodoState::visible));

    view! {
        <div class="todo-list container">
            <div class="row space-between mb-50">
                <h1>"Todo"</h1>
                <button class="toggle" on:click=move |_| ctx.toggle_theme()>
                    <img class="sun" src="images/icon-sun.svg" alt="" />
                    <img class="moon" src="images/icon-moon.svg" alt="" />
                </button>
            </div>

            <NewTodoForm />

            <div class="todos">
                <For
                    each=move || visible.get()
                    // completed is part of the key so a toggled row re-renders
                    key=|todo| (todo.id.clone(), todo.completed)
                    children=move |todo| view! { <TodoItem todo=todo /> }
                />
            </div>

            <TodoStats />
        </div>
    }
}
