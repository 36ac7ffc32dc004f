//! Todo Stats Component
//!
//! Remaining count, filter buttons, and clear-completed. Rendered twice:
//! a single row for desktop and a stacked block for mobile; CSS hides one.

use leptos::prelude::*;

use crate::components::FilterSelector;
use crate::models::Filter;
use crate::reducer::TodoAction;
use crate::store::{dispatch, use_todo_store, TodoState, TodoStateStoreFields};

#[component]
pub fn TodoStats() -> impl IntoView {
    let store = use_todo_store();

    let items_left = move || format!("{} Items Left", store.with(TodoState::remaining));
    let current = Signal::derive(move || store.filter().get());
    let set_filter = move |filter: Filter| dispatch(store, TodoAction::SetFilter(filter));
    let clear = move |_| dispatch(store, TodoAction::ClearCompleted);

    view! {
        <div class="desktop row space-between todos-stats todo-container">
            <div class="count">{items_left}</div>
            <FilterSelector class="filter" current=current on_change=set_filter />
            <button class="clear" on:click=clear>"Clear Completed"</button>
        </div>
        <div class="mobile todos-stats">
            <div class="row space-between todo-container mb-30">
                <div class="count">{items_left}</div>
                <button class="clear" on:click=clear>"Clear Completed"</button>
            </div>
            <FilterSelector class="filter todo-container" current=current on_change=set_filter />
        </div>
    }
}
