//! UI Components
//!
//! Reusable Leptos components.

mod todo_list;
mod todo_item;
mod new_todo_form;
mod todo_stats;
mod filter_selector;

pub use todo_list::TodoList;
pub use todo_item::TodoItem;
pub use new_todo_form::NewTodoForm;
pub use todo_stats::TodoStats;
pub use filter_selector::FilterSelector;
