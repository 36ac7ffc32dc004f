//! Todo Reducer
//!
//! Pure `(state, action) -> state` transitions for the todo list.

use std::collections::HashSet;

use crate::models::{Filter, Todo};
use crate::store::TodoState;

/// Everything that can change the list
#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    /// Append a record; the caller generates its id
    Add(Todo),
    Toggle(String),
    Delete(String),
    ClearCompleted,
    SetFilter(Filter),
    /// Swap in a whole list, e.g. one loaded from storage
    ReplaceAll(Vec<Todo>),
}

/// Compute the next state. `state` is never modified.
///
/// Actions naming an id that is not in the list leave it unchanged.
pub fn reduce(state: &TodoState, action: TodoAction) -> TodoState {
    let filter = state.filter;
    match action {
        TodoAction::Add(todo) => {
            if state.todos.iter().any(|t| t.id == todo.id) {
                return state.clone();
            }
            let mut todos = state.todos.clone();
            todos.push(todo);
            TodoState { todos, filter }
        }
        TodoAction::Toggle(id) => TodoState {
            todos: state
                .todos
                .iter()
                .map(|t| {
                    if t.id == id {
                        Todo { completed: !t.completed, ..t.clone() }
                    } else {
                        t.clone()
                    }
                })
                .collect(),
            filter,
        },
        TodoAction::Delete(id) => TodoState {
            todos: state.todos.iter().filter(|t| t.id != id).cloned().collect(),
            filter,
        },
        TodoAction::ClearCompleted => TodoState {
            todos: state.todos.iter().filter(|t| !t.completed).cloned().collect(),
            filter,
        },
        TodoAction::SetFilter(filter) => TodoState {
            todos: state.todos.clone(),
            filter,
        },
        TodoAction::ReplaceAll(todos) => {
            // First occurrence of an id wins
            let mut seen = HashSet::new();
            let todos = todos.into_iter().filter(|t| seen.insert(t.id.clone())).collect();
            TodoState { todos, filter }
        }
    }
}
