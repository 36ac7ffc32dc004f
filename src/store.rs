//! Todo List State Store
//!
//! Uses Leptos reactive_stores so the list and the filter bar subscribe
//! to their own fields.

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_storage::{read, write, KeyValueStore};
use reactive_stores::Store;

use crate::config::TODOS_KEY;
use crate::models::{Filter, Todo};
use crate::reducer::{reduce, TodoAction};

/// The list as the user sees it: records in insertion order plus the filter
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TodoState {
    pub todos: Vec<Todo>,
    pub filter: Filter,
}

impl TodoState {
    /// Records passing the current filter, in list order
    pub fn visible(&self) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|todo| self.filter.matches(todo))
            .cloned()
            .collect()
    }

    /// Number of records not yet completed
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Run `action` through the reducer and swap in the resulting state
pub fn dispatch(store: TodoStore, action: TodoAction) {
    store.update(|state| *state = reduce(state, action));
}

/// Load saved todos from `storage` into `store`, then write the list back
/// after every change
pub fn persist_todos_in<S>(store: TodoStore, storage: S)
where
    S: KeyValueStore + 'static,
{
    let saved: Vec<Todo> = read(&storage, TODOS_KEY, Vec::new());
    log!("[TODOS] Loaded {} todos from storage", saved.len());
    dispatch(store, TodoAction::ReplaceAll(saved));

    if !storage.is_available() {
        warn!("[TODOS] No storage available, changes will not persist");
        return;
    }

    Effect::new(move |_| {
        store.todos().with(|todos| write(&storage, TODOS_KEY, todos));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_DARK, THEME_KEY};
    use any_spawner::Executor;
    use leptos_storage::MemoryStore;
    use proptest::prelude::*;

    fn setup() -> Owner {
        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.set();
        owner
    }

    fn stored_todos(storage: &MemoryStore) -> Vec<Todo> {
        read(storage, TODOS_KEY, Vec::new())
    }

    #[test]
    fn test_hydrates_then_mirrors_every_change() {
        let _owner = setup();
        let storage = MemoryStore::new();
        storage
            .set_item(TODOS_KEY, r#"[{"id":"a","todo":"Buy groceries","completed":false}]"#)
            .unwrap();

        let store: TodoStore = Store::new(TodoState::default());
        persist_todos_in(store, storage.clone());
        assert_eq!(store.with_untracked(|s| s.todos.len()), 1);

        Executor::poll_local();
        assert_eq!(stored_todos(&storage).len(), 1);

        let milk = Todo::new("Buy milk");
        let milk_id = milk.id.clone();
        dispatch(store, TodoAction::Add(milk));
        Executor::poll_local();
        let saved = stored_todos(&storage);
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[1].text, "Buy milk");
        assert!(!saved[1].completed);

        dispatch(store, TodoAction::Toggle(milk_id.clone()));
        Executor::poll_local();
        assert!(stored_todos(&storage)[1].completed);
        let raw = storage.get_item(TODOS_KEY).unwrap().unwrap();
        assert!(raw.contains(r#""todo":"Buy milk","completed":true"#));

        dispatch(store, TodoAction::ClearCompleted);
        Executor::poll_local();
        let saved = stored_todos(&storage);
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, "a");
    }

    #[test]
    fn test_filter_change_keeps_stored_list() {
        let _owner = setup();
        let storage = MemoryStore::new();

        let store: TodoStore = Store::new(TodoState::default());
        persist_todos_in(store, storage.clone());
        dispatch(store, TodoAction::Add(Todo::new("Read a book")));
        Executor::poll_local();

        dispatch(store, TodoAction::SetFilter(Filter::Completed));
        Executor::poll_local();
        assert_eq!(stored_todos(&storage).len(), 1);
        assert_eq!(store.with_untracked(|s| s.visible().len()), 0);
    }

    #[test]
    fn test_fresh_storage_gives_defaults() {
        let storage = MemoryStore::new();
        let todos: Vec<Todo> = read(&storage, TODOS_KEY, Vec::new());
        assert!(todos.is_empty());
        assert_eq!(read(&storage, THEME_KEY, DEFAULT_DARK), DEFAULT_DARK);
    }

    #[test]
    fn test_corrupt_todos_fall_back_to_empty() {
        let storage = MemoryStore::new();
        storage.set_item(TODOS_KEY, r#"[{"id":1,"todo":"Buy groceries"}]"#).unwrap();

        let todos: Vec<Todo> = read(&storage, TODOS_KEY, Vec::new());
        assert!(todos.is_empty());
    }

    #[test]
    fn test_theme_round_trip() {
        let storage = MemoryStore::new();
        write(&storage, THEME_KEY, &false);
        assert!(!read(&storage, THEME_KEY, DEFAULT_DARK));
    }

    proptest! {
        #[test]
        fn todos_round_trip(rows in proptest::collection::vec(("[a-f0-9-]{1,36}", ".{0,20}", any::<bool>()), 0..8)) {
            let todos: Vec<Todo> = rows
                .into_iter()
                .map(|(id, text, completed)| Todo { id, text, completed })
                .collect();
            let storage = MemoryStore::new();

            write(&storage, TODOS_KEY, &todos);
            let loaded: Vec<Todo> = read(&storage, TODOS_KEY, Vec::new());
            prop_assert_eq!(loaded, todos);
        }
    }
}
