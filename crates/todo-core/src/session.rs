//! Todo Session
//!
//! The list plus the row being edited, for one page load. Every
//! successful mutation closes the editor and saves the whole list;
//! rejected mutations save nothing.
//!
//! A failed save is logged and does not undo the mutation: the in-memory
//! list stays authoritative and the next successful mutation saves again.

use crate::domain::{DomainResult, TodoItem};
use crate::list::TodoList;
use crate::repository::Repository;

pub struct TodoSession<R> {
    todos: TodoList,
    editing: Option<u64>,
    repository: R,
}

impl<R: Repository<TodoItem>> TodoSession<R> {
    /// Load the stored list; any load failure starts the session empty
    pub fn open(repository: R) -> Self {
        let todos = match repository.load() {
            Ok(records) => {
                let todos = TodoList::from_items(records);
                log::info!("[STORE] Loaded {} todos", todos.len());
                todos
            }
            Err(e) => {
                log::error!("[STORE] Could not load todos, starting empty: {}", e);
                TodoList::new()
            }
        };
        Self {
            todos,
            editing: None,
            repository,
        }
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    /// Id of the row currently in edit mode
    pub fn editing(&self) -> Option<u64> {
        self.editing
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn add(&mut self, text: &str, now_ms: u64) -> DomainResult<TodoItem> {
        let todo = self.todos.add(text, now_ms)?;
        log::info!("[STORE] Added todo {}", todo.id);
        self.after_mutation();
        Ok(todo)
    }

    pub fn delete(&mut self, id: u64) -> DomainResult<TodoItem> {
        let todo = self.todos.delete(id)?;
        log::info!("[STORE] Deleted todo {}", id);
        self.after_mutation();
        Ok(todo)
    }

    pub fn toggle(&mut self, id: u64) -> DomainResult<bool> {
        let completed = self.todos.toggle(id)?;
        log::info!("[STORE] Todo {} completed={}", id, completed);
        self.after_mutation();
        Ok(completed)
    }

    /// Switch `id` into edit mode; any other open editor closes
    pub fn begin_edit(&mut self, id: u64) {
        self.editing = Some(id);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Apply edited text and leave edit mode, whether or not the edit applied.
    pub fn commit_edit(&mut self, id: u64, text: &str) -> DomainResult<TodoItem> {
        self.editing = None;
        let todo = self.todos.edit(id, text)?;
        log::info!("[STORE] Edited todo {}", id);
        self.after_mutation();
        Ok(todo)
    }

    fn after_mutation(&mut self) {
        // The list re-renders from scratch, so no row stays in edit mode.
        self.editing = None;
        if let Err(e) = self.repository.save(self.todos.items()) {
            log::error!("[STORE] Save failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::repository::{JsonRepository, KeyValueStore, MemoryStore};

    fn setup_session() -> TodoSession<JsonRepository<MemoryStore>> {
        TodoSession::open(JsonRepository::new(MemoryStore::new(), "todos"))
    }

    fn stored(session: &TodoSession<JsonRepository<MemoryStore>>) -> Option<String> {
        session.repository().store().raw("todos")
    }

    #[test]
    fn test_open_loads_stored_list() {
        let raw = r#"[{"id":1,"text":"Legacy","completed":true}]"#;
        let session = TodoSession::open(JsonRepository::new(MemoryStore::with_entry("todos", raw), "todos"));
        assert_eq!(session.todos().len(), 1);
        assert!(session.todos().get(1).unwrap().completed);
        assert_eq!(session.editing(), None);
    }

    #[test]
    fn test_open_with_corrupt_storage_starts_empty() {
        let session = TodoSession::open(JsonRepository::new(MemoryStore::with_entry("todos", "{oops"), "todos"));
        assert!(session.todos().is_empty());
        assert_eq!(stored(&session).as_deref(), Some("{oops"));
    }

    #[test]
    fn test_every_mutation_saves() {
        let mut session = setup_session();

        session.add("Buy milk", 10).unwrap();
        assert_eq!(stored(&session).as_deref(), Some(r#"[{"id":10,"text":"Buy milk","completed":false}]"#));

        session.toggle(10).unwrap();
        assert_eq!(stored(&session).as_deref(), Some(r#"[{"id":10,"text":"Buy milk","completed":true}]"#));

        session.commit_edit(10, " Buy oat milk ").unwrap();
        assert_eq!(stored(&session).as_deref(), Some(r#"[{"id":10,"text":"Buy oat milk","completed":true}]"#));

        session.delete(10).unwrap();
        assert_eq!(stored(&session).as_deref(), Some("[]"));
    }

    #[test]
    fn test_rejected_mutations_save_nothing() {
        let mut session = setup_session();
        assert!(matches!(session.add("   ", 10), Err(DomainError::InvalidInput(_))));
        assert_eq!(stored(&session), None);

        session.add("Walk dog", 20).unwrap();
        let before = stored(&session);

        assert!(matches!(session.commit_edit(20, ""), Err(DomainError::InvalidInput(_))));
        assert!(matches!(session.toggle(99), Err(DomainError::NotFound(_))));
        assert!(matches!(session.delete(99), Err(DomainError::NotFound(_))));
        assert!(matches!(session.commit_edit(99, "x"), Err(DomainError::NotFound(_))));

        assert_eq!(stored(&session), before);
        assert_eq!(session.todos().get(20).unwrap().text, "Walk dog");
    }

    #[test]
    fn test_empty_edit_closes_editor() {
        let mut session = setup_session();
        session.add("Call mom", 1).unwrap();

        session.begin_edit(1);
        assert_eq!(session.editing(), Some(1));

        assert!(session.commit_edit(1, "  ").is_err());
        assert_eq!(session.editing(), None);
        assert_eq!(session.todos().get(1).unwrap().text, "Call mom");
    }

    #[test]
    fn test_any_mutation_closes_editor() {
        let mut session = setup_session();
        session.add("one", 1).unwrap();
        session.add("two", 2).unwrap();

        session.begin_edit(1);
        session.toggle(2).unwrap();
        assert_eq!(session.editing(), None);

        session.begin_edit(1);
        session.add("three", 3).unwrap();
        assert_eq!(session.editing(), None);

        session.begin_edit(1);
        session.delete(3).unwrap();
        assert_eq!(session.editing(), None);

        session.begin_edit(2);
        session.begin_edit(1);
        assert_eq!(session.editing(), Some(1));
        session.cancel_edit();
        assert_eq!(session.editing(), None);
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get_item(&self, _key: &str) -> DomainResult<Option<String>> {
            Ok(None)
        }

        fn set_item(&self, _key: &str, _value: &str) -> DomainResult<()> {
            Err(DomainError::Internal("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_failed_save_keeps_mutation() {
        let mut session = TodoSession::open(JsonRepository::new(FailingStore, "todos"));
        session.begin_edit(5);

        let added = session.add("Still here", 5).unwrap();
        assert_eq!(session.todos().get(added.id).unwrap().text, "Still here");
        assert_eq!(session.editing(), None);
    }
}
