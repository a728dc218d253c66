//! Todo List
//!
//! The ordered in-memory sequence that owns every `TodoItem` for the
//! lifetime of the page. All four mutations go through here.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{normalize_text, DomainError, DomainResult, TodoItem};

/// Ordered sequence of to-do items with unique ids
///
/// Only serializable; loaded records come back through `from_items`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from loaded records.
    ///
    /// Records with empty text or a repeated id are skipped; the first
    /// occurrence of an id wins.
    pub fn from_items(records: Vec<TodoItem>) -> Self {
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(records.len());
        for record in records {
            if record.text.trim().is_empty() {
                log::warn!("[LIST] Skipping stored todo {} with empty text", record.id);
                continue;
            }
            if !seen.insert(record.id) {
                log::warn!("[LIST] Skipping stored todo with duplicate id {}", record.id);
                continue;
            }
            items.push(record);
        }
        Self { items }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodoItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.items.iter().find(|todo| todo.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|todo| todo.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Id for an item created at `now_ms`.
    ///
    /// Two adds within the same millisecond (or a clock going backwards)
    /// would collide, so the id never drops below `max_id + 1`. If stored
    /// data already holds `u64::MAX`, the lowest unused id is taken instead.
    fn next_id(&self, now_ms: u64) -> u64 {
        match self.items.iter().map(|todo| todo.id).max() {
            Some(max_id) if now_ms <= max_id => match max_id.checked_add(1) {
                Some(id) => id,
                None => self.lowest_unused_id(),
            },
            _ => now_ms,
        }
    }

    fn lowest_unused_id(&self) -> u64 {
        let taken: HashSet<u64> = self.items.iter().map(|todo| todo.id).collect();
        // At most `len` ids are taken, so one of 0..=len is free.
        (0..=self.items.len() as u64)
            .find(|id| !taken.contains(id))
            .unwrap_or_default()
    }

    /// Append a new item. Empty (after trimming) text is rejected.
    pub fn add(&mut self, text: &str, now_ms: u64) -> DomainResult<TodoItem> {
        let text = normalize_text(text)
            .ok_or_else(|| DomainError::InvalidInput("todo text is empty".to_string()))?;
        let todo = TodoItem::new(self.next_id(now_ms), text);
        self.items.push(todo.clone());
        Ok(todo)
    }

    /// Remove the item with `id`, returning it.
    pub fn delete(&mut self, id: u64) -> DomainResult<TodoItem> {
        let index = self.position(id)?;
        Ok(self.items.remove(index))
    }

    /// Flip completion of the item with `id`; returns the new state.
    pub fn toggle(&mut self, id: u64) -> DomainResult<bool> {
        let index = self.position(id)?;
        let toggled = self.items[index].toggled();
        let completed = toggled.completed;
        self.items[index] = toggled;
        Ok(completed)
    }

    /// Replace the text of the item with `id`. Empty text leaves it untouched.
    pub fn edit(&mut self, id: u64, text: &str) -> DomainResult<TodoItem> {
        let index = self.position(id)?;
        let text = normalize_text(text)
            .ok_or_else(|| DomainError::InvalidInput(format!("new text for todo {} is empty", id)))?;
        let updated = self.items[index].with_text(text);
        self.items[index] = updated.clone();
        Ok(updated)
    }

    fn position(&self, id: u64) -> DomainResult<usize> {
        self.items
            .iter()
            .position(|todo| todo.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("todo {}", id)))
    }
}
