use tracing::debug;

use crate::error::TodoError;
use crate::prompt::Confirm;

pub const COMPLETE_PREFIX: &str = "[x] ";
pub const INCOMPLETE_PREFIX: &str = "[ ] ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub description: String,
    pub complete: bool,
}

impl Todo {
    pub fn new(description: impl Into<String>) -> Self {
        Todo {
            description: description.into(),
            complete: false,
        }
    }

    pub fn completed(description: impl Into<String>) -> Self {
        Todo {
            description: description.into(),
            complete: true,
        }
    }

    pub fn prefix(&self) -> &'static str {
        if self.complete {
            COMPLETE_PREFIX
        } else {
            INCOMPLETE_PREFIX
        }
    }
}

/// Ordered todo items. An item's id is its position, so every removal or
/// swap renumbers the items after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl From<Vec<Todo>> for TodoList {
    fn from(items: Vec<Todo>) -> Self {
        TodoList { items }
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Todo)> {
        self.items.iter().enumerate()
    }

    pub fn incomplete(&self) -> impl Iterator<Item = (usize, &Todo)> {
        self.iter().filter(|(_, todo)| !todo.complete)
    }

    /// Turns user ids into positions, failing on the first one outside
    /// `[0, len)`. The mutators below expect positions from here and panic
    /// on anything out of range.
    pub fn check_ids(&self, ids: &[i64]) -> Result<Vec<usize>, TodoError> {
        ids.iter()
            .map(|&id| {
                usize::try_from(id)
                    .ok()
                    .filter(|idx| *idx < self.items.len())
                    .ok_or(TodoError::InvalidId(id))
            })
            .collect()
    }

    pub fn add(&mut self, description: impl Into<String>) {
        self.items.push(Todo::new(description));
    }

    pub fn edit(&mut self, id: usize, description: impl Into<String>) {
        self.items[id].description = description.into();
    }

    /// Literal, non-overlapping substitution. An empty `from` changes nothing.
    pub fn replace(&mut self, id: usize, from: &str, to: &str) {
        if from.is_empty() {
            return;
        }
        let todo = &mut self.items[id];
        todo.description = todo.description.replace(from, to);
    }

    pub fn mark_complete(&mut self, ids: &[usize]) {
        self.set_complete(ids, true);
    }

    pub fn mark_incomplete(&mut self, ids: &[usize]) {
        self.set_complete(ids, false);
    }

    pub fn swap(&mut self, first: usize, second: usize) {
        self.items.swap(first, second);
    }

    /// Removes the listed items. Incomplete ones are only removed when
    /// `confirm` agrees; complete ones go without asking.
    pub fn remove(&mut self, ids: &[usize], confirm: &mut dyn Confirm) {
        self.remove_if(|id, todo| {
            if !ids.contains(&id) {
                return false;
            }
            todo.complete || confirm.confirm(&format!("todo {id} is incomplete. Remove it?"))
        });
    }

    pub fn remove_complete(&mut self, confirm: &mut dyn Confirm) {
        if confirm.confirm("remove all completed todos?") {
            self.remove_if(|_, todo| todo.complete);
        } else {
            debug!("kept completed todos");
        }
    }

    fn remove_if(&mut self, mut predicate: impl FnMut(usize, &Todo) -> bool) {
        let before = self.items.len();
        let items = std::mem::take(&mut self.items);
        self.items = items
            .into_iter()
            .enumerate()
            .filter(|(id, todo)| !predicate(*id, todo))
            .map(|(_, todo)| todo)
            .collect();
        debug!(removed = before - self.items.len(), "removed todos");
    }

    fn set_complete(&mut self, ids: &[usize], complete: bool) {
        for &id in ids {
            self.items[id].complete = complete;
        }
    }
}
