//! View Renderer Contract
//!
//! The tree-mutation surface the controller drives. Implementations hold only
//! derived rows keyed by todo id, never authoritative state.

use crate::models::{Todo, TodoId, User, UserId};

/// Where a new row goes in the visible list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Head,
    Tail,
}

/// Display data for one todo row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: TodoId,
    pub title: String,
    pub owner: String,
    pub completed: bool,
    pub pending: bool,
}

impl TodoRow {
    /// Build a row, falling back to `user #<id>` when the owner is not loaded
    pub fn new(todo: &Todo, owner: Option<&User>) -> Self {
        let owner = match owner {
            Some(user) => user.name.clone(),
            None => format!("user #{}", todo.user_id),
        };
        Self {
            id: todo.id,
            title: todo.title.clone(),
            owner,
            completed: todo.completed,
            pending: false,
        }
    }

    /// "<title> by <owner>"
    pub fn label(&self) -> String {
        format!("{} by {}", self.title, self.owner)
    }
}

/// One entry of the user selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOption {
    pub value: UserId,
    pub label: String,
}

impl From<&User> for UserOption {
    fn from(user: &User) -> Self {
        Self {
            value: user.id,
            label: user.name.clone(),
        }
    }
}

/// Visual surface driven by the controller
pub trait TodoView {
    /// Add a row bound to `row.id`. Its toggle reports (id, new state), its dismiss control reports id.
    fn render_todo_item(&self, row: TodoRow, placement: Placement);

    /// Append an option to the user selection control
    fn render_user_option(&self, option: UserOption);

    /// Drop the row for `id`. Returns `false` when there was none.
    fn remove_todo_item(&self, id: TodoId) -> bool;

    /// Set the toggle state of a row. Returns `false` when there was none.
    fn set_item_completed(&self, id: TodoId, completed: bool) -> bool;

    /// Mark a row as having a call in flight
    fn set_item_pending(&self, id: TodoId, pending: bool);

    fn clear_title_input(&self);

    /// Present a message in the error overlay
    fn show_error(&self, message: &str);
}
