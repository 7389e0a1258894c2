//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds only what
//! the page shows; the controller's `TodoStore` stays authoritative.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{LoadState, Placement, TodoId, TodoRow, TodoView, UserId, UserOption};

/// Everything the page renders
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Visible todo rows, head first
    pub rows: Vec<TodoRow>,
    /// Options of the user select
    pub user_options: Vec<UserOption>,
    /// Current user selection
    pub selected_user: Option<UserId>,
    /// Title input contents
    pub title: String,
    /// Message in the error overlay, if shown
    pub error: Option<String>,
    /// Progress of the initial load
    pub load_state: LoadState,
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

// ========================
// Row Helpers
// ========================

pub fn place_row(rows: &mut Vec<TodoRow>, row: TodoRow, placement: Placement) {
    match placement {
        Placement::Head => rows.insert(0, row),
        Placement::Tail => rows.push(row),
    }
}

/// Remove the row for `id`; a missing row is not an error
pub fn drop_row(rows: &mut Vec<TodoRow>, id: TodoId) -> bool {
    let before = rows.len();
    rows.retain(|row| row.id != id);
    rows.len() != before
}

pub fn patch_row(rows: &mut [TodoRow], id: TodoId, patch: impl FnOnce(&mut TodoRow)) -> bool {
    match rows.iter_mut().find(|row| row.id == id) {
        Some(row) => {
            patch(row);
            true
        }
        None => false,
    }
}

/// (total, completed)
pub fn row_counts(rows: &[TodoRow]) -> (usize, usize) {
    (rows.len(), rows.iter().filter(|row| row.completed).count())
}

// ========================
// Controller-facing view
// ========================

/// `TodoView` that writes into the reactive store
#[derive(Clone, Copy)]
pub struct StoreView {
    store: ViewStore,
}

impl StoreView {
    pub fn new(store: ViewStore) -> Self {
        Self { store }
    }
}

/// Close the error overlay
pub fn dismiss_error(store: ViewStore) {
    store.error().set(None);
}

impl TodoView for StoreView {
    fn render_todo_item(&self, row: TodoRow, placement: Placement) {
        place_row(&mut self.store.rows().write(), row, placement);
    }

    fn render_user_option(&self, option: UserOption) {
        if self.store.selected_user().get_untracked().is_none() {
            self.store.selected_user().set(Some(option.value));
        }
        self.store.user_options().write().push(option);
    }

    fn remove_todo_item(&self, id: TodoId) -> bool {
        drop_row(&mut self.store.rows().write(), id)
    }

    fn set_item_completed(&self, id: TodoId, completed: bool) -> bool {
        patch_row(&mut self.store.rows().write(), id, |row| row.completed = completed)
    }

    fn set_item_pending(&self, id: TodoId, pending: bool) {
        patch_row(&mut self.store.rows().write(), id, |row| row.pending = pending);
    }

    fn clear_title_input(&self) {
        self.store.title().set(String::new());
    }

    fn show_error(&self, message: &str) {
        self.store.error().set(Some(message.to_string()));
    }
}
