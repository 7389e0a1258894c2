//! UI Components
//!
//! Leptos components that render the view store and turn DOM events into
//! controller calls.

mod error_modal;
mod new_todo_form;
mod todo_item;
mod todo_list;

pub use error_modal::ErrorModal;
pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
