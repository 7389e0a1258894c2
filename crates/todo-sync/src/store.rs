//! Todo State Store
//!
//! In-memory source of truth for what should be rendered.
//! Never talks to the remote collection.

use crate::models::{Todo, TodoId, User, UserId};

/// Ordered todos and users, ids unique within each
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoStore {
    todos: Vec<Todo>,
    users: Vec<User>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk load, keeping the given order. Later duplicates of an id are dropped.
    pub fn replace_all(&mut self, todos: Vec<Todo>, users: Vec<User>) {
        self.todos.clear();
        for todo in todos {
            if !self.contains(todo.id) {
                self.todos.push(todo);
            }
        }

        self.users.clear();
        for user in users {
            if self.find_user_by_id(user.id).is_none() {
                self.users.push(user);
            }
        }
    }

    /// Prepend a todo. A record with the same id is replaced and moved to the head.
    pub fn insert(&mut self, todo: Todo) {
        self.todos.retain(|t| t.id != todo.id);
        self.todos.insert(0, todo);
    }

    pub fn remove_by_id(&mut self, id: TodoId) -> Option<Todo> {
        let index = self.todos.iter().position(|t| t.id == id)?;
        Some(self.todos.remove(index))
    }

    /// Update completion in place, returning the previous value
    pub fn set_completed(&mut self, id: TodoId, completed: bool) -> Option<bool> {
        self.todos
            .iter_mut()
            .find(|t| t.id == id)
            .map(|t| std::mem::replace(&mut t.completed, completed))
    }

    pub fn find_user_by_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_todo_by_id(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.find_todo_by_id(id).is_some()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
