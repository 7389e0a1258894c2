//! In-memory gateway and view used by the controller tests

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::error::{SyncError, SyncResult};
use crate::gateway::TodoGateway;
use crate::models::{NewTodo, Todo, TodoId, User, UserId};
use crate::view::{Placement, TodoRow, TodoView, UserOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    ListTodos,
    ListUsers,
    Create,
    SetCompleted,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListTodos,
    ListUsers,
    Create(NewTodo),
    SetCompleted(TodoId, bool),
    Delete(TodoId),
}

pub fn todo(id: u32, user_id: u32, title: &str) -> Todo {
    Todo {
        id: TodoId(id),
        user_id: UserId(user_id),
        title: title.to_string(),
        completed: false,
    }
}

pub fn user(id: u32, name: &str) -> User {
    User {
        id: UserId(id),
        name: name.to_string(),
    }
}

/// Server stand-in holding its own copy of the collection.
///
/// `fail_next` makes the next call of an op fail; `hold_next` parks it until
/// the returned sender fires.
pub struct FakeGateway {
    todos: RefCell<Vec<Todo>>,
    users: Vec<User>,
    next_id: RefCell<u32>,
    failures: RefCell<HashMap<Op, SyncError>>,
    holds: RefCell<HashMap<Op, oneshot::Receiver<()>>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeGateway {
    pub fn new(todos: Vec<Todo>, users: Vec<User>) -> Self {
        Self {
            todos: RefCell::new(todos),
            users,
            next_id: RefCell::new(201),
            failures: RefCell::new(HashMap::new()),
            holds: RefCell::new(HashMap::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn fail_next(&self, op: Op, err: SyncError) {
        self.failures.borrow_mut().insert(op, err);
    }

    pub fn hold_next(&self, op: Op) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.holds.borrow_mut().insert(op, rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn mutation_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::ListTodos | Call::ListUsers))
            .collect()
    }

    async fn enter(&self, op: Op, call: Call) -> SyncResult<()> {
        self.calls.borrow_mut().push(call);
        let hold = self.holds.borrow_mut().remove(&op);
        if let Some(rx) = hold {
            let _ = rx.await;
        }
        match self.failures.borrow_mut().remove(&op) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl TodoGateway for FakeGateway {
    async fn list_todos(&self) -> SyncResult<Vec<Todo>> {
        self.enter(Op::ListTodos, Call::ListTodos).await?;
        Ok(self.todos.borrow().clone())
    }

    async fn list_users(&self) -> SyncResult<Vec<User>> {
        self.enter(Op::ListUsers, Call::ListUsers).await?;
        Ok(self.users.clone())
    }

    async fn create(&self, new: &NewTodo) -> SyncResult<Todo> {
        self.enter(Op::Create, Call::Create(new.clone())).await?;
        let id = {
            let mut next = self.next_id.borrow_mut();
            let id = *next;
            *next += 1;
            id
        };
        let created = Todo {
            id: TodoId(id),
            user_id: new.user_id,
            title: new.title.clone(),
            completed: new.completed,
        };
        self.todos.borrow_mut().insert(0, created.clone());
        Ok(created)
    }

    async fn set_completed(&self, id: TodoId, completed: bool) -> SyncResult<Todo> {
        self.enter(Op::SetCompleted, Call::SetCompleted(id, completed)).await?;
        let mut todos = self.todos.borrow_mut();
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(SyncError::Status { status: 404 })?;
        todo.completed = completed;
        Ok(todo.clone())
    }

    async fn delete(&self, id: TodoId) -> SyncResult<()> {
        self.enter(Op::Delete, Call::Delete(id)).await?;
        self.todos.borrow_mut().retain(|t| t.id != id);
        Ok(())
    }
}

/// View that records rows, options and overlay messages
#[derive(Default)]
pub struct RecordingView {
    rows: RefCell<Vec<TodoRow>>,
    options: RefCell<Vec<UserOption>>,
    errors: RefCell<Vec<String>>,
    clears: RefCell<usize>,
}

impl RecordingView {
    pub fn labels(&self) -> Vec<String> {
        self.rows.borrow().iter().map(TodoRow::label).collect()
    }

    pub fn row(&self, id: TodoId) -> Option<TodoRow> {
        self.rows.borrow().iter().find(|r| r.id == id).cloned()
    }

    pub fn options(&self) -> Vec<UserOption> {
        self.options.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    pub fn clears(&self) -> usize {
        *self.clears.borrow()
    }

    fn with_row(&self, id: TodoId, f: impl FnOnce(&mut TodoRow)) -> bool {
        match self.rows.borrow_mut().iter_mut().find(|r| r.id == id) {
            Some(row) => {
                f(row);
                true
            }
            None => false,
        }
    }
}

impl TodoView for RecordingView {
    fn render_todo_item(&self, row: TodoRow, placement: Placement) {
        let mut rows = self.rows.borrow_mut();
        match placement {
            Placement::Head => rows.insert(0, row),
            Placement::Tail => rows.push(row),
        }
    }

    fn render_user_option(&self, option: UserOption) {
        self.options.borrow_mut().push(option);
    }

    fn remove_todo_item(&self, id: TodoId) -> bool {
        let mut rows = self.rows.borrow_mut();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        rows.len() != before
    }

    fn set_item_completed(&self, id: TodoId, completed: bool) -> bool {
        self.with_row(id, |row| row.completed = completed)
    }

    fn set_item_pending(&self, id: TodoId, pending: bool) {
        self.with_row(id, |row| row.pending = pending);
    }

    fn clear_title_input(&self) {
        *self.clears.borrow_mut() += 1;
    }

    fn show_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
