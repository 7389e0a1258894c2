//! Reconciliation Controller
//!
//! Runs the load/create/toggle/delete workflows: validate, call the gateway,
//! then apply the confirmed result to the store and the view. Every failure
//! goes through `report`.
//!
//! Operations on the same todo id are serialized through a per-id async lock,
//! so a toggle and a delete issued back to back complete in issue order.
//! Store locks are never held across an await.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::try_join;
use futures::lock::Mutex as AsyncMutex;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{SyncError, SyncResult};
use crate::gateway::TodoGateway;
use crate::models::{NewTodo, Todo, TodoId, UserId};
use crate::store::TodoStore;
use crate::view::{Placement, TodoRow, TodoView, UserOption};

/// Lifecycle position of a todo that exists locally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoPhase {
    Active,
    PendingToggle,
    PendingDelete,
}

/// Progress of the initial load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn row_for(store: &TodoStore, todo: &Todo) -> TodoRow {
    let owner = store.find_user_by_id(todo.user_id);
    if owner.is_none() {
        warn!(todo = %todo.id, user = %todo.user_id, "todo owner not loaded");
    }
    TodoRow::new(todo, owner)
}

pub struct Controller<G, V> {
    gateway: G,
    view: V,
    config: ClientConfig,
    store: Mutex<TodoStore>,
    phases: Mutex<HashMap<TodoId, TodoPhase>>,
    gates: Mutex<HashMap<TodoId, Arc<AsyncMutex<()>>>>,
    load_state: Mutex<LoadState>,
}

impl<G: TodoGateway, V: TodoView> Controller<G, V> {
    pub fn new(gateway: G, view: V, config: ClientConfig) -> Self {
        Self {
            gateway,
            view,
            config,
            store: Mutex::new(TodoStore::new()),
            phases: Mutex::new(HashMap::new()),
            gates: Mutex::new(HashMap::new()),
            load_state: Mutex::new(LoadState::Idle),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn load_state(&self) -> LoadState {
        *lock(&self.load_state)
    }

    /// Copy of the current store contents
    pub fn snapshot(&self) -> TodoStore {
        lock(&self.store).clone()
    }

    pub fn phase(&self, id: TodoId) -> Option<TodoPhase> {
        lock(&self.phases).get(&id).copied()
    }

    /// Fetch todos and users together and render both.
    ///
    /// Either fetch failing fails the whole load: nothing is stored or rendered.
    /// Calling again after success does nothing.
    pub async fn load(&self) -> SyncResult<()> {
        {
            let mut state = lock(&self.load_state);
            if matches!(*state, LoadState::Loading | LoadState::Ready) {
                debug!(state = ?*state, "load already started");
                return Ok(());
            }
            *state = LoadState::Loading;
        }

        let result = self.try_load().await;
        *lock(&self.load_state) = if result.is_ok() {
            LoadState::Ready
        } else {
            LoadState::Failed
        };
        self.finish(result)
    }

    async fn try_load(&self) -> SyncResult<()> {
        let (todos, users) = try_join(self.gateway.list_todos(), self.gateway.list_users()).await?;

        let (rows, options) = {
            let mut store = lock(&self.store);
            store.replace_all(todos, users);
            let rows: Vec<TodoRow> = store.todos().iter().map(|t| row_for(&store, t)).collect();
            let options: Vec<UserOption> = store.users().iter().map(UserOption::from).collect();
            (rows, options)
        };

        {
            let mut phases = lock(&self.phases);
            phases.clear();
            phases.extend(rows.iter().map(|row| (row.id, TodoPhase::Active)));
        }

        info!(todos = rows.len(), users = options.len(), "initial load complete");
        for row in rows {
            self.view.render_todo_item(row, Placement::Tail);
        }
        for option in options {
            self.view.render_user_option(option);
        }
        Ok(())
    }

    /// Create a todo for `user_id`.
    ///
    /// The title is validated before any call is made. The new row goes to the
    /// head of the list and the title input is cleared once it is rendered.
    pub async fn create(&self, user_id: UserId, title: &str) -> SyncResult<TodoId> {
        let result = self.try_create(user_id, title).await;
        self.finish(result)
    }

    async fn try_create(&self, user_id: UserId, title: &str) -> SyncResult<TodoId> {
        let title = title.trim();
        if title.is_empty() {
            return Err(SyncError::EmptyTitle);
        }
        if lock(&self.store).find_user_by_id(user_id).is_none() {
            return Err(SyncError::UnknownUser(user_id));
        }

        let todo = self.gateway.create(&NewTodo::new(user_id, title)).await?;
        let id = todo.id;
        debug!(%id, "todo created");

        let row = {
            let mut store = lock(&self.store);
            let row = row_for(&store, &todo);
            store.insert(todo);
            row
        };
        lock(&self.phases).insert(id, TodoPhase::Active);

        // an id the server handed out twice replaces the older row
        self.view.remove_todo_item(id);
        self.view.render_todo_item(row, Placement::Head);
        self.view.clear_title_input();
        Ok(id)
    }

    /// Ask the server to set `completed`, then apply what it confirmed.
    ///
    /// On failure the store keeps its value and the row's toggle is put back.
    pub async fn toggle(&self, id: TodoId, completed: bool) -> SyncResult<bool> {
        let gate = self.gate(id);
        let result = {
            let _serial = gate.lock().await;
            self.try_toggle(id, completed).await
        };
        self.release_gate(id, gate, false);
        self.finish(result)
    }

    async fn try_toggle(&self, id: TodoId, completed: bool) -> SyncResult<bool> {
        let previous = lock(&self.store)
            .find_todo_by_id(id)
            .map(|t| t.completed)
            .ok_or(SyncError::UnknownTodo(id))?;

        // the row keeps the user's click until the server answers
        self.view.set_item_completed(id, completed);
        self.enter(id, TodoPhase::PendingToggle);
        let outcome = self.gateway.set_completed(id, completed).await;
        self.enter(id, TodoPhase::Active);

        match outcome {
            Ok(confirmed) => {
                lock(&self.store).set_completed(id, confirmed.completed);
                self.view.set_item_completed(id, confirmed.completed);
                Ok(confirmed.completed)
            }
            Err(err) => {
                self.view.set_item_completed(id, previous);
                Err(err)
            }
        }
    }

    /// Delete a todo; store and view only change once the server confirms
    pub async fn delete(&self, id: TodoId) -> SyncResult<()> {
        let gate = self.gate(id);
        let result = {
            let _serial = gate.lock().await;
            self.try_delete(id).await
        };
        self.release_gate(id, gate, result.is_ok());
        self.finish(result)
    }

    async fn try_delete(&self, id: TodoId) -> SyncResult<()> {
        if !lock(&self.store).contains(id) {
            return Err(SyncError::UnknownTodo(id));
        }

        self.enter(id, TodoPhase::PendingDelete);
        match self.gateway.delete(id).await {
            Ok(()) => {
                lock(&self.store).remove_by_id(id);
                lock(&self.phases).remove(&id);
                self.view.remove_todo_item(id);
                Ok(())
            }
            Err(err) => {
                self.enter(id, TodoPhase::Active);
                Err(err)
            }
        }
    }

    fn gate(&self, id: TodoId) -> Arc<AsyncMutex<()>> {
        lock(&self.gates).entry(id).or_default().clone()
    }

    /// Drop the gate for `id` once the todo is gone or nobody else holds it
    fn release_gate(&self, id: TodoId, gate: Arc<AsyncMutex<()>>, gone: bool) {
        let mut gates = lock(&self.gates);
        let current = gates.get(&id).is_some_and(|g| Arc::ptr_eq(g, &gate));
        // one reference in the map, one here
        if current && (gone || Arc::strong_count(&gate) == 2) {
            gates.remove(&id);
        }
    }

    #[cfg(test)]
    fn gate_count(&self) -> usize {
        lock(&self.gates).len()
    }

    fn enter(&self, id: TodoId, phase: TodoPhase) {
        lock(&self.phases).insert(id, phase);
        self.view.set_item_pending(id, phase != TodoPhase::Active);
    }

    fn finish<T>(&self, result: SyncResult<T>) -> SyncResult<T> {
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    /// The single error path: overlay plus a log line
    fn report(&self, err: &SyncError) {
        if err.is_reported() {
            warn!(error = %err, "sync operation failed");
            self.view.show_error(&err.user_message(&self.config));
        } else {
            debug!(error = %err, "sync operation skipped");
        }
    }
}
