//! Task Store
//!
//! Owns the task list for the session and mirrors it to durable storage
//! after every mutation. The in-memory list is the source of truth: a failed
//! write is logged and remembered, never rolled back.

use std::collections::HashSet;

use crate::error::StorageError;
use crate::models::{Task, TaskId};
use crate::storage::StorageBackend;

/// Millisecond clock used to derive task ids
pub type Clock = fn() -> i64;

pub fn system_clock() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub struct TaskStore<B: StorageBackend> {
    backend: B,
    key: String,
    clock: Clock,
    tasks: Vec<Task>,
    last_issued: i64,
    last_error: Option<StorageError>,
}

impl<B: StorageBackend> TaskStore<B> {
    /// Load the list stored under `key`, or start empty
    pub fn load(backend: B, key: impl Into<String>) -> Self {
        Self::load_with_clock(backend, key, system_clock)
    }

    pub fn load_with_clock(backend: B, key: impl Into<String>, clock: Clock) -> Self {
        let key = key.into();
        let tasks = read_tasks(&backend, &key);
        let last_issued = tasks.iter().filter_map(|t| t.id.millis()).max().unwrap_or(0);
        log::info!("Loaded {} tasks from '{}'", tasks.len(), key);
        Self {
            backend,
            key,
            clock,
            tasks,
            last_issued,
            last_error: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Error from the most recent write, cleared by the next successful one
    pub fn last_persist_error(&self) -> Option<&StorageError> {
        self.last_error.as_ref()
    }

    /// Prepend a new open task. Blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let task = Task::new(self.next_id(), text);
        self.tasks.insert(0, task.clone());
        self.persist();
        Some(task)
    }

    /// Flip `completed`; returns the new value, `None` if the id is unknown
    pub fn toggle(&mut self, id: &TaskId) -> Option<bool> {
        let completed = self.tasks.iter_mut().find(|t| &t.id == id).map(|task| {
            task.completed = !task.completed;
            task.completed
        });
        self.persist();
        completed
    }

    /// Remove the task with `id`; returns whether one was removed
    pub fn remove(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        self.persist();
        self.tasks.len() != before
    }

    /// Drop every completed task; returns how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        self.persist();
        before - self.tasks.len()
    }

    /// Write the full list to storage
    pub fn persist(&mut self) {
        let result = serde_json::to_string(&self.tasks)
            .map_err(StorageError::from)
            .and_then(|json| self.backend.write(&self.key, &json));
        match result {
            Ok(()) => self.last_error = None,
            Err(e) => {
                log::warn!("Keeping {} tasks in memory only: {}", self.tasks.len(), e);
                self.last_error = Some(e);
            }
        }
    }

    /// Timestamp id, bumped past anything already issued or stored.
    ///
    /// Stored ids are outside input: when `last_issued` sits at `i64::MAX`
    /// the search wraps back to the clock value instead of overflowing.
    fn next_id(&mut self) -> TaskId {
        let now = (self.clock)();
        let start = self.last_issued.checked_add(1).map_or(now, |next| now.max(next));
        let taken = |candidate: i64| self.tasks.iter().any(|t| t.id.as_str() == candidate.to_string());
        let candidate = (start..=i64::MAX)
            .chain(now.min(start)..start)
            .find(|c| !taken(*c))
            .unwrap_or(now);
        self.last_issued = candidate;
        TaskId::new(candidate.to_string())
    }
}

/// Read and validate the stored array. Anything unreadable is an empty list.
fn read_tasks<B: StorageBackend>(backend: &B, key: &str) -> Vec<Task> {
    let raw = match backend.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("Could not read '{}': {}", key, e);
            return Vec::new();
        }
    };
    let stored: Option<Vec<Task>> = match serde_json::from_str(&raw) {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("Discarding malformed task list under '{}': {}", key, e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    stored
        .unwrap_or_default()
        .into_iter()
        .filter(|task| {
            if task.text.trim().is_empty() {
                log::warn!("Dropping stored task {} with blank text", task.id);
                return false;
            }
            if !seen.insert(task.id.clone()) {
                log::warn!("Dropping stored task with duplicate id {}", task.id);
                return false;
            }
            true
        })
        .collect()
}
