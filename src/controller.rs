//! Gesture Controller
//!
//! Maps user gestures to store mutations through an explicit binding table,
//! and describes the resulting view change as an [`Outcome`]. Components
//! look up `(trigger, affordance)` here instead of owning any logic, so
//! every handler can be driven directly from tests.

use std::collections::{HashMap, HashSet};

use crate::models::TaskId;
use crate::render::{render_all, render_summary, RowView};
use crate::storage::StorageBackend;
use crate::store::TaskStore;

/// DOM event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Submit,
    Click,
    AnimationEnd,
}

/// Element the event landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affordance {
    Form,
    Checkbox,
    Text,
    DeleteButton,
    /// The row itself, source of its exit `animationend`
    Row,
    ClearCompleted,
}

/// Event data passed to a handler
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    None,
    Text(String),
    Task(TaskId),
}

/// How the visible list changes
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RowPatch {
    #[default]
    Keep,
    /// Insert a single row at the top, leaving the others untouched
    Prepend(RowView),
    ReplaceAll(Vec<RowView>),
    /// Start the exit transition on one row
    MarkRemoving(TaskId),
    /// Take one row out of the list
    Drop(TaskId),
}

/// View update produced by a handler
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outcome {
    pub rows: RowPatch,
    /// New summary text, `None` to leave it
    pub summary: Option<String>,
    pub clear_input: bool,
    pub stop_propagation: bool,
}

pub type Handler<B> = fn(&mut Controller<B>, Payload) -> Outcome;

pub struct Controller<B: StorageBackend> {
    store: TaskStore<B>,
    /// Rows whose exit transition started but whose data is still stored
    exiting: HashSet<TaskId>,
    bindings: HashMap<(Trigger, Affordance), Handler<B>>,
}

impl<B: StorageBackend> Controller<B> {
    pub fn new(store: TaskStore<B>) -> Self {
        let mut bindings: HashMap<(Trigger, Affordance), Handler<B>> = HashMap::new();
        bindings.insert((Trigger::Submit, Affordance::Form), Self::submit);
        bindings.insert((Trigger::Click, Affordance::Checkbox), Self::toggle);
        bindings.insert((Trigger::Click, Affordance::Text), Self::toggle);
        bindings.insert((Trigger::Click, Affordance::DeleteButton), Self::begin_delete);
        bindings.insert((Trigger::AnimationEnd, Affordance::Row), Self::finish_delete);
        bindings.insert((Trigger::Click, Affordance::ClearCompleted), Self::clear_completed);
        Self {
            store,
            exiting: HashSet::new(),
            bindings,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &TaskStore<B> {
        &self.store
    }

    #[cfg(test)]
    pub fn is_bound(&self, trigger: Trigger, affordance: Affordance) -> bool {
        self.bindings.contains_key(&(trigger, affordance))
    }

    /// Rows for the current list
    pub fn rows(&self) -> Vec<RowView> {
        render_all(self.store.tasks(), &self.exiting)
    }

    pub fn summary(&self) -> String {
        render_summary(self.store.tasks())
    }

    /// Run the handler bound to `(trigger, affordance)`
    pub fn handle(&mut self, trigger: Trigger, affordance: Affordance, payload: Payload) -> Outcome {
        let Some(handler) = self.bindings.get(&(trigger, affordance)).copied() else {
            log::debug!("No handler for {:?} on {:?}", trigger, affordance);
            return Outcome::default();
        };
        let outcome = handler(self, payload);
        if let Some(err) = self.store.last_persist_error() {
            log::debug!("{:?} on {:?} applied in memory only: {}", trigger, affordance, err);
        }
        outcome
    }

    fn submit(&mut self, payload: Payload) -> Outcome {
        let Payload::Text(text) = payload else {
            return Outcome::default();
        };
        match self.store.add(&text) {
            Some(task) => {
                log::debug!("Added task {}", task.id);
                Outcome {
                    rows: RowPatch::Prepend(RowView::new(&task)),
                    summary: Some(self.summary()),
                    clear_input: true,
                    stop_propagation: false,
                }
            }
            None => Outcome::default(),
        }
    }

    fn toggle(&mut self, payload: Payload) -> Outcome {
        let Payload::Task(id) = payload else {
            return Outcome::default();
        };
        self.store.toggle(&id);
        self.full_render()
    }

    fn begin_delete(&mut self, payload: Payload) -> Outcome {
        let mut outcome = Outcome {
            stop_propagation: true,
            ..Outcome::default()
        };
        let Payload::Task(id) = payload else {
            return outcome;
        };
        if self.store.get(&id).is_some() && self.exiting.insert(id.clone()) {
            log::debug!("Exit transition started for {}", id);
            outcome.rows = RowPatch::MarkRemoving(id);
        }
        outcome
    }

    fn finish_delete(&mut self, payload: Payload) -> Outcome {
        let Payload::Task(id) = payload else {
            return Outcome::default();
        };
        if !self.exiting.remove(&id) {
            return Outcome::default();
        }
        self.store.remove(&id);
        Outcome {
            rows: RowPatch::Drop(id),
            summary: Some(self.summary()),
            ..Outcome::default()
        }
    }

    fn clear_completed(&mut self, _payload: Payload) -> Outcome {
        let removed = self.store.clear_completed();
        log::debug!("Cleared {} completed tasks", removed);
        self.exiting.retain(|id| self.store.get(id).is_some());
        self.full_render()
    }

    fn full_render(&self) -> Outcome {
        Outcome {
            rows: RowPatch::ReplaceAll(self.rows()),
            summary: Some(self.summary()),
            ..Outcome::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::storage::MemoryStorage;

    fn controller(storage: &MemoryStorage) -> Controller<&MemoryStorage> {
        Controller::new(TaskStore::load_with_clock(storage, "todos", || 1_000))
    }

    fn submit(c: &mut Controller<&MemoryStorage>, text: &str) -> Outcome {
        c.handle(Trigger::Submit, Affordance::Form, Payload::Text(text.to_string()))
    }

    fn id_at(c: &Controller<&MemoryStorage>, index: usize) -> TaskId {
        c.store().tasks()[index].id.clone()
    }

    #[test]
    fn test_binding_table() {
        let storage = MemoryStorage::new();
        let c = controller(&storage);
        assert!(c.is_bound(Trigger::Click, Affordance::Checkbox));
        assert!(c.is_bound(Trigger::Click, Affordance::Text));
        assert!(c.is_bound(Trigger::AnimationEnd, Affordance::Row));
        assert!(!c.is_bound(Trigger::Click, Affordance::Row));
    }

    #[test]
    fn test_unbound_gesture_is_noop() {
        let storage = MemoryStorage::new();
        let mut c = controller(&storage);
        submit(&mut c, "A");
        let outcome = c.handle(Trigger::Click, Affordance::Row, Payload::Task(id_at(&c, 0)));
        assert_eq!(outcome, Outcome::default());
        assert!(!c.store().tasks()[0].completed);
    }

    #[test]
    fn test_submit_prepends_single_row() {
        let storage = MemoryStorage::new();
        let mut c = controller(&storage);
        submit(&mut c, "A");

        let outcome = submit(&mut c, "  B ");
        let RowPatch::Prepend(row) = &outcome.rows else {
            panic!("expected prepend, got {:?}", outcome.rows);
        };
        assert_eq!(row.text_html, "B");
        assert_eq!(outcome.summary.as_deref(), Some("2 tasks left"));
        assert!(outcome.clear_input);
    }

    #[test]
    fn test_submit_survives_write_failure() {
        let storage = MemoryStorage::new();
        let mut c = controller(&storage);
        storage.fail_writes(Some(StorageError::QuotaExceeded("full".to_string())));

        let outcome = submit(&mut c, "A");
        assert!(matches!(outcome.rows, RowPatch::Prepend(ref row) if row.text_html == "A"));
        assert_eq!(outcome.summary.as_deref(), Some("1 task left"));
        assert!(outcome.clear_input);
        assert!(matches!(c.store().last_persist_error(), Some(StorageError::QuotaExceeded(_))));
        assert_eq!(storage.raw("todos"), None);

        storage.fail_writes(None);
        c.handle(Trigger::Click, Affordance::Checkbox, Payload::Task(id_at(&c, 0)));
        assert!(c.store().last_persist_error().is_none());
        assert!(storage.raw("todos").is_some());
    }

    #[test]
    fn test_blank_submit_is_silent() {
        let storage = MemoryStorage::new();
        let mut c = controller(&storage);
        assert_eq!(submit(&mut c, "   "), Outcome::default());
        assert!(c.store().tasks().is_empty());
    }

    #[test]
    fn test_toggle_from_text_rerenders() {
        let storage = MemoryStorage::new();
        let mut c = controller(&storage);
        submit(&mut c, "A");
        submit(&mut c, "B");

        let outcome = c.handle(Trigger::Click, Affordance::Text, Payload::Task(id_at(&c, 0)));
        let RowPatch::ReplaceAll(rows) = &outcome.rows else {
            panic!("expected full render, got {:?}", outcome.rows);
        };
        assert!(rows[0].completed);
        assert!(!rows[1].completed);
        assert_eq!(outcome.summary.as_deref(), Some("1 task left"));
    }

    #[test]
    fn test_delete_waits_for_transition() {
        let storage = MemoryStorage::new();
        let mut c = controller(&storage);
        submit(&mut c, "A");
        let id = id_at(&c, 0);

        let started = c.handle(Trigger::Click, Affordance::DeleteButton, Payload::Task(id.clone()));
        assert!(started.stop_propagation);
        assert_eq!(started.rows, RowPatch::MarkRemoving(id.clone()));
        assert_eq!(started.summary, None);
        assert_eq!(c.store().tasks().len(), 1);

        let done = c.handle(Trigger::AnimationEnd, Affordance::Row, Payload::Task(id.clone()));
        assert_eq!(done.rows, RowPatch::Drop(id.clone()));
        assert_eq!(done.summary.as_deref(), Some("0 tasks left"));
        assert!(c.store().tasks().is_empty());

        let again = c.handle(Trigger::AnimationEnd, Affordance::Row, Payload::Task(id));
        assert_eq!(again, Outcome::default());
    }

    #[test]
    fn test_stray_animation_end_is_ignored() {
        let storage = MemoryStorage::new();
        let mut c = controller(&storage);
        submit(&mut c, "A");

        let outcome = c.handle(Trigger::AnimationEnd, Affordance::Row, Payload::Task(id_at(&c, 0)));
        assert_eq!(outcome, Outcome::default());
        assert_eq!(c.store().tasks().len(), 1);
    }

    #[test]
    fn test_rerender_keeps_exiting_row() {
        let storage = MemoryStorage::new();
        let mut c = controller(&storage);
        submit(&mut c, "A");
        submit(&mut c, "B");
        let deleting = id_at(&c, 1);
        c.handle(Trigger::Click, Affordance::DeleteButton, Payload::Task(deleting.clone()));

        let outcome = c.handle(Trigger::Click, Affordance::Checkbox, Payload::Task(id_at(&c, 0)));
        let RowPatch::ReplaceAll(rows) = outcome.rows else {
            panic!("expected full render");
        };
        assert!(rows.iter().any(|r| r.id == deleting && r.removing));
    }

    #[test]
    fn test_scenario() {
        let storage = MemoryStorage::new();
        let mut c = controller(&storage);
        submit(&mut c, "A");
        submit(&mut c, "B");
        let texts = |c: &Controller<&MemoryStorage>| {
            c.store().tasks().iter().map(|t| t.text.clone()).collect::<Vec<_>>()
        };
        assert_eq!(texts(&c), vec!["B", "A"]);

        let toggled = c.handle(Trigger::Click, Affordance::Checkbox, Payload::Task(id_at(&c, 0)));
        assert_eq!(toggled.summary.as_deref(), Some("1 task left"));

        let cleared = c.handle(Trigger::Click, Affordance::ClearCompleted, Payload::None);
        assert_eq!(texts(&c), vec!["A"]);
        let RowPatch::ReplaceAll(rows) = cleared.rows else {
            panic!("expected full render");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(cleared.summary.as_deref(), Some("1 task left"));
    }
}
