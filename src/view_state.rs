//! View State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity over what the
//! page currently shows. Only [`apply_outcome`] writes to it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::{Outcome, RowPatch};
use crate::render::RowView;

/// Visible list and footer text
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Rows in display order
    pub rows: Vec<RowView>,
    /// Remaining-count summary
    pub summary: String,
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

pub fn new_view_store(rows: Vec<RowView>, summary: String) -> ViewStore {
    Store::new(ViewState { rows, summary })
}

/// Current rows, tracked
pub fn view_rows(store: &ViewStore) -> Vec<RowView> {
    store.rows().get()
}

/// Current summary, tracked
pub fn view_summary(store: &ViewStore) -> String {
    store.summary().get()
}

/// Apply a controller outcome to the visible state
pub fn apply_outcome(store: &ViewStore, outcome: &Outcome) {
    match &outcome.rows {
        RowPatch::Keep => {}
        RowPatch::Prepend(row) => store.rows().write().insert(0, row.clone()),
        RowPatch::ReplaceAll(rows) => *store.rows().write() = rows.clone(),
        RowPatch::MarkRemoving(id) => {
            if let Some(row) = store.rows().write().iter_mut().find(|row| &row.id == id) {
                row.removing = true;
            }
        }
        RowPatch::Drop(id) => store.rows().write().retain(|row| &row.id != id),
    }
    if let Some(summary) = &outcome.summary {
        *store.summary().write() = summary.clone();
    }
}
