//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::controller::{Affordance, Controller, Outcome, Payload, Trigger};
use crate::storage::BrowserStorage;
use crate::view_state::{apply_outcome, ViewStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Gesture controller owning the task store (single-threaded arena)
    controller: StoredValue<Controller<BrowserStorage>, LocalStorage>,
    /// Visible rows and summary
    pub view: ViewStore,
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(controller: Controller<BrowserStorage>, view: ViewStore, config: AppConfig) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            view,
            config: StoredValue::new(config),
        }
    }

    /// Run the bound handler and apply its outcome to the view
    pub fn dispatch(&self, trigger: Trigger, affordance: Affordance, payload: Payload) -> Outcome {
        let outcome = self
            .controller
            .try_update_value(|c| c.handle(trigger, affordance, payload))
            .unwrap_or_default();
        apply_outcome(&self.view, &outcome);
        outcome
    }

    pub fn exit_fallback_ms(&self) -> u32 {
        self.config.with_value(|c| c.exit_fallback_ms)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
