//! Tasklist Frontend App
//!
//! Root component: loads the stored list once and wires the page together.

use leptos::prelude::*;

use crate::components::{DateHeader, ListFooter, NewTaskForm, TaskList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::Controller;
use crate::storage::BrowserStorage;
use crate::store::TaskStore;
use crate::view_state::new_view_store;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = TaskStore::load(BrowserStorage, config.storage_key.clone());
    let controller = Controller::new(store);
    let view = new_view_store(controller.rows(), controller.summary());

    // Provide context to all children
    provide_context(AppContext::new(controller, view, config));

    view! {
        <main class="todo-app">
            <DateHeader />
            <NewTaskForm />
            <TaskList />
            <ListFooter />
        </main>
    }
}
