//! List Footer Component
//!
//! Remaining-count summary and the clear-completed action.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller::{Affordance, Payload, Trigger};
use crate::view_state::view_summary;

#[component]
pub fn ListFooter() -> impl IntoView {
    let ctx = use_app_context();

    let clear_completed = move |_| {
        ctx.dispatch(Trigger::Click, Affordance::ClearCompleted, Payload::None);
    };

    view! {
        <footer class="todo-footer">
            <span class="task-count">{move || view_summary(&ctx.view)}</span>
            <button class="clear-completed" on:click=clear_completed>"Clear completed"</button>
        </footer>
    }
}
