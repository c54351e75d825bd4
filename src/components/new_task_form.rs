//! New Task Form Component
//!
//! Text entry for adding a task to the top of the list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller::{Affordance, Payload, Trigger};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        let outcome = ctx.dispatch(Trigger::Submit, Affordance::Form, Payload::Text(text));
        if outcome.clear_input {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="todo-form" on:submit=create_task>
            <input
                type="text"
                class="todo-input"
                placeholder="What needs to be done?"
                autocomplete="off"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
