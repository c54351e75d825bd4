//! Task Row Component
//!
//! A single task in the list: checkbox, text and delete button.

use leptos::prelude::*;
use exit_transition::{arm_fallback, make_on_animationend, OneShot};

use crate::context::use_app_context;
use crate::controller::{Affordance, Payload, Trigger};
use crate::render::RowView;

/// A single task row
#[component]
pub fn TaskRow(row: RowView) -> impl IntoView {
    let ctx = use_app_context();

    let id = row.id.clone();
    let class = row.class();
    let data_id = id.to_string();
    let checkbox_class = if row.completed { "checkbox checked" } else { "checkbox" };

    let toggle = {
        let id = id.clone();
        move |affordance: Affordance| {
            let id = id.clone();
            move |_: web_sys::MouseEvent| {
                ctx.dispatch(Trigger::Click, affordance, Payload::Task(id.clone()));
            }
        }
    };

    let on_checkbox = toggle(Affordance::Checkbox);
    let on_text = toggle(Affordance::Text);

    let delete = {
        let id = id.clone();
        move |ev: web_sys::MouseEvent| {
            let outcome = ctx.dispatch(Trigger::Click, Affordance::DeleteButton, Payload::Task(id.clone()));
            if outcome.stop_propagation {
                ev.stop_propagation();
            }
        }
    };

    // Exit completion: own animationend or the fallback timer, once
    let once = OneShot::new();
    let finish = {
        let id = id.clone();
        move || {
            ctx.dispatch(Trigger::AnimationEnd, Affordance::Row, Payload::Task(id.clone()));
        }
    };
    if row.removing {
        arm_fallback(once.clone(), ctx.exit_fallback_ms(), finish.clone());
    }
    let on_animationend = {
        let removing = row.removing;
        let handler = make_on_animationend(once, finish);
        move |ev: web_sys::AnimationEvent| {
            if removing {
                handler(ev);
            }
        }
    };

    view! {
        <li class=class data-id=data_id on:animationend=on_animationend>
            <div class=checkbox_class on:click=on_checkbox></div>
            <span class="todo-text" inner_html=row.text_html on:click=on_text></span>
            <button class="delete-btn" title="Delete" on:click=delete>"×"</button>
        </li>
    }
}
