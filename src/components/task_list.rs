//! Task List Component
//!
//! Keyed list of rows. A row is rebuilt only when its own display data
//! changes, so a prepend leaves existing rows in place.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_app_context;
use crate::view_state::view_rows;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <ul class="todo-list">
            <For
                each=move || view_rows(&ctx.view)
                key=|row| (row.id.clone(), row.text_html.clone(), row.completed, row.removing)
                children=move |row| view! { <TaskRow row=row /> }
            />
        </ul>
    }
}
