//! Date Header Component

use chrono::Local;
use leptos::prelude::*;

use crate::render::format_long_date;

/// Title and today's date, computed once at mount
#[component]
pub fn DateHeader() -> impl IntoView {
    let today = format_long_date(Local::now().date_naive());

    view! {
        <header class="todo-header">
            <h1>"Tasks"</h1>
            <p class="date-display">{today}</p>
        </header>
    }
}
