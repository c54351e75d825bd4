//! Renderer
//!
//! Pure projections from the task list to what the page shows: one row
//! view per task, the remaining-count summary, and the header date.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{Task, TaskId};

/// Display data for one list row
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: TaskId,
    /// Task text with markup characters escaped, safe for `inner_html`
    pub text_html: String,
    pub completed: bool,
    /// Exit transition in progress
    pub removing: bool,
}

impl RowView {
    pub fn new(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            text_html: escape_html(&task.text),
            completed: task.completed,
            removing: false,
        }
    }

    pub fn class(&self) -> String {
        let mut c = String::from("todo-item");
        if self.completed { c.push_str(" completed"); }
        if self.removing { c.push_str(" removing"); }
        c
    }
}

/// One row per task, in list order. Rows listed in `exiting` keep playing
/// their exit transition.
pub fn render_all(tasks: &[Task], exiting: &HashSet<TaskId>) -> Vec<RowView> {
    tasks
        .iter()
        .map(|task| RowView {
            removing: exiting.contains(&task.id),
            ..RowView::new(task)
        })
        .collect()
}

/// `"1 task left"`, otherwise `"{n} tasks left"`
pub fn render_summary(tasks: &[Task]) -> String {
    let count = tasks.iter().filter(|t| !t.completed).count();
    format!("{} {} left", count, if count == 1 { "task" } else { "tasks" })
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Long-form Japanese date, e.g. `2026年10月19日月曜日`
pub fn format_long_date(date: NaiveDate) -> String {
    let weekday = match date.weekday() {
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
        Weekday::Sun => "日",
    };
    format!("{}年{}月{}日{}曜日", date.year(), date.month(), date.day(), weekday)
}
