// Book Client - Catalog form controller for the books REST API
// Copyright (C) 2025 Book Client contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! View descriptions
//!
//! Pure functions from controller state and API data to plain values. Nothing here
//! performs I/O; front ends decide how to draw the result. Every view implements
//! `Display` for terminal output.
//!
//! # Formatting
//! - Prices: `₩` with thousands separators, `-` when absent or zero
//! - Missing text: `-`

pub mod detail;
pub mod table;

pub use detail::{render_detail, DetailItem, DetailView};
pub use table::{render_row, render_table, BookRow, RowAction, TableStatus, TableView};

use crate::api::models::BookId;
use crate::form::FormMode;
use serde::Serialize;
use std::fmt;

/// Severity of the single message slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// User-visible message, at most one at a time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success<S: Into<String>>(message: S) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            NoticeLevel::Success => write!(f, "{}", self.message),
            NoticeLevel::Error => write!(f, "error: {}", self.message),
        }
    }
}

/// Form chrome that depends on the mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub cancel_visible: bool,
    pub editing: Option<BookId>,
}

pub fn render_form(mode: &FormMode, busy: bool) -> FormView {
    FormView {
        submit_label: mode.submit_label(busy),
        submit_enabled: !busy,
        cancel_visible: mode.is_editing(),
        editing: mode.editing_id().cloned(),
    }
}

/// Everything a front end needs to draw the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub table: TableView,
    pub form: FormView,
    pub detail: Option<DetailView>,
    pub notice: Option<Notice>,
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(notice) = &self.notice {
            writeln!(f, "{}", notice)?;
        }
        write!(f, "{}", self.table)?;
        if let Some(detail) = &self.detail {
            if self.table != TableView::Idle {
                writeln!(f)?;
            }
            write!(f, "{}", detail)?;
        }
        Ok(())
    }
}

/// `₩1,234` style price; absent and zero both show as `-`
pub fn format_price(price: Option<i64>) -> String {
    match price {
        Some(p) if p != 0 => format!("₩{}", group_thousands(p)),
        _ => "-".to_string(),
    }
}

pub(crate) fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
