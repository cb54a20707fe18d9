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


//! Book list table

use crate::api::models::{Book, BookId};
use crate::render::{format_price, or_dash};
use serde::Serialize;
use std::fmt;

/// Shown in place of the rows when the list could not be loaded
pub const TABLE_ERROR_TEXT: &str = "Error: unable to load data.";

const HEADERS: [&str; 7] = ["Title", "Author", "ISBN", "Price", "Published", "Publisher", "Actions"];

/// State of the last list load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TableStatus {
    /// Nothing requested yet
    #[default]
    Empty,
    /// A list request is in flight
    Loading,
    Loaded,
    Failed,
}

/// Per-row action, keyed by the row's book id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowAction {
    Edit,
    Delete,
    Detail,
}

impl RowAction {
    pub const ALL: [RowAction; 3] = [RowAction::Edit, RowAction::Delete, RowAction::Detail];

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
            RowAction::Detail => "detail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRow {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: String,
    pub publish_date: String,
    pub publisher: String,
    pub actions: Vec<RowAction>,
}

impl BookRow {
    fn cells(&self) -> [String; 7] {
        let actions = self
            .actions
            .iter()
            .map(|a| format!("{} {}", a.label(), self.id))
            .collect::<Vec<_>>()
            .join(" | ");

        [
            self.title.clone(),
            self.author.clone(),
            self.isbn.clone(),
            self.price.clone(),
            self.publish_date.clone(),
            self.publisher.clone(),
            actions,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TableView {
    /// No list requested; draws nothing
    Idle,
    Loading,
    Failed { message: String },
    Rows(Vec<BookRow>),
}

/// One row per book in server order
pub fn render_table(books: &[Book], status: TableStatus) -> TableView {
    match status {
        TableStatus::Loading => TableView::Loading,
        TableStatus::Failed => TableView::Failed {
            message: TABLE_ERROR_TEXT.to_string(),
        },
        TableStatus::Empty => TableView::Idle,
        TableStatus::Loaded => {
            TableView::Rows(books.iter().map(render_row).collect())
        }
    }
}

pub fn render_row(book: &Book) -> BookRow {
    let publisher = book
        .detail
        .as_ref()
        .and_then(|d| d.publisher.as_deref());

    BookRow {
        id: book.id.clone(),
        title: book.title.clone(),
        author: book.author.clone(),
        isbn: book.isbn.clone(),
        price: format_price(book.price),
        publish_date: or_dash(book.publish_date.as_deref()),
        publisher: or_dash(publisher),
        actions: RowAction::ALL.to_vec(),
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = match self {
            TableView::Idle => return Ok(()),
            TableView::Loading => return writeln!(f, "Loading..."),
            TableView::Failed { message } => return writeln!(f, "{}", message),
            TableView::Rows(rows) if rows.is_empty() => return writeln!(f, "No books."),
            TableView::Rows(rows) => rows.iter().map(BookRow::cells).collect::<Vec<_>>(),
        };

        let mut widths = HEADERS.map(|h| h.chars().count());
        for cells in &rows {
            for (width, cell) in widths.iter_mut().zip(cells.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header = HEADERS.map(str::to_string);
        write_line(f, &header, &widths)?;
        let rule = widths.map(|w| "-".repeat(w));
        write_line(f, &rule, &widths)?;
        for cells in &rows {
            write_line(f, cells, &widths)?;
        }
        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String; 7], widths: &[usize; 7]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(f, "{}", line.trim_end())
}
