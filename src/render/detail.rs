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


//! Single book detail view

use crate::api::models::Book;
use crate::render::{format_price, or_dash};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailItem {
    pub label: &'static str,
    pub value: String,
}

impl DetailItem {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub items: Vec<DetailItem>,
    /// Only set when the book has extended detail with a cover
    pub cover_image_url: Option<String>,
}

impl DetailView {
    /// Value shown for a label, if that item is present
    pub fn value(&self, label: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.label == label)
            .map(|item| item.value.as_str())
    }
}

pub fn render_detail(book: &Book) -> DetailView {
    let mut items = vec![
        DetailItem::new("Title", book.title.clone()),
        DetailItem::new("Author", book.author.clone()),
        DetailItem::new("ISBN", book.isbn.clone()),
        DetailItem::new("Price", format_price(book.price)),
        DetailItem::new("Publish date", or_dash(book.publish_date.as_deref())),
    ];

    let mut cover_image_url = None;
    if let Some(detail) = &book.detail {
        // Zero page count shows as a dash, same as price
        let page_count = detail
            .page_count
            .filter(|&count| count != 0)
            .map(|count| count.to_string());

        items.extend([
            DetailItem::new("Description", or_dash(detail.description.as_deref())),
            DetailItem::new("Language", or_dash(detail.language.as_deref())),
            DetailItem::new("Page count", or_dash(page_count.as_deref())),
            DetailItem::new("Publisher", or_dash(detail.publisher.as_deref())),
            DetailItem::new("Edition", or_dash(detail.edition.as_deref())),
        ]);
        cover_image_url = detail.cover_image().map(str::to_string);
    }

    DetailView {
        items,
        cover_image_url,
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .items
            .iter()
            .map(|item| item.label.len())
            .max()
            .unwrap_or(0)
            .max("Cover image".len());

        for item in &self.items {
            writeln!(f, "{:<width$}  {}", item.label, item.value, width = width)?;
        }
        if let Some(url) = &self.cover_image_url {
            writeln!(f, "{:<width$}  {}", "Cover image", url, width = width)?;
        }
        Ok(())
    }
}
