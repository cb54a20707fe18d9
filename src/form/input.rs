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


//! Raw form fields and their extraction into a request body

use crate::api::models::{Book, BookDetail, BookInput};
use crate::error::{BookClientError, Result};
use serde::{Deserialize, Serialize};

/// Text of every field on the book form, exactly as entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: String,
    pub publish_date: String,
    pub description: String,
    pub language: String,
    pub page_count: String,
    pub publisher: String,
    pub cover_image_url: String,
    pub edition: String,
}

impl BookForm {
    /// Form filled with a book's current values, for editing
    pub fn from_book(book: &Book) -> Self {
        let detail = book.detail.clone().unwrap_or_default();

        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            price: book.price.map(|p| p.to_string()).unwrap_or_default(),
            publish_date: book.publish_date.clone().unwrap_or_default(),
            description: detail.description.unwrap_or_default(),
            language: detail.language.unwrap_or_default(),
            page_count: detail.page_count.map(|c| c.to_string()).unwrap_or_default(),
            publisher: detail.publisher.unwrap_or_default(),
            cover_image_url: detail.cover_image_url.unwrap_or_default(),
            edition: detail.edition.unwrap_or_default(),
        }
    }

    /// Blank every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Trimmed request body built from the fields
    ///
    /// Blank optional fields become absent. Numeric fields must hold a whole number
    /// when they are filled in; range checks are left to validation.
    pub fn to_input(&self) -> Result<BookInput> {
        Ok(BookInput {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            isbn: self.isbn.trim().to_string(),
            price: parse_number("price", &self.price)?,
            publish_date: non_blank(&self.publish_date),
            detail: BookDetail {
                description: non_blank(&self.description),
                language: non_blank(&self.language),
                page_count: parse_number("page count", &self.page_count)?,
                publisher: non_blank(&self.publisher),
                cover_image_url: non_blank(&self.cover_image_url),
                edition: non_blank(&self.edition),
            },
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_number(field: &str, value: &str) -> Result<Option<i64>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| BookClientError::invalid_input(format!("The {} must be a whole number.", field)))
}
