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


//! Books collection endpoints
//!
//! | Method | Path | Body | Response |
//! |---|---|---|---|
//! | GET | `/api/books` | - | JSON array of Book |
//! | GET | `/api/books/{id}` | - | JSON Book |
//! | POST | `/api/books` | JSON Book (no id) | JSON created Book |
//! | PUT | `/api/books/{id}` | JSON Book | JSON updated Book |
//! | DELETE | `/api/books/{id}` | - | empty/ack |

use crate::api::client::BooksClient;
use crate::api::models::{Book, BookId, BookInput};
use crate::error::Result;

/// Collection endpoint
pub const BOOKS_ENDPOINT: &str = "/api/books";

/// Path of a single book, with the id percent-encoded
pub fn book_endpoint(id: &BookId) -> String {
    format!("{}/{}", BOOKS_ENDPOINT, urlencoding::encode(id.as_str()))
}

/// Operations the controller needs from the books API
///
/// [`BooksClient`] implements this over HTTP.
#[allow(async_fn_in_trait)]
pub trait BooksApi {
    /// `GET /api/books`
    async fn list_books(&self) -> Result<Vec<Book>>;

    /// `GET /api/books/{id}`
    async fn get_book(&self, id: &BookId) -> Result<Book>;

    /// `POST /api/books`
    async fn create_book(&self, book: &BookInput) -> Result<Book>;

    /// `PUT /api/books/{id}`
    async fn update_book(&self, id: &BookId, book: &BookInput) -> Result<Book>;

    /// `DELETE /api/books/{id}`
    async fn delete_book(&self, id: &BookId) -> Result<()>;
}

impl BooksApi for BooksClient {
    async fn list_books(&self) -> Result<Vec<Book>> {
        self.get(BOOKS_ENDPOINT).await
    }

    async fn get_book(&self, id: &BookId) -> Result<Book> {
        self.get(&book_endpoint(id)).await
    }

    async fn create_book(&self, book: &BookInput) -> Result<Book> {
        self.post(BOOKS_ENDPOINT, book).await
    }

    async fn update_book(&self, id: &BookId, book: &BookInput) -> Result<Book> {
        self.put(&book_endpoint(id), book).await
    }

    async fn delete_book(&self, id: &BookId) -> Result<()> {
        self.delete(&book_endpoint(id)).await
    }
}
