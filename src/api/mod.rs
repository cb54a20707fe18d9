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


//! Books API client implementation
//!
//! Talks to a books REST API rooted at a configurable base URL. The API itself is an
//! external collaborator: only HTTP verbs and JSON payloads are assumed.

pub mod books;
pub mod client;
pub mod models;

// Re-export commonly used types
pub use books::{book_endpoint, BooksApi, BOOKS_ENDPOINT};
pub use client::{BooksClient, ClientConfig};
pub use models::{Book, BookDetail, BookId, BookInput};
