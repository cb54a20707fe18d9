//! Client for a books REST API
//!
//! - [`api`] - HTTP client and wire models for `/api/books`
//! - [`validation`] - ordered client-side rules for a book
//! - [`form`] - raw form fields and the Create/Editing mode
//! - [`controller`] - ties the above together, one user action at a time
//! - [`render`] - pure view descriptions of controller state

pub mod api;
pub mod controller;
pub mod error;
pub mod form;
pub mod render;
pub mod validation;

pub use api::{Book, BookDetail, BookId, BookInput, BooksApi, BooksClient, ClientConfig};
pub use controller::BookController;
pub use error::{BookClientError, Result};
pub use form::{BookForm, FormMode};
pub use validation::{validate_book, ValidationError};
