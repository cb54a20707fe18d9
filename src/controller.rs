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


//! Book form controller
//!
//! Owns the form-mode state, the form fields, the last loaded list, the open detail
//! view and the notice slot. Front ends forward user events to it and draw
//! [`BookController::view`].
//!
//! # Flows
//! - submit: extract → validate → create or update → reset form → reload list
//! - row edit: fetch one → fill form → `Editing(id)`
//! - row detail: fetch one → open detail view
//! - row delete: confirm → delete → reload list
//!
//! Every operation is a single attempt. Failures are logged, put in the notice slot and
//! returned; the controller stays usable afterwards.

use crate::api::{Book, BookId, BookInput, BooksApi};
use crate::error::{BookClientError, Result};
use crate::form::{BookForm, FormMode};
use crate::render::{render_detail, render_form, render_table, Notice, PageView, TableStatus};
use crate::validation::validate_book;
use tracing::{error, info};

pub const LOAD_FAILED: &str = "Failed to load the book list.";
pub const FETCH_FAILED: &str = "Failed to load book information.";
pub const CREATE_SUCCEEDED: &str = "Book added successfully.";
pub const CREATE_FAILED: &str = "Failed to add the book.";
pub const UPDATE_SUCCEEDED: &str = "Book updated successfully.";
pub const UPDATE_FAILED: &str = "Failed to update the book.";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this book?";
pub const DELETE_SUCCEEDED: &str = "Book deleted successfully.";
pub const DELETE_FAILED: &str = "Failed to delete the book.";

#[derive(Debug)]
pub struct BookController<A> {
    api: A,
    mode: FormMode,
    form: BookForm,
    books: Vec<Book>,
    table: TableStatus,
    detail: Option<Book>,
    notice: Option<Notice>,
    busy: bool,
}

impl<A: BooksApi> BookController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            mode: FormMode::default(),
            form: BookForm::default(),
            books: Vec::new(),
            table: TableStatus::default(),
            detail: None,
            notice: None,
            busy: false,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    /// Field access for input events; any edit dismisses the notice
    pub fn form_mut(&mut self) -> &mut BookForm {
        self.clear_notice();
        &mut self.form
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn table_status(&self) -> TableStatus {
        self.table
    }

    pub fn detail(&self) -> Option<&Book> {
        self.detail.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Current state as a view description
    pub fn view(&self) -> PageView {
        PageView {
            table: render_table(&self.books, self.table),
            form: render_form(&self.mode, self.busy),
            detail: self.detail.as_ref().map(render_detail),
            notice: self.notice.clone(),
        }
    }

    /// Fetch the list and replace the table
    pub async fn load_books(&mut self) -> Result<()> {
        self.table = TableStatus::Loading;
        self.books.clear();

        let result = self.api.list_books().await;
        match result {
            Ok(books) => {
                self.books = books;
                self.table = TableStatus::Loaded;
                Ok(())
            }
            Err(e) => {
                self.table = TableStatus::Failed;
                Err(self.fail(LOAD_FAILED, e))
            }
        }
    }

    /// Validate the form and create or update depending on the mode
    pub async fn submit(&mut self) -> Result<()> {
        let input = match self.form.to_input() {
            Ok(input) => input,
            Err(e) => return Err(self.reject(e)),
        };

        if let Err(rule) = validate_book(&input) {
            return Err(self.reject(rule.into()));
        }

        match self.mode.editing_id().cloned() {
            Some(id) => self.update(&id, &input).await,
            None => self.create(&input).await,
        }
    }

    async fn create(&mut self, input: &BookInput) -> Result<()> {
        self.busy = true;
        let result = self.api.create_book(input).await;
        self.busy = false;

        match result {
            Ok(created) => {
                info!(id = %created.id, title = %created.title, "book created");
                self.reset_form();
                self.notice = Some(Notice::success(CREATE_SUCCEEDED));
                self.refresh().await;
                Ok(())
            }
            Err(e) => Err(self.fail(CREATE_FAILED, e)),
        }
    }

    async fn update(&mut self, id: &BookId, input: &BookInput) -> Result<()> {
        self.busy = true;
        let result = self.api.update_book(id, input).await;
        self.busy = false;

        match result {
            Ok(updated) => {
                info!(id = %updated.id, title = %updated.title, "book updated");
                self.reset_form();
                self.notice = Some(Notice::success(UPDATE_SUCCEEDED));
                self.refresh().await;
                Ok(())
            }
            Err(e) => Err(self.fail(UPDATE_FAILED, e)),
        }
    }

    /// Load a book into the form and switch to editing it
    ///
    /// On failure the mode and fields are left as they were.
    pub async fn begin_edit(&mut self, id: &BookId) -> Result<()> {
        self.busy = true;
        let result = self.api.get_book(id).await;
        self.busy = false;

        match result {
            Ok(book) => {
                self.form = BookForm::from_book(&book);
                self.mode.begin_edit(id.clone());
                Ok(())
            }
            Err(e) => Err(self.fail(FETCH_FAILED, e)),
        }
    }

    /// Leave editing mode without touching the server
    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    /// Fetch a book and open the detail view
    pub async fn show_detail(&mut self, id: &BookId) -> Result<()> {
        self.busy = true;
        let result = self.api.get_book(id).await;
        self.busy = false;

        match result {
            Ok(book) => {
                self.detail = Some(book);
                Ok(())
            }
            Err(e) => Err(self.fail(FETCH_FAILED, e)),
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Delete a book once `confirm` agrees; a refusal sends nothing
    ///
    /// Returns whether the delete request was sent and succeeded.
    pub async fn delete<F>(&mut self, id: &BookId, confirm: F) -> Result<bool>
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(DELETE_CONFIRM) {
            return Ok(false);
        }

        let result = self.api.delete_book(id).await;
        match result {
            Ok(()) => {
                info!(%id, "book deleted");
                self.notice = Some(Notice::success(DELETE_SUCCEEDED));
                self.refresh().await;
                Ok(true)
            }
            Err(e) => Err(self.fail(DELETE_FAILED, e)),
        }
    }

    /// Reload after a mutation; a failed reload has already set its own notice
    async fn refresh(&mut self) {
        let _ = self.load_books().await;
    }

    fn reset_form(&mut self) {
        self.form.clear();
        self.mode.reset();
        self.notice = None;
    }

    /// Local rejection: the error text itself is the notice
    fn reject(&mut self, e: BookClientError) -> BookClientError {
        self.notice = Some(Notice::error(e.user_message()));
        e
    }

    /// Remote failure: log it and show the operation's generic message
    fn fail(&mut self, message: &'static str, e: BookClientError) -> BookClientError {
        error!(error = %e, status = ?e.status_code(), "{}", message);
        self.notice = Some(Notice::error(message));
        e
    }
}
