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


//! Create/Editing form mode
//!
//! ```text
//!            edit X loaded
//!   Create ─────────────────▶ Editing(X)
//!     ▲  │                        │
//!     │  └─ submit (create) ─┐    │ update succeeded / cancel
//!     └──────────────────────┴────┘
//! ```

use crate::api::models::BookId;
use serde::{Deserialize, Serialize};

/// Which request a submit turns into
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMode {
    /// Submitting creates a new book
    #[default]
    Create,
    /// Submitting replaces the book with this id
    Editing(BookId),
}

impl FormMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Editing(_))
    }

    /// Id of the book being edited, if any
    pub fn editing_id(&self) -> Option<&BookId> {
        match self {
            FormMode::Editing(id) => Some(id),
            FormMode::Create => None,
        }
    }

    /// Enter editing mode for a book whose values are now in the form
    pub fn begin_edit(&mut self, id: BookId) {
        *self = FormMode::Editing(id);
    }

    /// Back to create mode, after a successful update or a cancel
    pub fn reset(&mut self) {
        *self = FormMode::Create;
    }

    /// Submit button label
    pub fn submit_label(&self, busy: bool) -> &'static str {
        match (self, busy) {
            (FormMode::Create, false) => "Add book",
            (FormMode::Create, true) => "Adding...",
            (FormMode::Editing(_), false) => "Update book",
            (FormMode::Editing(_), true) => "Updating...",
        }
    }
}
