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


//! Client-side book validation
//!
//! Rules are checked in a fixed order and the first failure wins:
//! 1. `title` is not blank
//! 2. `author` is not blank
//! 3. `isbn` is not blank
//! 4. `isbn` only contains digits, `X` and `-` (no length or checksum check)
//! 5. `price`, when set, is not negative
//! 6. `detail.pageCount`, when set, is not negative
//! 7. `detail.coverImageUrl`, when set, parses as a URL (any scheme)

use crate::api::models::BookInput;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use url::Url;

lazy_static! {
    static ref ISBN_PATTERN: Regex = Regex::new(r"^[0-9X-]+$").expect("valid ISBN pattern");
}

/// First rule a book failed, in check order
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a title.")]
    MissingTitle,

    #[error("Please enter an author.")]
    MissingAuthor,

    #[error("Please enter an ISBN.")]
    MissingIsbn,

    #[error("Invalid ISBN format (only digits, X, and - are allowed).")]
    InvalidIsbn,

    #[error("Price must be 0 or greater.")]
    NegativePrice,

    #[error("Page count must be 0 or greater.")]
    NegativePageCount,

    #[error("Invalid cover image URL.")]
    InvalidCoverImageUrl,
}

/// Check a book against every rule, stopping at the first violation
pub fn validate_book(book: &BookInput) -> Result<(), ValidationError> {
    if book.title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }

    if book.author.trim().is_empty() {
        return Err(ValidationError::MissingAuthor);
    }

    let isbn = book.isbn.trim();
    if isbn.is_empty() {
        return Err(ValidationError::MissingIsbn);
    }

    if !is_valid_isbn(isbn) {
        return Err(ValidationError::InvalidIsbn);
    }

    if book.price.is_some_and(|price| price < 0) {
        return Err(ValidationError::NegativePrice);
    }

    if book.detail.page_count.is_some_and(|count| count < 0) {
        return Err(ValidationError::NegativePageCount);
    }

    if let Some(cover) = book.detail.cover_image() {
        if !is_valid_url(cover) {
            return Err(ValidationError::InvalidCoverImageUrl);
        }
    }

    Ok(())
}

/// Digits, uppercase `X` and hyphens only
pub fn is_valid_isbn(isbn: &str) -> bool {
    ISBN_PATTERN.is_match(isbn)
}

/// Absolute URL of any scheme
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::BookDetail;

    fn valid_book() -> BookInput {
        BookInput {
            title: "The Rust Programming Language".to_string(),
            author: "Steve Klabnik".to_string(),
            isbn: "978-1-7185-0310-6".to_string(),
            price: Some(39000),
            publish_date: Some("2023-02-28".to_string()),
            detail: BookDetail {
                page_count: Some(560),
                cover_image_url: Some("https://example.com/cover.png".to_string()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_valid_book_passes() {
        assert_eq!(validate_book(&valid_book()), Ok(()));
    }

    #[test]
    fn test_minimal_book_passes() {
        let book = BookInput {
            title: "A".to_string(),
            author: "B".to_string(),
            isbn: "123-X".to_string(),
            ..Default::default()
        };
        assert_eq!(validate_book(&book), Ok(()));
    }

    #[test]
    fn test_required_fields_in_priority_order() {
        let empty = BookInput::default();
        assert_eq!(validate_book(&empty), Err(ValidationError::MissingTitle));

        let book = BookInput {
            title: "A".to_string(),
            ..Default::default()
        };
        assert_eq!(validate_book(&book), Err(ValidationError::MissingAuthor));

        let book = BookInput {
            title: "A".to_string(),
            author: "B".to_string(),
            ..Default::default()
        };
        assert_eq!(validate_book(&book), Err(ValidationError::MissingIsbn));
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut book = valid_book();
        book.title = "   \t".to_string();
        assert_eq!(validate_book(&book), Err(ValidationError::MissingTitle));

        let mut book = valid_book();
        book.isbn = "  ".to_string();
        assert_eq!(validate_book(&book), Err(ValidationError::MissingIsbn));
    }

    #[test]
    fn test_isbn_character_set() {
        for isbn in ["0306406152", "0-306-40615-2", "123456789X", "X", "---"] {
            assert!(is_valid_isbn(isbn), "{isbn} should pass");
        }
        for isbn in ["978 0306406157", "12345678x", "ISBN123", "123.456", "１２３"] {
            assert!(!is_valid_isbn(isbn), "{isbn} should fail");
        }
    }

    #[test]
    fn test_isbn_format_checked_before_numbers() {
        let mut book = valid_book();
        book.isbn = "abc".to_string();
        book.price = Some(-1);
        book.detail.page_count = Some(-1);
        assert_eq!(validate_book(&book), Err(ValidationError::InvalidIsbn));
    }

    #[test]
    fn test_negative_price_and_page_count() {
        let mut book = valid_book();
        book.price = Some(-1);
        book.detail.page_count = Some(-5);
        assert_eq!(validate_book(&book), Err(ValidationError::NegativePrice));

        book.price = Some(0);
        assert_eq!(validate_book(&book), Err(ValidationError::NegativePageCount));

        book.detail.page_count = Some(0);
        assert_eq!(validate_book(&book), Ok(()));
    }

    #[test]
    fn test_cover_image_url() {
        let mut book = valid_book();
        book.detail.cover_image_url = Some("not a url".to_string());
        assert_eq!(
            validate_book(&book),
            Err(ValidationError::InvalidCoverImageUrl)
        );

        book.detail.cover_image_url = Some("/relative/cover.png".to_string());
        assert_eq!(
            validate_book(&book),
            Err(ValidationError::InvalidCoverImageUrl)
        );

        for url in [
            "ftp://files.example.com/cover.png",
            "data:image/png;base64,AAAA",
            "mailto:covers@example.com",
        ] {
            book.detail.cover_image_url = Some(url.to_string());
            assert_eq!(validate_book(&book), Ok(()), "{url} should pass");
        }

        book.detail.cover_image_url = None;
        assert_eq!(validate_book(&book), Ok(()));
    }
}
