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


//! Wire models for the books API
//!
//! JSON field names are camelCase (`publishDate`, `pageCount`, `coverImageUrl`).
//!
//! # Entities
//! - [`Book`] - A book as returned by the server, always carrying its `id`
//! - [`BookInput`] - Request body for `POST /api/books` and `PUT /api/books/{id}`
//! - [`BookDetail`] - Optional extended metadata nested under `detail`

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Server-assigned book identifier
///
/// The API is free to use numeric or string ids. The text form goes into request paths
/// unchanged, and the id is written back to JSON in the form it arrived in. Equality and
/// hashing look at the text only, so `7` and `"7"` name the same book.
#[derive(Debug, Clone)]
pub struct BookId {
    text: String,
    numeric: bool,
}

impl BookId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            text: id.into(),
            numeric: false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the id was a JSON number
    pub fn is_numeric(&self) -> bool {
        self.numeric
    }
}

impl PartialEq for BookId {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for BookId {}

impl Hash for BookId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        Self {
            text: id.to_string(),
            numeric: true,
        }
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Serialize for BookId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.numeric {
            if let Ok(n) = self.text.parse::<i64>() {
                return serializer.serialize_i64(n);
            }
            if let Ok(n) = self.text.parse::<u64>() {
                return serializer.serialize_u64(n);
            }
        }
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Signed(i64),
            Unsigned(u64),
            Text(String),
        }

        let (text, numeric) = match Repr::deserialize(deserializer)? {
            Repr::Signed(n) => (n.to_string(), true),
            Repr::Unsigned(n) => (n.to_string(), true),
            Repr::Text(s) => (s, false),
        };
        Ok(Self { text, numeric })
    }
}

/// Extended bibliographic metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetail {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub page_count: Option<i64>,

    #[serde(default)]
    pub publisher: Option<String>,

    /// Cover image location, must be an absolute URL when present
    #[serde(default)]
    pub cover_image_url: Option<String>,

    #[serde(default)]
    pub edition: Option<String>,
}

impl BookDetail {
    /// Cover image URL if one is set and not blank
    pub fn cover_image(&self) -> Option<&str> {
        self.cover_image_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Book as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "BookWire")]
pub struct Book {
    pub id: BookId,

    pub title: String,

    pub author: String,

    pub isbn: String,

    #[serde(default)]
    pub price: Option<i64>,

    #[serde(default)]
    pub publish_date: Option<String>,

    /// Read from `detail`, falling back to `bookDetail`
    #[serde(default)]
    pub detail: Option<BookDetail>,
}

/// Incoming shape of [`Book`]
///
/// Some server builds send the metadata as `bookDetail`, some send both keys.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookWire {
    id: BookId,
    title: String,
    author: String,
    isbn: String,
    #[serde(default)]
    price: Option<i64>,
    #[serde(default)]
    publish_date: Option<String>,
    #[serde(default)]
    detail: Option<BookDetail>,
    #[serde(default)]
    book_detail: Option<BookDetail>,
}

impl From<BookWire> for Book {
    fn from(wire: BookWire) -> Self {
        Self {
            id: wire.id,
            title: wire.title,
            author: wire.author,
            isbn: wire.isbn,
            price: wire.price,
            publish_date: wire.publish_date,
            detail: wire.detail.or(wire.book_detail),
        }
    }
}

impl Book {
    /// Request body carrying this book's current values
    pub fn to_input(&self) -> BookInput {
        BookInput {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            price: self.price,
            publish_date: self.publish_date.clone(),
            detail: self.detail.clone().unwrap_or_default(),
        }
    }
}

/// Request body for creating or replacing a book
///
/// `price` and `publishDate` are always present in the JSON, as `null` when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub title: String,

    pub author: String,

    pub isbn: String,

    pub price: Option<i64>,

    pub publish_date: Option<String>,

    pub detail: BookDetail,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_id_accepts_number_and_string() {
        let numeric: BookId = serde_json::from_value(json!(7)).unwrap();
        let text: BookId = serde_json::from_value(json!("7")).unwrap();
        assert_eq!(numeric, text);
        assert_eq!(numeric.as_str(), "7");

        let opaque: BookId = serde_json::from_value(json!("b-42")).unwrap();
        assert_eq!(serde_json::to_value(&opaque).unwrap(), json!("b-42"));
        assert_eq!(serde_json::to_value(&numeric).unwrap(), json!(7));
        assert_eq!(serde_json::to_value(&text).unwrap(), json!("7"));
    }

    #[test]
    fn test_book_id_keeps_string_form() {
        for raw in ["007", "+5", "-3"] {
            let id: BookId = serde_json::from_value(json!(raw)).unwrap();
            assert!(!id.is_numeric());
            assert_eq!(id.as_str(), raw);
            assert_eq!(serde_json::to_value(&id).unwrap(), json!(raw));
        }

        let id = BookId::new("42");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("42"));
        assert_eq!(serde_json::to_value(BookId::from(42)).unwrap(), json!(42));
    }

    #[test]
    fn test_book_deserializes_camel_case() {
        let book: Book = serde_json::from_value(json!({
            "id": 3,
            "title": "Dune",
            "author": "Frank Herbert",
            "isbn": "978-0441013593",
            "price": 18000,
            "publishDate": "1965-08-01",
            "detail": {
                "description": "Desert planet",
                "language": "en",
                "pageCount": 412,
                "publisher": "Chilton",
                "coverImageUrl": "https://example.com/dune.jpg",
                "edition": "1st"
            }
        }))
        .unwrap();

        assert_eq!(book.id, BookId::from(3));
        assert_eq!(book.price, Some(18000));
        assert_eq!(book.publish_date.as_deref(), Some("1965-08-01"));
        let detail = book.detail.unwrap();
        assert_eq!(detail.page_count, Some(412));
        assert_eq!(detail.cover_image(), Some("https://example.com/dune.jpg"));
    }

    #[test]
    fn test_book_accepts_legacy_detail_key() {
        let book: Book = serde_json::from_value(json!({
            "id": 1,
            "title": "A",
            "author": "B",
            "isbn": "1",
            "bookDetail": { "publisher": "Acme" }
        }))
        .unwrap();

        assert_eq!(
            book.detail.and_then(|d| d.publisher).as_deref(),
            Some("Acme")
        );
        assert_eq!(book.price, None);
    }

    #[test]
    fn test_book_with_both_detail_keys() {
        let book: Book = serde_json::from_value(json!({
            "id": 1,
            "title": "A",
            "author": "B",
            "isbn": "1",
            "detail": { "publisher": "Acme" },
            "bookDetail": { "publisher": "Other" }
        }))
        .unwrap();
        assert_eq!(
            book.detail.and_then(|d| d.publisher).as_deref(),
            Some("Acme")
        );

        let book: Book = serde_json::from_value(json!({
            "id": 1,
            "title": "A",
            "author": "B",
            "isbn": "1",
            "detail": { "publisher": "Acme" },
            "bookDetail": null
        }))
        .unwrap();
        assert_eq!(
            book.detail.and_then(|d| d.publisher).as_deref(),
            Some("Acme")
        );

        let book: Book = serde_json::from_value(json!({
            "id": 1,
            "title": "A",
            "author": "B",
            "isbn": "1",
            "detail": null,
            "bookDetail": { "language": "en" }
        }))
        .unwrap();
        assert_eq!(book.detail.and_then(|d| d.language).as_deref(), Some("en"));
    }

    #[test]
    fn test_book_serializes_single_detail_key() {
        let book: Book = serde_json::from_value(json!({
            "id": 1,
            "title": "A",
            "author": "B",
            "isbn": "1",
            "bookDetail": { "language": "en" }
        }))
        .unwrap();
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["detail"]["language"], json!("en"));
        assert!(value.get("bookDetail").is_none());
    }

    #[test]
    fn test_input_serializes_explicit_nulls() {
        let input = BookInput {
            title: "A".to_string(),
            author: "B".to_string(),
            isbn: "123-X".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["price"], serde_json::Value::Null);
        assert_eq!(value["publishDate"], serde_json::Value::Null);
        assert!(value.get("id").is_none());
        assert!(value["detail"].is_object());
        assert_eq!(value["detail"]["pageCount"], serde_json::Value::Null);
    }

    #[test]
    fn test_blank_cover_image_is_absent() {
        let detail = BookDetail {
            cover_image_url: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(detail.cover_image(), None);
    }
}
