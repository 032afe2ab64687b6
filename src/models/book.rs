//! Book record model and request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

/// Stored book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Generated identifier, immutable
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    /// `read_page == page_count` as of creation
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a new record from validated fields. Both timestamps get `now`.
    pub fn new(id: String, fields: BookFields, now: DateTime<Utc>) -> Self {
        Self {
            id,
            finished: fields.page_count == fields.read_page,
            name: fields.name,
            year: fields.year,
            author: fields.author,
            summary: fields.summary,
            publisher: fields.publisher,
            page_count: fields.page_count,
            read_page: fields.read_page,
            reading: fields.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field and stamp `updated_at`.
    ///
    /// `finished` is left as it was: updates have never re-derived it, so a
    /// book whose progress changes keeps the flag computed at creation.
    pub fn apply(&mut self, fields: BookFields, now: DateTime<Utc>) {
        self.name = fields.name;
        self.year = fields.year;
        self.author = fields.author;
        self.summary = fields.summary;
        self.publisher = fields.publisher;
        self.page_count = fields.page_count;
        self.read_page = fields.read_page;
        self.reading = fields.reading;
        self.updated_at = now;
    }

    pub fn summary_view(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// Reduced book view used by list responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

/// Create/update request body
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    /// Book title (required, non-empty)
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    /// Total number of pages (required)
    pub page_count: Option<u32>,
    /// Last page read (required), must not exceed `pageCount`
    pub read_page: Option<u32>,
    #[serde(default)]
    pub reading: bool,
}

/// Rejection reasons for a book payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("missing name")]
    MissingName,
    #[error("missing pageCount or readPage")]
    MissingPages,
    #[error("readPage exceeds pageCount")]
    ReadPageExceedsPageCount,
}

/// Payload that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

impl BookPayload {
    /// Check the name first, then that both page counters are present, then progress.
    pub fn into_fields(self) -> Result<BookFields, PayloadError> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(PayloadError::MissingName),
        };
        let (page_count, read_page) = match (self.page_count, self.read_page) {
            (Some(page_count), Some(read_page)) => (page_count, read_page),
            _ => return Err(PayloadError::MissingPages),
        };
        if read_page > page_count {
            return Err(PayloadError::ReadPageExceedsPageCount);
        }
        Ok(BookFields {
            name,
            year: self.year,
            author: self.author,
            summary: self.summary,
            publisher: self.publisher,
            page_count,
            read_page,
            reading: self.reading,
        })
    }
}

/// Query parameters for listing books
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Case-insensitive substring of the book name
    pub name: Option<String>,
    /// `1` for books being read, `0` for the others
    pub reading: Option<String>,
    /// `1` for finished books, `0` for the others
    pub finished: Option<String>,
}

/// The single filter a list query resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    All,
    /// Lowercased needle
    Name(String),
    Reading(bool),
    Finished(bool),
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            BookFilter::All => true,
            BookFilter::Name(needle) => book.name.to_lowercase().contains(needle.as_str()),
            BookFilter::Reading(reading) => book.reading == *reading,
            BookFilter::Finished(finished) => book.finished == *finished,
        }
    }
}

impl From<&BookQuery> for BookFilter {
    /// Name wins over reading, reading wins over finished. Empty values count as absent.
    fn from(query: &BookQuery) -> Self {
        fn present(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }

        if let Some(name) = present(&query.name) {
            BookFilter::Name(name.to_lowercase())
        } else if let Some(reading) = present(&query.reading) {
            BookFilter::Reading(is_truthy(reading))
        } else if let Some(finished) = present(&query.finished) {
            BookFilter::Finished(is_truthy(finished))
        } else {
            BookFilter::All
        }
    }
}

/// A query flag is true when it reads as a non-zero number.
pub fn is_truthy(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(|n| n != 0.0 && !n.is_nan())
        .unwrap_or(false)
}
