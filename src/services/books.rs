//! Bookshelf service: validation, identifiers and the five book operations

use chrono::Utc;

use crate::{
    config::BooksConfig,
    error::{AppError, AppResult},
    models::book::{Book, BookFilter, BookPayload, BookQuery, BookSummary, PayloadError},
    repository::{books::BookStore, Repository},
};

const CREATE_FAILED: &str = "Gagal menambahkan buku";
const UPDATE_FAILED: &str = "Gagal memperbarui buku";
const BOOK_NOT_FOUND: &str = "Buku tidak ditemukan";
const UPDATE_NOT_FOUND: &str = "Gagal memperbarui buku. Id tidak ditemukan";
const DELETE_NOT_FOUND: &str = "Buku gagal dihapus. Id tidak ditemukan";

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    id_length: usize,
}

impl BooksService {
    pub fn new(repository: Repository, config: BooksConfig) -> Self {
        Self {
            repository,
            id_length: config.id_length.max(1),
        }
    }

    /// Validate and store a new book, returning its generated id
    pub async fn create(&self, payload: BookPayload) -> AppResult<String> {
        let fields = payload
            .into_fields()
            .map_err(|e| rejected(CREATE_FAILED, e))?;

        let mut store = self.repository.books.lock().await;
        let id = self.fresh_id(&store);
        let book = Book::new(id.clone(), fields, Utc::now());
        tracing::info!(book_id = %id, name = %book.name, "Book added");
        store.insert(book);
        Ok(id)
    }

    /// List book summaries matching at most one filter, in insertion order
    pub async fn list(&self, query: &BookQuery) -> Vec<BookSummary> {
        let filter = BookFilter::from(query);
        let store = self.repository.books.lock().await;
        let books: Vec<_> = store
            .iter()
            .filter(|book| filter.matches(book))
            .map(Book::summary_view)
            .collect();
        tracing::debug!(?filter, count = books.len(), "Books listed");
        books
    }

    pub async fn get(&self, id: &str) -> AppResult<Book> {
        let store = self.repository.books.lock().await;
        let book = store.find(id).cloned();
        tracing::debug!(book_id = %id, found = book.is_some(), "Book lookup");
        book.ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    /// Replace the mutable fields of an existing book.
    ///
    /// The id is checked before the payload, so an unknown id with an invalid
    /// or unreadable body reports not-found. `finished` is not recomputed.
    pub async fn update(&self, id: &str, payload: AppResult<BookPayload>) -> AppResult<()> {
        let mut store = self.repository.books.lock().await;
        let book = store
            .find_mut(id)
            .ok_or_else(|| AppError::NotFound(UPDATE_NOT_FOUND.to_string()))?;
        let fields = payload?
            .into_fields()
            .map_err(|e| rejected(UPDATE_FAILED, e))?;

        book.apply(fields, Utc::now());
        tracing::info!(book_id = %id, "Book updated");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let mut store = self.repository.books.lock().await;
        store
            .remove(id)
            .ok_or_else(|| AppError::NotFound(DELETE_NOT_FOUND.to_string()))?;
        tracing::info!(book_id = %id, "Book deleted");
        Ok(())
    }

    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }

    /// Draw ids until one is not already taken
    fn fresh_id(&self, store: &BookStore) -> String {
        loop {
            let id = generate_id(self.id_length);
            if !store.contains(&id) {
                return id;
            }
            tracing::warn!(book_id = %id, "Generated book id already in use, drawing again");
        }
    }
}

fn rejected(action: &str, error: PayloadError) -> AppError {
    tracing::warn!("{}: {}", action, error);
    let reason = match error {
        PayloadError::MissingName => "Mohon isi nama buku",
        PayloadError::MissingPages => "Mohon isi pageCount dan readPage",
        PayloadError::ReadPageExceedsPageCount => {
            "readPage tidak boleh lebih besar dari pageCount"
        }
    };
    AppError::Validation(format!("{}. {}", action, reason))
}

/// URL-safe random identifier of `len` characters
pub fn generate_id(len: usize) -> String {
    nanoid::nanoid!(len)
}
