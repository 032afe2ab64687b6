//! In-memory book storage

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::models::book::Book;

/// Ordered collection of books, in insertion order
#[derive(Debug, Default)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.books.iter().any(|book| book.id == id)
    }

    /// Append a book at the end of the collection
    pub fn insert(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// First book with the given id
    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.id == id)
    }

    /// Remove the first book with the given id, keeping the order of the rest
    pub fn remove(&mut self, id: &str) -> Option<Book> {
        let index = self.books.iter().position(|book| book.id == id)?;
        Some(self.books.remove(index))
    }
}

/// Shared handle on the book store. Every operation holds the lock for its whole duration.
#[derive(Clone, Default)]
pub struct BooksRepository {
    store: Arc<Mutex<BookStore>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self) -> MutexGuard<'_, BookStore> {
        self.store.lock().await
    }

    pub async fn count(&self) -> usize {
        self.lock().await.len()
    }
}
