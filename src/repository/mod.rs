//! Repository layer holding the in-memory collections

pub mod books;

/// Main repository struct
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository with an empty book store
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }
}
