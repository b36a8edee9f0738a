// src/models/ordered.rs
use crate::models::Document;

/// Documents partitioned into the three priority buckets. Every input
/// document lands in exactly one bucket; `all` is the concatenation in
/// bucket order.
#[derive(Debug, Default)]
pub struct OrderedDocuments {
    pub index: Vec<Document>,
    pub important: Vec<Document>,
    pub other: Vec<Document>,
}

impl OrderedDocuments {
    /// Every document in final order: index, then important, then other.
    pub fn all(&self) -> impl Iterator<Item = &Document> {
        self.index
            .iter()
            .chain(self.important.iter())
            .chain(self.other.iter())
    }

    /// The documents listed under "Core Documentation": index then important.
    pub fn core(&self) -> impl Iterator<Item = &Document> {
        self.index.iter().chain(self.important.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len() + self.important.len() + self.other.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
