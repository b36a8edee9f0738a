// src/models.rs
pub mod document;
pub mod frontmatter;
pub mod ordered;

pub use document::Document;
pub use frontmatter::Frontmatter;
pub use ordered::OrderedDocuments;
