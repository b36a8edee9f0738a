// src/models/frontmatter.rs
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub description: Option<String>,
}
