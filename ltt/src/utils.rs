// src/utils.rs
use std::path::{Component, Path};

/// Converts a relative path to its `/`-separated form, dropping any
/// non-normal components.
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    let parts: Vec<_> = path
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    parts.join("/")
}

/// Formats a byte count for humans: bytes below 1024, one-decimal KB below
/// 1 MiB, one-decimal MB above.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;

    #[allow(clippy::cast_precision_loss)]
    let value = bytes as f64;
    if value < KIB {
        format!("{bytes} B")
    } else if value < MIB {
        format!("{:.1} KB", value / KIB)
    } else {
        format!("{:.1} MB", value / MIB)
    }
}
