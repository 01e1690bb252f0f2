//! Bucket names and their normalization rules.
//!
//! Tasks live in named buckets: the seven weekdays plus a catch-all
//! `general` bucket. Internally every bucket name is lowercase; the file
//! format and headers use the capitalized form (`Monday`, `General`).

/// Name of the catch-all bucket used when no day is given.
pub const GENERAL: &str = "general";

/// The eight buckets every store starts with, in display order.
pub const CANONICAL_BUCKETS: [&str; 8] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
    GENERAL,
];

/// Lowercases and trims a bucket name. Blank input maps to `general`.
pub fn normalize(name: &str) -> String {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        GENERAL.to_string()
    } else {
        name
    }
}

/// Lowercases a bucket name for lookups without the blank-to-general rule.
///
/// Lookups on a blank name must not silently hit `general`.
pub fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Upper-cases the first character: `monday` -> `Monday`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
