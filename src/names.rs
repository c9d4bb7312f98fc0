//! Dot-separated qualified-name helpers, independent of the signature grammar

use crate::consts::C_DOT;

/// Returns everything but the last segment of a dot-separated qualified
/// name, or the empty string if the name is not qualified.
pub fn get_qualifier(name: &str) -> &str {
    match name.rfind(C_DOT) {
        Some(dot) => &name[..dot],
        None => "",
    }
}

/// Returns the last segment of a dot-separated qualified name, or the name
/// itself if it is not qualified.
pub fn get_simple_name(name: &str) -> &str {
    match name.rfind(C_DOT) {
        Some(dot) => &name[dot + 1..],
        None => name,
    }
}

/// Returns all segments of a dot-separated qualified name in order. An
/// unqualified name yields itself as the only segment; an empty name
/// yields no segments.
pub fn get_simple_names(name: &str) -> Vec<&str> {
    if name.is_empty() {
        return Vec::new();
    }
    name.split(C_DOT).collect()
}

/// Joins name segments with dots. An empty slice yields the empty string
/// and a single segment is returned unchanged; no leading or trailing dot
/// ever appears.
pub fn to_qualified_name(segments: &[&str]) -> String {
    segments.join(".")
}
