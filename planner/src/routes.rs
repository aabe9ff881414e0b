//! Subject URL paths.
//!
//! The id is an opaque string taken from page markup and is inserted verbatim;
//! no percent-encoding is applied.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Path of the subjects collection.
pub const SUBJECTS: &str = "/subjects";

/// Resource path for one subject: `/subjects/{id}`.
#[must_use]
pub fn subject_path(id: &str) -> String {
    format!("{SUBJECTS}/{id}")
}

/// Edit page for one subject: `/subjects/{id}/edit`.
#[must_use]
pub fn subject_edit_path(id: &str) -> String {
    format!("{SUBJECTS}/{id}/edit")
}
