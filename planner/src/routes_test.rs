use super::*;

#[test]
fn subject_path_formats_expected_path() {
    assert_eq!(subject_path("42"), "/subjects/42");
}

#[test]
fn subject_edit_path_formats_expected_path() {
    assert_eq!(subject_edit_path("42"), "/subjects/42/edit");
}

#[test]
fn ids_are_inserted_verbatim() {
    assert_eq!(subject_path("a b/c"), "/subjects/a b/c");
}
