use crate::{ChildDraft, CoreError};

fn draft(name: &str, age: Option<u8>, description: &str) -> ChildDraft {
    ChildDraft {
        name: name.to_string(),
        age,
        description: description.to_string(),
    }
}

fn failing_field(draft: &ChildDraft) -> Option<String> {
    match draft.validate() {
        Err(CoreError::Validation { field, .. }) => field,
        _ => None,
    }
}

#[test]
fn given_complete_draft_when_validate_then_ok() {
    assert!(draft("Pedro", Some(5), "Le gusta correr").validate().is_ok());
}

#[test]
fn given_blank_name_when_validate_then_name_field_reported() {
    assert_eq!(failing_field(&draft("  ", Some(5), "x")), Some("name".into()));
}

#[test]
fn given_missing_age_when_validate_then_age_field_reported() {
    assert_eq!(failing_field(&draft("Pedro", None, "x")), Some("age".into()));
}

#[test]
fn given_zero_age_when_validate_then_age_field_reported() {
    assert_eq!(failing_field(&draft("Pedro", Some(0), "x")), Some("age".into()));
}

#[test]
fn given_blank_description_when_validate_then_description_field_reported() {
    assert_eq!(
        failing_field(&draft("Pedro", Some(5), "")),
        Some("description".into())
    );
}
