use crate::Role;

#[test]
fn given_legacy_admin_string_when_deserialized_then_rejected() {
    let result = serde_json::from_str::<Role>("\"admin\"");

    assert!(result.is_err());
}

#[test]
fn given_role_when_serialized_then_uses_snake_case_name() {
    assert_eq!(
        serde_json::to_string(&Role::Administrator).unwrap(),
        "\"administrator\""
    );
    assert_eq!(Role::Sponsor.to_string(), "sponsor");
}
