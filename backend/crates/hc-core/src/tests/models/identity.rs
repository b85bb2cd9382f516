use crate::{Identity, Role};

use googletest::prelude::*;

#[test]
fn given_admin_email_when_administrator_then_fixed_id_and_name() {
    let identity = Identity::administrator("admin@huahuacuna.org");

    assert_that!(identity.id.as_str(), eq("1"));
    assert_that!(identity.role, eq(Role::Administrator));
    assert_that!(identity.display_name.as_str(), eq("Administrador"));
    assert_that!(identity.approved, none());
}

#[test]
fn given_email_when_sponsor_then_display_name_is_local_part() {
    let identity = Identity::sponsor("someone@example.com");

    assert_that!(identity.id.as_str(), eq("2"));
    assert_that!(identity.role, eq(Role::Sponsor));
    assert_that!(identity.display_name.as_str(), eq("someone"));
    assert_that!(identity.approved, some(eq(true)));
}

#[test]
fn given_several_at_signs_when_sponsor_then_splits_on_first() {
    let identity = Identity::sponsor("a@b@c");

    assert_that!(identity.display_name.as_str(), eq("a"));
}

#[test]
fn given_sponsor_when_serialized_then_camel_case_keys() {
    let json = serde_json::to_value(Identity::sponsor("ana@example.com")).unwrap();

    assert_that!(json["displayName"].as_str(), some(eq("ana")));
    assert_that!(json["role"].as_str(), some(eq("sponsor")));
    assert_that!(json["approved"].as_bool(), some(eq(true)));
}

#[test]
fn given_administrator_when_serialized_then_approved_omitted() {
    let json = serde_json::to_value(Identity::administrator("admin@huahuacuna.org")).unwrap();

    assert!(json.get("approved").is_none());
}

#[test]
fn given_stored_json_without_approved_when_deserialized_then_none() {
    let json = r#"{"id":"1","email":"a@b.c","role":"administrator","displayName":"Administrador"}"#;
    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_that!(identity.approved, none());
    assert!(identity.has_role(Role::Administrator));
}
