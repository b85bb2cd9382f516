use crate::{ChildCatalog, ChildDraft, CoreError};

fn draft(name: &str, age: u8) -> ChildDraft {
    ChildDraft {
        name: name.to_string(),
        age: Some(age),
        description: "Nuevo en el programa".to_string(),
    }
}

#[tokio::test]
async fn given_seeded_catalog_when_list_then_six_unsponsored_children() {
    let catalog = ChildCatalog::seeded();

    let children = catalog.list().await;

    assert_eq!(children.len(), 6);
    assert!(children.iter().all(|c| !c.sponsored));
    assert_eq!(catalog.available().await.len(), 6);
}

#[tokio::test]
async fn given_valid_draft_when_add_then_gets_next_numeric_id() {
    let catalog = ChildCatalog::seeded();

    let child = catalog.add(draft("Pedro", 5)).await.unwrap();

    assert_eq!(child.id, "7");
    assert!(!child.sponsored);
    assert_eq!(catalog.len().await, 7);
}

#[tokio::test]
async fn given_removed_child_when_add_then_id_not_reused() {
    let catalog = ChildCatalog::seeded();
    catalog.remove("6").await.unwrap();
    catalog.remove("5").await.unwrap();

    let child = catalog.add(draft("Pedro", 5)).await.unwrap();

    assert_eq!(child.id, "7");
    assert_eq!(catalog.len().await, 5);
}

#[tokio::test]
async fn given_invalid_draft_when_add_then_validation_error_and_unchanged() {
    let catalog = ChildCatalog::seeded();

    let result = catalog.add(ChildDraft::default()).await;

    assert!(matches!(result, Err(CoreError::Validation { .. })));
    assert_eq!(catalog.len().await, 6);
}

#[tokio::test]
async fn given_existing_child_when_update_then_fields_replaced() {
    let catalog = ChildCatalog::seeded();

    let updated = catalog.update("2", draft("Carlos Andrés", 10)).await.unwrap();

    assert_eq!(updated.name, "Carlos Andrés");
    assert_eq!(updated.age, 10);
    assert_eq!(catalog.get("2").await.unwrap().name, "Carlos Andrés");
}

#[tokio::test]
async fn given_unknown_child_when_update_then_not_found() {
    let catalog = ChildCatalog::seeded();

    let result = catalog.update("99", draft("Nadie", 3)).await;

    assert!(matches!(result, Err(CoreError::NotFound { entity: "Child", .. })));
}

#[tokio::test]
async fn given_unknown_child_when_remove_then_not_found() {
    let catalog = ChildCatalog::seeded();

    assert!(catalog.remove("99").await.is_err());
    assert_eq!(catalog.len().await, 6);
}

#[tokio::test]
async fn given_empty_catalog_when_add_then_starts_at_one() {
    let catalog = ChildCatalog::default();
    assert!(catalog.is_empty().await);

    let child = catalog.add(draft("Pedro", 5)).await.unwrap();

    assert_eq!(child.id, "1");
}
