use crate::{ApplicationBook, ApplicationStatus, CoreError};

#[tokio::test]
async fn given_seeded_book_when_pending_count_then_three() {
    let book = ApplicationBook::seeded();

    assert_eq!(book.pending_count().await, 3);
}

#[tokio::test]
async fn given_pending_application_when_approve_then_status_approved() {
    let book = ApplicationBook::seeded();

    let application = book.approve("1").await.unwrap();

    assert_eq!(application.status, ApplicationStatus::Approved);
    assert_eq!(book.pending_count().await, 2);
}

#[tokio::test]
async fn given_pending_application_when_reject_then_status_rejected() {
    let book = ApplicationBook::seeded();

    book.reject("2").await.unwrap();

    assert_eq!(
        book.get("2").await.unwrap().status,
        ApplicationStatus::Rejected
    );
}

#[tokio::test]
async fn given_unknown_id_when_approve_then_not_found() {
    let book = ApplicationBook::seeded();

    let result = book.approve("42").await;

    assert!(matches!(
        result,
        Err(CoreError::NotFound { entity: "Application", .. })
    ));
}
