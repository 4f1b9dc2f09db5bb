//! Integration tests for user operations.

mod common;

use common::{create_user, setup_db, MISSING_ID};
use unsocial_core::{
    authenticate_user, get_user_name, register_user, UnsocialError, UserRepository,
};

#[tokio::test]
async fn register_user_succeeds() {
    let db = setup_db().await;

    let user = register_user(&db, "Coco Loco", "coco@loco.com", "cocoloco", "123123123")
        .await
        .unwrap();

    assert_eq!(user.name, "Coco Loco");
    assert_eq!(user.email, "coco@loco.com");
    assert_eq!(user.username, "cocoloco");

    let repo = UserRepository::new(db.pool());
    let stored = repo.find_by_id(&user.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Coco Loco");
}

#[tokio::test]
async fn register_user_stores_a_hash_not_the_password() {
    let db = setup_db().await;

    let user = register_user(&db, "Coco Loco", "coco@loco.com", "cocoloco", "123123123")
        .await
        .unwrap();

    assert_ne!(user.password, "123123123");
    assert!(user.password.starts_with("$argon2id$"));
}

#[tokio::test]
async fn register_user_rejects_duplicate_email() {
    let db = setup_db().await;

    register_user(&db, "Coco Loco", "coco@loco.com", "cocoloco", "123123123")
        .await
        .unwrap();

    let err = register_user(&db, "Coco Liso", "coco@loco.com", "cocoliso", "123123123")
        .await
        .unwrap_err();
    assert!(matches!(err, UnsocialError::Duplicate(field) if field == "email"));
}

#[tokio::test]
async fn register_user_rejects_duplicate_username() {
    let db = setup_db().await;

    register_user(&db, "Coco Loco", "coco@loco.com", "cocoloco", "123123123")
        .await
        .unwrap();

    let err = register_user(&db, "Coco Liso", "coco@liso.com", "cocoloco", "123123123")
        .await
        .unwrap_err();
    assert!(matches!(err, UnsocialError::Duplicate(field) if field == "username"));
}

#[tokio::test]
async fn register_user_rejects_invalid_fields() {
    let db = setup_db().await;

    let err = register_user(&db, "", "coco@loco.com", "cocoloco", "123123123")
        .await
        .unwrap_err();
    assert!(matches!(err, UnsocialError::Validation(msg) if msg == "invalid name"));

    let err = register_user(&db, "Coco Loco", "coco@loco.com", "Coco Loco", "123123123")
        .await
        .unwrap_err();
    assert!(matches!(err, UnsocialError::Validation(msg) if msg == "invalid username"));

    let err = register_user(&db, "Coco Loco", "coco@loco.com", "cocoloco", "short")
        .await
        .unwrap_err();
    assert!(matches!(err, UnsocialError::Validation(msg) if msg == "invalid password length"));
}

#[tokio::test]
async fn authenticate_user_succeeds() {
    let db = setup_db().await;
    let user = create_user(&db, "cocoloco").await;

    let id = authenticate_user(&db, "cocoloco", "123123123").await.unwrap();
    assert_eq!(id, user.id);
}

#[tokio::test]
async fn authenticate_user_rejects_wrong_password() {
    let db = setup_db().await;
    create_user(&db, "cocoloco").await;

    let err = authenticate_user(&db, "cocoloco", "wrong password")
        .await
        .unwrap_err();
    assert!(matches!(err, UnsocialError::Credentials));
}

#[tokio::test]
async fn authenticate_user_fails_on_unknown_username() {
    let db = setup_db().await;

    let err = authenticate_user(&db, "cocoloco", "123123123")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "user not found");
}

#[tokio::test]
async fn get_user_name_succeeds_on_existing_user() {
    let db = setup_db().await;

    let user = register_user(&db, "Coco Loco", "coco@loco.com", "cocoloco", "123123123")
        .await
        .unwrap();

    let name = get_user_name(&db, &user.id, &user.id).await.unwrap();
    assert_eq!(name, "Coco Loco");
}

#[tokio::test]
async fn get_user_name_fails_on_missing_requester() {
    let db = setup_db().await;

    let err = get_user_name(&db, MISSING_ID, MISSING_ID).await.unwrap_err();
    assert_eq!(err.to_string(), "user not found");
}

#[tokio::test]
async fn get_user_name_fails_on_missing_target_with_distinct_message() {
    let db = setup_db().await;
    let user = create_user(&db, "cocoloco").await;

    let err = get_user_name(&db, &user.id, MISSING_ID).await.unwrap_err();
    assert_eq!(err.to_string(), "target user not found");
}

#[tokio::test]
async fn get_user_name_rejects_malformed_ids() {
    let db = setup_db().await;

    let err = get_user_name(&db, "0123", MISSING_ID).await.unwrap_err();
    assert!(matches!(err, UnsocialError::Validation(msg) if msg == "invalid requester_id length"));

    let err = get_user_name(&db, MISSING_ID, "01234567890123456789012X")
        .await
        .unwrap_err();
    assert!(matches!(err, UnsocialError::Validation(msg) if msg == "invalid target_id"));
}
