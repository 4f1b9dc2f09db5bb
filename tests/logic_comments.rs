//! Integration tests for comment operations.

mod common;

use common::{create_post_for, create_user, setup_db, MISSING_ID};
use unsocial_core::{add_comment, remove_comment, PostRepository, UnsocialError};

#[tokio::test]
async fn add_comment_succeeds_for_existing_user_and_post() {
    let db = setup_db().await;
    let author = create_user(&db, "cocoloco").await;
    let commenter = create_user(&db, "cocoliso").await;
    let post = create_post_for(&db, &author).await;

    let comment = add_comment(&db, &commenter.id, &post.id, "hello comment")
        .await
        .unwrap();

    assert_eq!(comment.author, commenter.id);
    assert_eq!(comment.text, "hello comment");

    let repo = PostRepository::new(db.pool());
    let reloaded = repo.find_by_id(&post.id).await.unwrap().unwrap();
    assert_eq!(reloaded.comments, vec![comment]);
}

#[tokio::test]
async fn add_comment_fails_on_missing_documents() {
    let db = setup_db().await;
    let user = create_user(&db, "cocoloco").await;

    let err = add_comment(&db, MISSING_ID, MISSING_ID, "hello comment")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "user not found");

    let err = add_comment(&db, &user.id, MISSING_ID, "hello comment")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "post not found");
}

#[tokio::test]
async fn remove_comment_succeeds_for_comment_author() {
    let db = setup_db().await;
    let user = create_user(&db, "cocoloco").await;
    let post = create_post_for(&db, &user).await;
    let comment = add_comment(&db, &user.id, &post.id, "hello comment")
        .await
        .unwrap();

    remove_comment(&db, &user.id, &post.id, &comment.id)
        .await
        .unwrap();

    let repo = PostRepository::new(db.pool());
    let reloaded = repo.find_by_id(&post.id).await.unwrap().unwrap();
    assert!(reloaded.comments.is_empty());
}

#[tokio::test]
async fn remove_comment_leaves_other_comments_intact() {
    let db = setup_db().await;
    let user = create_user(&db, "cocoloco").await;
    let post = create_post_for(&db, &user).await;

    let first = add_comment(&db, &user.id, &post.id, "first").await.unwrap();
    let second = add_comment(&db, &user.id, &post.id, "second").await.unwrap();

    remove_comment(&db, &user.id, &post.id, &first.id).await.unwrap();

    let repo = PostRepository::new(db.pool());
    let reloaded = repo.find_by_id(&post.id).await.unwrap().unwrap();
    assert_eq!(reloaded.comments, vec![second]);
}

#[tokio::test]
async fn remove_comment_fails_on_missing_user() {
    let db = setup_db().await;

    let err = remove_comment(&db, MISSING_ID, MISSING_ID, MISSING_ID)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "user not found");
}

#[tokio::test]
async fn remove_comment_fails_on_missing_post() {
    let db = setup_db().await;
    let user = create_user(&db, "cocoloco").await;

    let err = remove_comment(&db, &user.id, MISSING_ID, MISSING_ID)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "post not found");
}

#[tokio::test]
async fn remove_comment_fails_on_missing_comment() {
    let db = setup_db().await;
    let user = create_user(&db, "cocoloco").await;
    let post = create_post_for(&db, &user).await;

    let err = remove_comment(&db, &user.id, &post.id, MISSING_ID)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "comment not found");
}

#[tokio::test]
async fn remove_comment_rejects_non_author() {
    let db = setup_db().await;
    let author = create_user(&db, "cocoloco").await;
    let other = create_user(&db, "cocoliso").await;
    let post = create_post_for(&db, &author).await;
    let comment = add_comment(&db, &author.id, &post.id, "hello comment")
        .await
        .unwrap();

    let err = remove_comment(&db, &other.id, &post.id, &comment.id)
        .await
        .unwrap_err();
    assert!(matches!(err, UnsocialError::Ownership(msg) if msg == "user is not author of comment"));

    let repo = PostRepository::new(db.pool());
    let reloaded = repo.find_by_id(&post.id).await.unwrap().unwrap();
    assert_eq!(reloaded.comments.len(), 1);
}

#[tokio::test]
async fn remove_comment_rejects_malformed_ids() {
    let db = setup_db().await;

    let err = remove_comment(&db, "0123", MISSING_ID, MISSING_ID)
        .await
        .unwrap_err();
    assert!(matches!(err, UnsocialError::Validation(msg) if msg == "invalid user_id length"));
}
