mod common;

use chrono::{Duration, Utc};

use examgen_server::{
    errors::AppError,
    repositories::{ExamResultRepository, QuestionSetRepository},
};

use common::{make_result, make_set, InMemoryExamResultRepository, InMemoryQuestionSetRepository};

#[tokio::test]
async fn question_set_repository_scopes_lookups_to_the_owner() {
    let repo = InMemoryQuestionSetRepository::new();

    let set = make_set("user-a", "Physics");
    let id = set.id.clone();
    repo.insert(set).await.expect("insert should work");

    let owned = repo
        .find_by_id("user-a", &id)
        .await
        .expect("find should work");
    assert!(owned.is_some());

    let foreign = repo
        .find_by_id("user-b", &id)
        .await
        .expect("find should work");
    assert!(foreign.is_none());

    let missing = repo
        .find_by_id("user-a", "no-such-id")
        .await
        .expect("find should work");
    assert!(missing.is_none());
}

#[tokio::test]
async fn question_set_repository_rejects_duplicate_ids() {
    let repo = InMemoryQuestionSetRepository::new();

    let set = make_set("user-a", "Physics");
    repo.insert(set.clone()).await.expect("insert should work");

    let duplicate = repo.insert(set).await;
    assert!(matches!(duplicate, Err(AppError::DatabaseError(_))));
}

#[tokio::test]
async fn question_set_listing_is_newest_first_and_paginated() {
    let repo = InMemoryQuestionSetRepository::new();

    let mut oldest = make_set("user-a", "First");
    oldest.created_at = Utc::now() - Duration::minutes(10);
    let mut middle = make_set("user-a", "Second");
    middle.created_at = Utc::now() - Duration::minutes(5);
    let newest = make_set("user-a", "Third");

    repo.insert(oldest).await.expect("insert oldest");
    repo.insert(middle).await.expect("insert middle");
    repo.insert(newest).await.expect("insert newest");
    repo.insert(make_set("user-b", "Other"))
        .await
        .expect("insert foreign");

    let (page, total) = repo
        .list_by_user("user-a", 0, 10)
        .await
        .expect("list should work");
    assert_eq!(total, 3);
    assert_eq!(page.len(), 3);
    assert_eq!(page[0].subject, "Third");
    assert_eq!(page[1].subject, "Second");
    assert_eq!(page[2].subject, "First");

    let (page, total) = repo
        .list_by_user("user-a", 1, 1)
        .await
        .expect("list should work");
    assert_eq!(total, 3);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].subject, "Second");

    let (page, total) = repo
        .list_by_user("user-a", 10, 5)
        .await
        .expect("list should work");
    assert_eq!(total, 3);
    assert!(page.is_empty());

    let (page, total) = repo
        .list_by_user("user-c", 0, 10)
        .await
        .expect("list should work");
    assert_eq!(total, 0);
    assert!(page.is_empty());
}

#[tokio::test]
async fn exam_result_repository_returns_latest_per_set() {
    let repo = InMemoryExamResultRepository::new();

    let mut first = make_result("user-a", "set-1");
    first.created_at = Utc::now() - Duration::minutes(3);
    first.marks_obtained = 0.0;
    first.percentage = Some(0.0);

    let second = make_result("user-a", "set-1");
    let second_id = second.id.clone();

    repo.insert(first).await.expect("insert first");
    repo.insert(second).await.expect("insert second");
    repo.insert(make_result("user-a", "set-2"))
        .await
        .expect("insert other set");

    let latest = repo
        .find_latest_for_set("user-a", "set-1")
        .await
        .expect("query should work")
        .expect("latest should exist");
    assert_eq!(latest.id, second_id);
    assert_eq!(latest.marks_obtained, 1.4);
}

#[tokio::test]
async fn exam_result_repository_scopes_lookups_to_the_owner() {
    let repo = InMemoryExamResultRepository::new();

    repo.insert(make_result("user-a", "set-1"))
        .await
        .expect("insert should work");

    let foreign = repo
        .find_latest_for_set("user-b", "set-1")
        .await
        .expect("query should work");
    assert!(foreign.is_none());

    let missing = repo
        .find_latest_for_set("user-a", "set-9")
        .await
        .expect("query should work");
    assert!(missing.is_none());
}
