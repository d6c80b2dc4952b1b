//! Tests for the user service.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{InMemoryUserStore, MockUserStore, UserStoreError};
use crate::domain::{
    SortDirection, SortField, UserProfile, ValidationIssue, sample_users,
};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_clock() -> Arc<FixtureClock> {
    Arc::new(FixtureClock {
        utc_now: Utc
            .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp"),
    })
}

fn fixture_now() -> NaiveDateTime {
    fixture_clock().local().naive_local()
}

fn service_over(store: Arc<InMemoryUserStore>) -> UserService<InMemoryUserStore> {
    UserService::new(store, fixture_clock())
}

#[fixture]
fn store() -> Arc<InMemoryUserStore> {
    Arc::new(InMemoryUserStore::new())
}

#[fixture]
fn draft() -> UserDraft {
    UserDraft {
        name: "Ольга Смирнова".to_owned(),
        email: "olga@example.com".to_owned(),
        age: "27".to_owned(),
        phone: "89161234567".to_owned(),
        city: "Тверь".to_owned(),
    }
}

fn user_with_id(id: u64) -> User {
    User::new(
        UserId::new(id),
        UserProfile {
            name: "Test User".to_owned(),
            email: format!("user{id}@example.com"),
            age: 20,
            phone: String::new(),
            city: String::new(),
        },
    )
}

#[rstest]
#[case(Vec::new(), 1)]
#[case(vec![5, 2, 8], 9)]
#[case(vec![1], 2)]
fn next_id_is_one_past_the_maximum(#[case] ids: Vec<u64>, #[case] expected: u64) {
    let users: Vec<User> = ids.into_iter().map(user_with_id).collect();
    assert_eq!(next_user_id(&users), UserId::new(expected));
}

#[rstest]
#[tokio::test]
async fn first_create_in_empty_store_gets_id_one(draft: UserDraft) {
    let store = Arc::new(InMemoryUserStore::with_users(Vec::new()));
    let service = service_over(Arc::clone(&store));

    let user = service.create_user(draft).await.expect("create succeeds");

    assert_eq!(user.id(), UserId::FIRST);
    assert_eq!(store.snapshot(), Some(vec![user]));
}

#[rstest]
#[tokio::test]
async fn create_appends_normalised_record(store: Arc<InMemoryUserStore>, draft: UserDraft) {
    let service = service_over(Arc::clone(&store));

    let user = service.create_user(draft).await.expect("create succeeds");

    assert_eq!(user.id(), UserId::new(4));
    assert_eq!(user.phone(), "+7 (916) 123-45-67");
    assert_eq!(user.created_at(), Some(fixture_now()));
    assert!(user.updated_at().is_none());
    let stored = store.snapshot().expect("document written");
    assert_eq!(stored.len(), 4);
    assert_eq!(stored.last(), Some(&user));
}

#[rstest]
#[tokio::test]
async fn duplicate_email_create_leaves_store_unchanged(
    store: Arc<InMemoryUserStore>,
    draft: UserDraft,
) {
    let service = service_over(Arc::clone(&store));
    let draft = UserDraft {
        email: "IVAN@EXAMPLE.COM".to_owned(),
        ..draft
    };

    let err = service.create_user(draft).await.expect_err("duplicate rejected");

    let UserServiceError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(errors.issues(), [ValidationIssue::EmailTaken]);
    assert_eq!(store.snapshot(), Some(sample_users()));
    assert_eq!(store.save_count(), 1, "only the bootstrap save happened");
}

#[rstest]
#[tokio::test]
async fn update_keeps_own_email_and_stamps_update(store: Arc<InMemoryUserStore>) {
    let service = service_over(Arc::clone(&store));
    let draft = UserDraft {
        name: "Мария Петрова".to_owned(),
        email: "MARIA@example.com".to_owned(),
        age: "31".to_owned(),
        phone: String::new(),
        city: "Казань".to_owned(),
    };

    let user = service
        .update_user(UserId::new(2), draft)
        .await
        .expect("update succeeds");

    assert_eq!(user.age(), 31);
    assert_eq!(user.email(), "MARIA@example.com");
    assert_eq!(user.updated_at(), Some(fixture_now()));
    let stored = store.snapshot().expect("document written");
    assert_eq!(stored.get(1), Some(&user));
    assert_eq!(stored.len(), 3);
}

#[rstest]
#[tokio::test]
async fn update_rejects_another_users_email(store: Arc<InMemoryUserStore>, draft: UserDraft) {
    let service = service_over(Arc::clone(&store));
    let draft = UserDraft {
        email: "alex@example.com".to_owned(),
        ..draft
    };

    let err = service
        .update_user(UserId::new(1), draft)
        .await
        .expect_err("duplicate rejected");

    assert!(matches!(err, UserServiceError::Validation(_)));
    assert_eq!(store.snapshot(), Some(sample_users()));
}

#[rstest]
#[tokio::test]
async fn update_of_missing_user_is_not_found(store: Arc<InMemoryUserStore>, draft: UserDraft) {
    let service = service_over(store);
    let err = service
        .update_user(UserId::new(999), draft)
        .await
        .expect_err("missing user");
    assert_eq!(err, UserServiceError::not_found(UserId::new(999)));
}

#[rstest]
#[tokio::test]
async fn delete_returns_removed_record(store: Arc<InMemoryUserStore>) {
    let service = service_over(Arc::clone(&store));

    let removed = service
        .delete_user(UserId::new(1))
        .await
        .expect("delete succeeds");

    assert_eq!(removed.name(), "Иван Иванов");
    let remaining: Vec<u64> = store
        .snapshot()
        .expect("document written")
        .iter()
        .map(|user| user.id().get())
        .collect();
    assert_eq!(remaining, vec![2, 3]);
}

#[rstest]
#[tokio::test]
async fn delete_of_missing_user_writes_nothing(store: Arc<InMemoryUserStore>) {
    let service = service_over(Arc::clone(&store));

    let err = service
        .delete_user(UserId::new(999))
        .await
        .expect_err("missing user");

    assert_eq!(err, UserServiceError::not_found(UserId::new(999)));
    assert_eq!(store.snapshot(), Some(sample_users()));
    assert_eq!(store.save_count(), 1);
}

#[rstest]
#[tokio::test]
async fn queries_read_through_the_store(store: Arc<InMemoryUserStore>) {
    let service = service_over(store);

    let found = service.find_user(UserId::new(3)).await.expect("user exists");
    assert_eq!(found.city(), "Казань");
    assert_eq!(service.count_users().await.expect("count"), 3);

    let search = UserSearch {
        sort: Some((SortField::Age, SortDirection::Descending)),
        ..UserSearch::default()
    };
    let ages: Vec<u8> = service
        .list_users(&search)
        .await
        .expect("list")
        .iter()
        .map(User::age)
        .collect();
    assert_eq!(ages, vec![30, 25, 22]);
}

#[rstest]
#[tokio::test]
async fn storage_failures_surface_as_storage_errors(draft: UserDraft) {
    let mut store = MockUserStore::new();
    store
        .expect_load()
        .times(1)
        .return_once(|| Ok(sample_users()));
    store
        .expect_save()
        .times(1)
        .returning(|_| Err(UserStoreError::io("users.json", "disk full")));
    let service = UserService::new(Arc::new(store), fixture_clock());

    let err = service.create_user(draft).await.expect_err("save fails");

    assert_eq!(
        err,
        UserServiceError::Storage(UserStoreError::io("users.json", "disk full"))
    );
}

#[rstest]
#[tokio::test]
async fn invalid_form_never_reaches_save(draft: UserDraft) {
    let mut store = MockUserStore::new();
    store
        .expect_load()
        .times(1)
        .return_once(|| Ok(Vec::new()));
    store.expect_save().never();
    let service = UserService::new(Arc::new(store), fixture_clock());
    let draft = UserDraft {
        age: "-1".to_owned(),
        ..draft
    };

    let err = service.create_user(draft).await.expect_err("age rejected");

    let UserServiceError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert!(errors.contains(&ValidationIssue::AgeNotANumber));
}
