//! Tests for the document store on its own, without the HTTP layer

use chrono::{Duration, Utc};
use tempfile::NamedTempFile;

use opsvantage_api::database::{Sort, Store};
use opsvantage_api::model::{NewsletterSubscription, NewsletterSubscriptionCreate, StatusCheck, StatusCheckCreate};

fn subscription(email: &str) -> NewsletterSubscription {
    NewsletterSubscription::from(NewsletterSubscriptionCreate {
        email: email.to_string(),
        name: None,
    })
}

#[tokio::test]
async fn test_insert_then_get() {
    let temp_db = NamedTempFile::new().unwrap();
    let store = Store::open(temp_db.path().to_str().unwrap(), "test").unwrap();

    let sub = subscription("a@example.com");
    store.insert(&sub).await.unwrap();

    let found = store.get::<NewsletterSubscription>(&sub.id).await.unwrap();
    assert_eq!(found, Some(sub));

    let missing = store.get::<NewsletterSubscription>("missing").await.unwrap();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn test_find_one_and_count_with_filter() {
    let temp_db = NamedTempFile::new().unwrap();
    let store = Store::open(temp_db.path().to_str().unwrap(), "test").unwrap();

    let subs = vec![subscription("a@example.com"), subscription("b@example.com")];
    assert_eq!(store.insert_many(&subs).await.unwrap(), 2);

    let found = store
        .find_one(|sub: &NewsletterSubscription| sub.email == "b@example.com")
        .await
        .unwrap();
    assert_eq!(found.map(|sub| sub.id), Some(subs[1].id.clone()));

    let none = store
        .find_one(|sub: &NewsletterSubscription| sub.email == "c@example.com")
        .await
        .unwrap();
    assert!(none.is_none());

    assert_eq!(store.count(|_: &NewsletterSubscription| true).await.unwrap(), 2);
    assert_eq!(
        store
            .count(|sub: &NewsletterSubscription| sub.email.starts_with('a'))
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn test_find_many_sorts_and_limits() {
    let temp_db = NamedTempFile::new().unwrap();
    let store = Store::open(temp_db.path().to_str().unwrap(), "test").unwrap();

    let base = Utc::now();
    let checks: Vec<StatusCheck> = (0..5)
        .map(|i| {
            let mut check = StatusCheck::from(StatusCheckCreate {
                client_name: format!("client-{i}"),
            });
            check.timestamp = base - Duration::minutes(i);
            check
        })
        .collect();
    store.insert_many(&checks).await.unwrap();

    let newest = store
        .find_many(|_: &StatusCheck| true, Sort::NewestFirst, 3)
        .await
        .unwrap();
    let names: Vec<&str> = newest.iter().map(|check| check.client_name.as_str()).collect();
    assert_eq!(names, ["client-0", "client-1", "client-2"]);

    let natural = store
        .find_many(|_: &StatusCheck| true, Sort::Natural, 2)
        .await
        .unwrap();
    assert_eq!(natural.len(), 2);
}

#[tokio::test]
async fn test_database_names_are_isolated() {
    let temp_db = NamedTempFile::new().unwrap();
    let path = temp_db.path().to_str().unwrap();

    let store = Store::open(path, "staging").unwrap();
    store.insert(&subscription("a@example.com")).await.unwrap();
    store.close();

    let store = Store::open(path, "production").unwrap();
    assert_eq!(store.count(|_: &NewsletterSubscription| true).await.unwrap(), 0);
}

#[tokio::test]
async fn test_close_releases_only_its_own_handle() {
    let temp_db = NamedTempFile::new().unwrap();
    let path = temp_db.path().to_str().unwrap();

    let store = Store::open(path, "test").unwrap();
    let extra = store.clone();

    // Another handle is still alive, so the file stays open.
    extra.close();
    store.insert(&subscription("still-open@example.com")).await.unwrap();
    assert_eq!(store.count(|_: &NewsletterSubscription| true).await.unwrap(), 1);

    // Last handle gone: the file is closed and can be opened again.
    store.close();
    let reopened = Store::open(path, "test").unwrap();
    assert_eq!(reopened.count(|_: &NewsletterSubscription| true).await.unwrap(), 1);
}
