#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::BTreeSet;
use std::sync::Arc;

use visitcount_gateway::config::{StoreBackend, StoreSection};
use visitcount_gateway::store::{self, SqliteStore, VisitStore};

#[tokio::test]
async fn counts_survive_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("visits.db");

    {
        let store = SqliteStore::open(&path, "visitor-counts").await.unwrap();
        assert_eq!(store.increment("/about").await.unwrap().to_count().unwrap(), 1);
        assert_eq!(store.increment("/about").await.unwrap().to_count().unwrap(), 2);
    }

    let store = SqliteStore::open(&path, "visitor-counts").await.unwrap();
    assert_eq!(store.increment("/about").await.unwrap().to_count().unwrap(), 3);
    assert_eq!(store.increment("/index.html").await.unwrap().to_count().unwrap(), 1);
}

#[tokio::test]
async fn concurrent_increments_are_atomic() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Arc::new(SqliteStore::open(dir.path().join("visits.db"), "visitor-counts").await.unwrap());

    let tasks: Vec<_> = (0..50)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.increment("/hot").await.unwrap().to_count().unwrap() })
        })
        .collect();

    let mut seen = BTreeSet::new();
    for t in tasks {
        assert!(seen.insert(t.await.unwrap()));
    }
    assert_eq!(seen, (1..=50).collect::<BTreeSet<u64>>());
}

#[tokio::test]
async fn opened_from_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = StoreSection {
        backend: StoreBackend::Sqlite,
        table: "site.visits".into(),
        sqlite_path: Some(dir.path().join("cfg.db")),
    };

    let store = store::open(&cfg).await.unwrap();
    assert_eq!(store.table(), "site.visits");
    assert_eq!(store.increment("/").await.unwrap().as_str(), "1");
}

#[tokio::test]
async fn unopenable_path_is_a_store_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bogus = dir.path().join("missing-dir").join("visits.db");
    assert!(SqliteStore::open(bogus, "visitor-counts").await.is_err());
}
