//! Document store backed by the embedded redb database
//!
//! Every collection is a redb table keyed by record id, with the record stored
//! as a JSON string. Table names are prefixed with the logical database name so
//! several deployments can share one file:
//!
//! - Key: `"4f0c9a52-..."`
//! - Value: `'{"id":"4f0c9a52-...","email":"jane@example.com",...}'`
//!
//! redb is synchronous, so each operation runs on the blocking thread pool and
//! the public API stays async.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use crate::error::StoreError;

/// The six independent collections held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    ContactForms,
    NewsletterSubscriptions,
    ServiceInquiries,
    DigitalProducts,
    ChatMessages,
    StatusChecks,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::ContactForms,
        Collection::NewsletterSubscriptions,
        Collection::ServiceInquiries,
        Collection::DigitalProducts,
        Collection::ChatMessages,
        Collection::StatusChecks,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Collection::ContactForms => "contact_forms",
            Collection::NewsletterSubscriptions => "newsletter_subscriptions",
            Collection::ServiceInquiries => "service_inquiries",
            Collection::DigitalProducts => "digital_products",
            Collection::ChatMessages => "chat_messages",
            Collection::StatusChecks => "status_checks",
        }
    }
}

/// A record that lives in exactly one collection
pub trait Document: Serialize + DeserializeOwned + Send + 'static {
    const COLLECTION: Collection;

    fn id(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;
}

/// Result ordering for [`Store::find_many`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    /// Descending creation timestamp
    NewestFirst,

    /// Storage order, no sorting
    Natural,
}

/// Handle to the document store, cheap to clone
#[derive(Clone)]
pub struct Store {
    db: Arc<Database>,
    namespace: Arc<str>,
}

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

fn table_name(namespace: &str, collection: Collection) -> String {
    format!("{}.{}", namespace, collection.name())
}

fn definition(name: &str) -> TableDefinition<'_, &'static str, &'static str> {
    TableDefinition::new(name)
}

impl Store {
    /// Creates or opens the database file at `path` and makes sure every
    /// collection table of `db_name` exists.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use opsvantage_api::database::Store;
    /// let store = Store::open("data.redb", "opsvantage").expect("Failed to open store");
    /// ```
    pub fn open(path: &str, db_name: &str) -> Result<Self, StoreError> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        for collection in Collection::ALL {
            let name = table_name(db_name, collection);
            write_txn.open_table(definition(&name))?;
        }
        write_txn.commit()?;

        info!(path, db_name, "document store opened");

        Ok(Self {
            db: Arc::new(db),
            namespace: Arc::from(db_name),
        })
    }

    /// Releases this handle on the database. The file is closed once the last
    /// clone is gone.
    pub fn close(self) {
        let remaining_handles = Arc::strong_count(&self.db) - 1;
        drop(self);

        if remaining_handles == 0 {
            info!("database connection closed");
        } else {
            info!(remaining_handles, "database handle released");
        }
    }

    async fn run<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Database, &str) -> Result<T, StoreError> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        let namespace = Arc::clone(&self.namespace);

        tokio::task::spawn_blocking(move || op(&db, &namespace)).await?
    }

    pub async fn insert<D: Document>(&self, doc: &D) -> Result<(), StoreError> {
        self.insert_many(std::slice::from_ref(doc)).await.map(|_| ())
    }

    /// Writes all documents in a single transaction and returns how many were
    /// written. A document whose id already exists is replaced.
    pub async fn insert_many<D: Document>(&self, docs: &[D]) -> Result<usize, StoreError> {
        let rows = docs
            .iter()
            .map(|doc| Ok((doc.id().to_string(), serde_json::to_string(doc)?)))
            .collect::<Result<Vec<(String, String)>, StoreError>>()?;
        let collection = D::COLLECTION;

        self.run(move |db, namespace| {
            let name = table_name(namespace, collection);
            let write_txn = db.begin_write()?;
            {
                let mut table = write_txn.open_table(definition(&name))?;
                for (id, json) in &rows {
                    table.insert(id.as_str(), json.as_str())?;
                }
            }
            write_txn.commit()?;

            debug!(collection = collection.name(), count = rows.len(), "documents inserted");
            Ok(rows.len())
        })
        .await
    }

    /// Looks a document up by its id
    pub async fn get<D: Document>(&self, id: &str) -> Result<Option<D>, StoreError> {
        let id = id.to_string();

        self.run(move |db, namespace| {
            let name = table_name(namespace, D::COLLECTION);
            let read_txn = db.begin_read()?;
            let table = read_txn.open_table(definition(&name))?;

            let doc = match table.get(id.as_str())? {
                Some(value) => Some(serde_json::from_str(value.value())?),
                None => None,
            };
            Ok(doc)
        })
        .await
    }

    /// Returns the first document matching `filter`, in storage order
    pub async fn find_one<D, F>(&self, filter: F) -> Result<Option<D>, StoreError>
    where
        D: Document,
        F: Fn(&D) -> bool + Send + 'static,
    {
        self.run(move |db, namespace| {
            Ok(scan(db, namespace, &filter, Some(1))?.into_iter().next())
        })
        .await
    }

    /// Returns at most `limit` documents matching `filter`
    pub async fn find_many<D, F>(&self, filter: F, sort: Sort, limit: usize) -> Result<Vec<D>, StoreError>
    where
        D: Document,
        F: Fn(&D) -> bool + Send + 'static,
    {
        self.run(move |db, namespace| {
            let mut docs = match sort {
                Sort::Natural => scan(db, namespace, &filter, Some(limit))?,
                Sort::NewestFirst => {
                    let mut docs = scan(db, namespace, &filter, None)?;
                    docs.sort_by(|a: &D, b: &D| b.created_at().cmp(&a.created_at()));
                    docs
                }
            };
            docs.truncate(limit);
            Ok(docs)
        })
        .await
    }

    /// Counts the documents matching `filter`
    pub async fn count<D, F>(&self, filter: F) -> Result<u64, StoreError>
    where
        D: Document,
        F: Fn(&D) -> bool + Send + 'static,
    {
        self.run(move |db, namespace| {
            let name = table_name(namespace, D::COLLECTION);
            let read_txn = db.begin_read()?;
            let table = read_txn.open_table(definition(&name))?;

            let mut count = 0;
            for entry in table.iter()? {
                let (_, value) = entry?;
                let doc: D = serde_json::from_str(value.value())?;
                if filter(&doc) {
                    count += 1;
                }
            }
            Ok(count)
        })
        .await
    }
}

fn scan<D: Document>(
    db: &Database,
    namespace: &str,
    filter: &dyn Fn(&D) -> bool,
    limit: Option<usize>,
) -> Result<Vec<D>, StoreError> {
    let name = table_name(namespace, D::COLLECTION);
    let read_txn = db.begin_read()?;
    let table = read_txn.open_table(definition(&name))?;

    let mut docs = Vec::new();
    for entry in table.iter()? {
        if limit.is_some_and(|limit| docs.len() >= limit) {
            break;
        }

        let (_, value) = entry?;
        let doc: D = serde_json::from_str(value.value())?;
        if filter(&doc) {
            docs.push(doc);
        }
    }

    Ok(docs)
}
