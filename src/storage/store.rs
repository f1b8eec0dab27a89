//! JSON-file collection persistence.
//!
//! # Responsibilities
//! - Load a collection file as a JSON array (seed defaults when absent)
//! - Rewrite the whole file on every mutation
//! - Serialize concurrent read-modify-write cycles per collection
//!
//! # Design Decisions
//! - One flat JSON array per collection keeps the on-disk state trivially
//!   inspectable and portable between deployments
//! - A missing file is first-run state (debug log); an unreadable or
//!   non-array file is corruption (error log); both degrade to defaults so
//!   reads never fail on the wire
//! - Mutations hold a per-collection mutex across load, mutate and save,
//!   so two devices writing the same collection queue instead of one
//!   overwrite erasing the other

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs;
use tokio::sync::Mutex;

use crate::storage::seed;

/// The four synchronized collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Clients,
    Users,
    Branches,
    Reports,
}

impl Collection {
    /// File name backing this collection inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Clients => "clients.json",
            Collection::Users => "users.json",
            Collection::Branches => "branches.json",
            Collection::Reports => "reports.json",
        }
    }

    /// Field that identifies a record for update and delete.
    pub fn key_field(self) -> &'static str {
        match self {
            Collection::Clients => "referenceNumber",
            Collection::Users | Collection::Branches | Collection::Reports => "id",
        }
    }

    /// Records a fresh deployment starts with.
    fn defaults(self) -> Vec<Value> {
        match self {
            Collection::Users => seed::default_users(),
            Collection::Branches => seed::default_branches(),
            Collection::Clients | Collection::Reports => Vec::new(),
        }
    }

    const fn index(self) -> usize {
        match self {
            Collection::Clients => 0,
            Collection::Users => 1,
            Collection::Branches => 2,
            Collection::Reports => 3,
        }
    }
}

/// Errors from collection persistence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed store for the four collections.
///
/// Handlers receive this behind an `Arc` in the application state; tests
/// point it at a throwaway directory instead of the production one.
pub struct CollectionStore {
    data_dir: PathBuf,
    write_locks: [Mutex<()>; 4],
}

impl CollectionStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir).map_err(|source| StoreError::CreateDir {
            path: data_dir.clone(),
            source,
        })?;
        Ok(Self {
            data_dir,
            write_locks: std::array::from_fn(|_| Mutex::new(())),
        })
    }

    /// Directory the collection files live in.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Read the full contents of a collection.
    ///
    /// Reports come back filtered to records carrying a valid report id;
    /// the filter is only persisted by the next successful write.
    pub async fn list(&self, collection: Collection) -> Vec<Value> {
        self.load(collection).await
    }

    /// Append a record and rewrite the collection file.
    pub async fn append(&self, collection: Collection, record: Value) -> Result<(), StoreError> {
        let _guard = self.write_locks[collection.index()].lock().await;
        let mut records = self.load(collection).await;
        records.push(record);
        self.save(collection, &records).await
    }

    /// Replace the first record whose identity key equals the incoming
    /// record's. Returns whether a match was found.
    ///
    /// Later duplicates of the same key are left untouched. The users
    /// collection is rewritten even on a miss, so a mutation against a
    /// fresh deployment persists the seeded accounts.
    pub async fn update(&self, collection: Collection, record: Value) -> Result<bool, StoreError> {
        let field = collection.key_field();
        let _guard = self.write_locks[collection.index()].lock().await;
        let mut records = self.load(collection).await;

        let Some(target) = record.get(field).cloned() else {
            return Ok(false);
        };
        match records
            .iter()
            .position(|existing| existing.get(field) == Some(&target))
        {
            Some(position) => {
                records[position] = record;
                self.save(collection, &records).await?;
                Ok(true)
            }
            None => {
                if collection == Collection::Users {
                    self.save(collection, &records).await?;
                }
                Ok(false)
            }
        }
    }

    /// Remove every record whose identity key equals `key`.
    ///
    /// Idempotent: deleting an absent key rewrites the collection
    /// unchanged. Returns how many records were removed.
    pub async fn delete(&self, collection: Collection, key: &str) -> Result<usize, StoreError> {
        let field = collection.key_field();
        let _guard = self.write_locks[collection.index()].lock().await;
        let mut records = self.load(collection).await;
        let before = records.len();
        records.retain(|record| record.get(field).and_then(Value::as_str) != Some(key));
        self.save(collection, &records).await?;
        Ok(before - records.len())
    }

    fn path_for(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }

    async fn load(&self, collection: Collection) -> Vec<Value> {
        let path = self.path_for(collection);
        let records = match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<Value>(&bytes) {
                Ok(Value::Array(records)) => records,
                Ok(_) => {
                    tracing::error!(
                        path = %path.display(),
                        "Collection file is not a JSON array, falling back to defaults"
                    );
                    collection.defaults()
                }
                Err(error) => {
                    tracing::error!(
                        path = %path.display(),
                        error = %error,
                        "Collection file is corrupt, falling back to defaults"
                    );
                    collection.defaults()
                }
            },
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Collection file absent, using defaults");
                collection.defaults()
            }
            Err(error) => {
                tracing::error!(
                    path = %path.display(),
                    error = %error,
                    "Failed to read collection file, falling back to defaults"
                );
                collection.defaults()
            }
        };

        match collection {
            Collection::Reports => filter_reports(records),
            _ => records,
        }
    }

    async fn save(&self, collection: Collection, records: &[Value]) -> Result<(), StoreError> {
        let path = self.path_for(collection);
        let body = serde_json::to_string_pretty(records)?;
        fs::write(&path, body)
            .await
            .map_err(|source| StoreError::Write { path, source })?;
        Ok(())
    }
}

/// Drop records that do not carry a report id.
///
/// Early client builds posted client records to the reports endpoint;
/// anything without an `id` starting with `RPT` is noise and stays out of
/// every read and every rewrite.
fn filter_reports(records: Vec<Value>) -> Vec<Value> {
    records
        .into_iter()
        .filter(|record| {
            record
                .get("id")
                .and_then(Value::as_str)
                .is_some_and(|id| id.starts_with("RPT"))
        })
        .collect()
}
