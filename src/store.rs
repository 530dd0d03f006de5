//! Generic in-memory resource store.
//!
//! One `ResourceStore` per entity type, holding the full collection behind
//! an `RwLock`. Identifiers and creation timestamps are assigned here, on
//! create, and never change afterwards. Operations take the lock for their
//! whole duration, so concurrent writers serialize per collection and a
//! reader never observes a half-applied update.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Contract between an entity type and the store/router machinery.
///
/// `Create` carries the client-supplied fields of a new record; `Update` is
/// the partial patch applied by `merge`, where every field is optional and
/// only supplied fields overwrite.
pub trait Resource: Clone + Serialize + Send + Sync + 'static {
    /// Lowercase display name used in routes' error messages ("company").
    const NAME: &'static str;

    type Create: DeserializeOwned + Send + 'static;
    type Update: DeserializeOwned + Send + 'static;

    /// Builds the stored record from server-assigned identity plus the
    /// client payload.
    fn new(id: String, created_at: DateTime<Utc>, payload: Self::Create) -> Self;

    fn id(&self) -> &str;

    /// Applies a partial update in place. Supplied fields win, including an
    /// explicit null clearing an optional field; absent fields keep their
    /// prior value.
    fn merge(&mut self, patch: Self::Update);
}

pub struct ResourceStore<R> {
    records: RwLock<HashMap<String, R>>,
}

impl<R> Default for ResourceStore<R> {
    fn default() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl<R: Resource> ResourceStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every record in the collection, order unspecified.
    pub fn list(&self) -> Vec<R> {
        self.records.read().values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<R> {
        self.records.read().get(id).cloned()
    }

    /// Assigns a fresh id and creation timestamp, stores the record, and
    /// returns it.
    ///
    /// Random UUIDs are the uniqueness guarantee; the collision probability
    /// is treated as negligible, so there is no retry loop.
    pub fn create(&self, payload: R::Create) -> R {
        let record = R::new(Uuid::new_v4().to_string(), Utc::now(), payload);
        self.records
            .write()
            .insert(record.id().to_owned(), record.clone());
        record
    }

    /// Merges the patch over the existing record and returns the result, or
    /// `None` without mutating anything when the id is absent.
    pub fn update(&self, id: &str, patch: R::Update) -> Option<R> {
        let mut records = self.records.write();
        let record = records.get_mut(id)?;
        record.merge(patch);
        Some(record.clone())
    }

    /// Removes the record. Returns whether anything was actually removed.
    pub fn delete(&self, id: &str) -> bool {
        self.records.write().remove(id).is_some()
    }
}
