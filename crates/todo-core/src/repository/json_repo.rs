//! JSON Repository
//!
//! Keeps a whole collection as one JSON string under a single key.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{DomainResult, Entity};
use super::codec;
use super::traits::{KeyValueStore, Repository};

/// Repository storing the collection as JSON in a `KeyValueStore`
#[derive(Debug, Clone)]
pub struct JsonRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> JsonRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S, T> Repository<T> for JsonRepository<S>
where
    S: KeyValueStore,
    T: Entity + Serialize + DeserializeOwned,
{
    fn load(&self) -> DomainResult<Vec<T>> {
        match self.store.get_item(&self.key)? {
            Some(raw) => {
                let entities = codec::decode(&raw)?;
                log::debug!("[STORAGE] Loaded {} records from '{}'", entities.len(), self.key);
                Ok(entities)
            }
            None => {
                log::debug!("[STORAGE] Nothing stored under '{}'", self.key);
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, entities: &[T]) -> DomainResult<()> {
        let json = codec::encode(entities)?;
        self.store.set_item(&self.key, &json)?;
        log::debug!("[STORAGE] Saved {} records to '{}'", entities.len(), self.key);
        Ok(())
    }
}
