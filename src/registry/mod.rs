use crate::dao::{Headers, HttpDao};
use log::debug;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[cfg(test)]
mod tests;

/// A directory of named DAOs with get-or-create semantics. Entries are never
/// removed or overwritten: once a name is registered, every lookup for the
/// life of the registry returns the same [`HttpDao`] instance.
///
/// Construct one per application (or per test) and pass it around; there is
/// no process-wide instance.
#[derive(Default)]
pub struct Registry {
    daos: RwLock<HashMap<String, Arc<HttpDao>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the DAO registered under `name`, creating it first if absent.
    /// First writer wins: when `name` already exists the existing DAO is
    /// returned unchanged and `base_url`/`default_headers` are ignored.
    pub fn register_or_get(
        &self,
        name: &str,
        base_url: impl Into<String>,
        default_headers: Headers,
    ) -> Arc<HttpDao> {
        let mut daos = self.daos.write().unwrap();
        match daos.entry(name.to_string()) {
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                let dao = Arc::new(HttpDao::new(base_url, default_headers));
                debug!("registered http dao {:?} -> {}", name, dao.base_url());
                Arc::clone(entry.insert(dao))
            }
        }
    }

    /// Returns the DAO registered under `name`, or `None` when the name is
    /// unknown. Never falls back to a default configuration.
    pub fn get(&self, name: &str) -> Option<Arc<HttpDao>> {
        self.daos.read().unwrap().get(name).map(Arc::clone)
    }
}
