//! In-process tables and the registry that owns them.
//!
//! # Thread Safety
//!
//! Each [`MemoryTable`] guards its entries with a `parking_lot::RwLock`, so
//! every single-key read or write is atomic. The registry guards its name map
//! the same way and only takes the write lock when a name is seen for the
//! first time.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::table::{Table, TableProvider};
use crate::value::TableValue;

/// A named in-memory table.
#[derive(Debug)]
pub struct MemoryTable {
    name: String,
    entries: RwLock<HashMap<String, TableValue>>,
}

impl MemoryTable {
    /// Create an empty table.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys holding a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing has been published yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Copy of every entry, ordered by key.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, TableValue> {
        self.entries
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Drop a single key. Returns the value it held.
    pub fn remove(&self, key: &str) -> Option<TableValue> {
        self.entries.write().remove(key)
    }
}

impl Table for MemoryTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_value(&self, key: &str) -> Option<TableValue> {
        self.entries.read().get(key).cloned()
    }

    fn put_value(&self, key: &str, value: TableValue) {
        self.entries.write().insert(key.to_string(), value);
    }

    fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }
}

/// Registry of [`MemoryTable`]s keyed by name.
///
/// Lookups create the table when the name is unknown, so resolution never
/// fails. Tables live as long as the registry; handles hold `Arc`s and never
/// release the table themselves.
#[derive(Debug, Default)]
pub struct MemoryTableRegistry {
    tables: RwLock<HashMap<String, Arc<MemoryTable>>>,
}

impl MemoryTableRegistry {
    /// Create an empty, isolated registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide default registry.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<MemoryTableRegistry> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// Concrete table registered under `name`, created on first lookup.
    pub fn memory_table(&self, name: &str) -> Arc<MemoryTable> {
        if let Some(table) = self.tables.read().get(name) {
            return Arc::clone(table);
        }

        let mut tables = self.tables.write();
        let table = tables.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!(table = name, "Creating table on first lookup");
            Arc::new(MemoryTable::new(name))
        });
        Arc::clone(table)
    }

    /// Returns `true` if `name` has been looked up before.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tables.read().contains_key(name)
    }

    /// Names of every registered table, sorted.
    #[must_use]
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    /// Returns `true` if no table has been looked up yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }
}

impl TableProvider for MemoryTableRegistry {
    fn table(&self, name: &str) -> Arc<dyn Table> {
        self.memory_table(name)
    }
}
