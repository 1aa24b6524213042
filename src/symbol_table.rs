//! Symbol interning.
//!
//! Maps symbol names to small integers so symbols can be compared by number
//! instead of by string.

use crate::error::{Error, Result};
use indexmap::IndexSet;

/// Number of names a default table holds, `nil` included
pub const DEFAULT_CAPACITY: usize = 1000;

/// Bounded table of interned symbol names
///
/// Slot 0 always holds `nil`. Ids are assigned in insertion order and never
/// change.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    names: IndexSet<String>,
    capacity: usize,
}

impl SymbolTable {
    /// Creates a table with [`DEFAULT_CAPACITY`] slots
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a table holding at most `capacity` names (at least one, for `nil`)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut names = IndexSet::with_capacity(capacity.min(DEFAULT_CAPACITY));
        names.insert("nil".to_string());
        SymbolTable { names, capacity }
    }

    /// Looks up the id of `name` without adding it
    pub fn find(&self, name: &str) -> Option<usize> {
        self.names.get_index_of(name)
    }

    /// Looks up the id of `name`, adding it if absent
    pub fn find_or_add(&mut self, name: &str) -> Result<usize> {
        if let Some(id) = self.find(name) {
            return Ok(id);
        }
        if self.names.len() >= self.capacity {
            return Err(Error::SymbolTableOverflow {
                capacity: self.capacity,
            });
        }
        let (id, _) = self.names.insert_full(name.to_string());
        Ok(id)
    }

    /// Name interned under `id`
    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get_index(id).map(String::as_str)
    }

    /// Number of interned names, `nil` included
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: `nil` is present from construction
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Maximum number of names
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
