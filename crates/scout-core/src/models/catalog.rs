use std::collections::HashMap;

use super::ModelRecord;
use crate::errors::{CatalogError, ScoutResult};

/// Ordered collection of model records with a name index.
///
/// Order is the loader's enumeration order and is never re-sorted: the
/// dense backend aligns embedding rows to it positionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<ModelRecord>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names.
    pub fn new(records: Vec<ModelRecord>) -> ScoutResult<Self> {
        let mut by_name = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if by_name.insert(record.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateModel {
                    name: record.name.clone(),
                }
                .into());
            }
        }
        Ok(Self { records, by_name })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ModelRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModelRecord> {
        self.records.iter()
    }

    /// Look up a record by model name.
    pub fn get(&self, name: &str) -> Option<&ModelRecord> {
        self.by_name.get(name).map(|&i| &self.records[i])
    }

    /// Record at a catalog position.
    pub fn at(&self, position: usize) -> Option<&ModelRecord> {
        self.records.get(position)
    }

    /// Position of a model name in catalog order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Model names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Descriptions in catalog order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.description.as_str())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ModelRecord;
    type IntoIter = std::slice::Iter<'a, ModelRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
