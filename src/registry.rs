//! Identity-keyed collection of resource records.
//!
//! The registry is an explicit value owned by the caller and threaded through
//! loading, check execution and reporting. Records keep insertion order so
//! output is reproducible across runs on the same input.

use std::collections::HashMap;

use tracing::debug;

use crate::grade::Grade;
use crate::record::ResourceRecord;
use crate::resource::{ObjectMeta, ResourceDescriptor, ResourceKey, TypeMeta};
use crate::summary::Summary;

#[derive(Debug, Clone, Default)]
pub struct Registry {
    records: Vec<ResourceRecord>,
    index: HashMap<ResourceKey, usize>,
    ignored_checks: Vec<String>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that suppresses `ids` on every resource, in addition to
    /// each resource's own annotation.
    #[must_use]
    pub fn with_ignored_checks<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignored_checks: ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Returns the record for this identity, creating it on first sight.
    ///
    /// The first registration wins: metadata passed for an identity that is
    /// already known is ignored, annotations included.
    pub fn register_or_fetch(
        &mut self,
        type_meta: TypeMeta,
        object_meta: ObjectMeta,
    ) -> &mut ResourceRecord {
        let key = ResourceKey::new(&type_meta, &object_meta);

        if let Some(&idx) = self.index.get(&key) {
            debug!(resource = %key, "resource already registered, keeping first metadata");
            return &mut self.records[idx];
        }

        let mut record = ResourceRecord::new(type_meta, object_meta);
        record.suppress(&self.ignored_checks);
        debug!(resource = %key, suppressed = ?record.suppressed(), "registered resource");

        let idx = self.records.len();
        self.records.push(record);
        self.index.insert(key, idx);
        &mut self.records[idx]
    }

    /// Convenience for loaders that decode whole documents.
    pub fn register_descriptor(&mut self, descriptor: &ResourceDescriptor) -> &mut ResourceRecord {
        self.register_or_fetch(descriptor.type_meta.clone(), descriptor.metadata.clone())
    }

    #[must_use]
    pub fn get(&self, key: &ResourceKey) -> Option<&ResourceRecord> {
        self.index.get(key).map(|&idx| &self.records[idx])
    }

    pub fn get_mut(&mut self, key: &ResourceKey) -> Option<&mut ResourceRecord> {
        match self.index.get(key) {
            Some(&idx) => Some(&mut self.records[idx]),
            None => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in registration order.
    #[must_use]
    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    /// Mutable access to every record, in registration order.
    ///
    /// Records can gain outcomes but cannot be moved, so the identity index
    /// stays valid.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ResourceRecord> {
        self.records.iter_mut()
    }

    pub(crate) fn records_mut(&mut self) -> &mut [ResourceRecord] {
        &mut self.records
    }

    /// Run-wide suppressions applied at registration.
    #[must_use]
    pub fn ignored_checks(&self) -> &[String] {
        &self.ignored_checks
    }

    /// True if any outcome on any resource is at or below `threshold`.
    #[must_use]
    pub fn any_at_or_below(&self, threshold: Grade) -> bool {
        self.records.iter().any(|r| r.any_at_or_below(threshold))
    }

    /// Worst resource grade in the fleet; `AllOk` when empty.
    #[must_use]
    pub fn grade(&self) -> Grade {
        self.records
            .iter()
            .map(ResourceRecord::grade)
            .min()
            .unwrap_or(Grade::AllOk)
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_records(&self.records)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ResourceRecord;
    type IntoIter = std::slice::Iter<'a, ResourceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
