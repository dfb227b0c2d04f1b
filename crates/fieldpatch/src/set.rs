use crate::{error::PatchError, patcher::Patcher};
use std::{
    collections::{BTreeMap, btree_map::Entry},
    fmt::Display,
};

///
/// PatchSet
///
/// Label-keyed collection of patchers with aggregate no-op checks and
/// aggregate application.
///
/// - Labels are unique; a duplicate insert fails without mutating the set.
/// - Entries are kept sorted by label, so aggregate iteration is
///   deterministic.
/// - `apply_all` stops at the first failure: entries before the failing
///   label stay applied (no rollback), entries after it are untouched.
///

pub struct PatchSet<'a, L = String> {
    entries: BTreeMap<L, Box<dyn Patcher + 'a>>,
}

impl<'a, L> PatchSet<'a, L>
where
    L: Ord + Display,
{
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in iteration (sorted) order.
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.entries.keys()
    }

    /// Register a patcher under a label.
    pub fn insert(&mut self, label: L, patcher: impl Patcher + 'a) -> Result<(), PatchError> {
        match self.entries.entry(label) {
            Entry::Occupied(entry) => Err(PatchError::DuplicateLabel {
                label: entry.key().to_string(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(Box::new(patcher));

                Ok(())
            }
        }
    }

    /// Would the patch registered under `label` leave its target unchanged?
    pub fn is_noop(&self, label: &L) -> Result<bool, PatchError> {
        self.entries
            .get(label)
            .map(|patcher| patcher.is_noop())
            .ok_or_else(|| PatchError::NotFound {
                label: label.to_string(),
            })
    }

    /// Apply the patch registered under `label`.
    pub fn apply(&mut self, label: &L) -> Result<(), PatchError> {
        self.entries
            .get_mut(label)
            .ok_or_else(|| PatchError::NotFound {
                label: label.to_string(),
            })?
            .apply()
    }

    /// True iff every entry currently reports no-op.
    #[must_use]
    pub fn is_all_noop(&self) -> bool {
        self.entries.values().all(|patcher| patcher.is_noop())
    }

    /// Apply every entry in label order, stopping at the first failure.
    ///
    /// The failing entry's error is wrapped with its label; prior entries
    /// remain applied.
    pub fn apply_all(&mut self) -> Result<(), PatchError> {
        for (label, patcher) in &mut self.entries {
            patcher
                .apply()
                .map_err(|err| err.with_label(label.to_string()))?;
        }

        Ok(())
    }
}

impl<L> Default for PatchSet<'_, L>
where
    L: Ord + Display,
{
    fn default() -> Self {
        Self::new()
    }
}

///
/// TESTS
///
