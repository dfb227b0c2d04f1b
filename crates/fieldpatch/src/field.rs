use crate::error::PatchError;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// PatchAction
///
/// The intent carried by a field patch.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
)]
pub enum PatchAction {
    Noop,
    Remove,
    Replace,
}

///
/// FieldPatch
///
/// An immutable description of how one field should change.
///
/// - `Noop` and `Remove` carry no value.
/// - `Replace` normally carries the replacement value. A carried-empty
///   `Replace` stays representable (e.g. after deserialization); it acts
///   as a removal on optional targets and fails on plain ones.
/// - `Remove` is meaningful only for optional targets.
/// - Never mutated after construction; patchers share copies freely.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FieldPatch<T> {
    action: PatchAction,
    carried: Option<T>,
}

impl<T> FieldPatch<T> {
    #[must_use]
    pub const fn noop() -> Self {
        Self {
            action: PatchAction::Noop,
            carried: None,
        }
    }

    /// Meaningful only for optional targets; applying to a plain field fails.
    #[must_use]
    pub const fn removal() -> Self {
        Self {
            action: PatchAction::Remove,
            carried: None,
        }
    }

    #[must_use]
    pub const fn replace(updated: T) -> Self {
        Self {
            action: PatchAction::Replace,
            carried: Some(updated),
        }
    }

    #[must_use]
    pub const fn action(&self) -> PatchAction {
        self.action
    }

    /// Borrow the carried replacement value.
    pub fn carried(&self) -> Result<&T, PatchError> {
        self.carried.as_ref().ok_or(PatchError::EmptyOptional)
    }
}

impl<T> FieldPatch<T>
where
    T: PartialEq,
{
    /// Diff entry point for plain fields.
    #[must_use]
    pub fn diff(old: T, updated: T) -> Self {
        if old == updated {
            Self::noop()
        } else {
            Self::replace(updated)
        }
    }

    /// Diff entry point for optional fields.
    #[must_use]
    pub fn diff_option(old: Option<T>, updated: Option<T>) -> Self {
        match (old, updated) {
            (None, None) => Self::noop(),
            (None, Some(updated)) => Self::replace(updated),
            (Some(_), None) => Self::removal(),
            (Some(old), Some(updated)) => {
                if old == updated {
                    Self::noop()
                } else {
                    Self::replace(updated)
                }
            }
        }
    }

    /// Would applying this patch leave the plain value `current` unchanged?
    ///
    /// `Remove` is vacuously true here: a plain field has no absence state,
    /// so there is nothing a removal could change.
    #[must_use]
    pub fn is_noop(&self, current: &T) -> bool {
        match self.action {
            PatchAction::Noop | PatchAction::Remove => true,
            PatchAction::Replace => self.carried.as_ref() == Some(current),
        }
    }

    /// Would applying this patch leave the optional value `current` unchanged?
    ///
    /// A carried-empty `Replace` against an absent `current` is a no-op:
    /// both sides denote "no value".
    #[must_use]
    pub fn is_noop_option(&self, current: &Option<T>) -> bool {
        match self.action {
            PatchAction::Noop => true,
            PatchAction::Remove => current.is_none(),
            PatchAction::Replace => self.carried == *current,
        }
    }
}

impl<T> FieldPatch<T>
where
    T: Clone,
{
    /// Cloned snapshot of the carried value; never aliases internal state.
    #[must_use]
    pub fn peek(&self) -> Option<T> {
        self.carried.clone()
    }
}

impl<T> FieldPatch<T>
where
    T: Clone + PartialEq,
{
    /// Apply this patch to a plain target in place.
    ///
    /// `Remove` always fails (`UnsupportedOperation`); a carried-empty
    /// `Replace` fails (`InvalidReplacement`). The target is untouched on
    /// every failure path.
    pub fn apply(&self, operand: &mut T) -> Result<(), PatchError> {
        match self.action {
            PatchAction::Noop => Ok(()),
            PatchAction::Remove => Err(PatchError::UnsupportedOperation),
            PatchAction::Replace => match self.carried.as_ref() {
                Some(updated) if updated == operand => Ok(()),
                Some(updated) => {
                    *operand = updated.clone();
                    Ok(())
                }
                None => Err(PatchError::InvalidReplacement),
            },
        }
    }

    /// Apply this patch to an optional target in place.
    ///
    /// Cannot fail: `Remove` on an absent target is already satisfied, and
    /// a carried-empty `Replace` is treated as an implicit removal.
    pub fn apply_option(&self, current: &mut Option<T>) -> Result<(), PatchError> {
        match self.action {
            PatchAction::Noop => {}
            PatchAction::Remove => *current = None,
            PatchAction::Replace => *current = self.carried.clone(),
        }

        Ok(())
    }
}

///
/// TESTS
///
