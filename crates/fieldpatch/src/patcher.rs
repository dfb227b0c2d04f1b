use crate::{error::PatchError, field::FieldPatch};

///
/// Patcher
///
/// Capability shared by both target bindings so a patch set can hold
/// either polymorphically. Implementations memoize success: once a patch
/// has applied, `is_noop` reports true and `apply` returns Ok without
/// touching the target again.
///

pub trait Patcher {
    /// Would applying leave the bound target unchanged?
    fn is_noop(&self) -> bool;

    /// Apply the bound patch at most once.
    fn apply(&mut self) -> Result<(), PatchError>;
}

///
/// Patchable
///
/// Record-level seam: a type that knows how to consume its own patch
/// payload.
///

pub trait Patchable: Sized {
    type Patch;

    /// Merge the patch into self.
    fn apply_patch(&mut self, patch: &Self::Patch) -> Result<(), PatchError>;

    /// Consuming variant of [`Patchable::apply_patch`].
    fn with_patch(mut self, patch: &Self::Patch) -> Result<Self, PatchError> {
        self.apply_patch(patch)?;

        Ok(self)
    }
}

///
/// ValuePatcher
///
/// Binds one patch to one plain target. Exclusive borrow of the target
/// for the patcher's lifetime; the patch itself is an immutable value.
///

pub struct ValuePatcher<'a, T> {
    applied: bool,
    target: &'a mut T,
    patch: FieldPatch<T>,
}

impl<'a, T> ValuePatcher<'a, T> {
    pub fn new(target: &'a mut T, patch: FieldPatch<T>) -> Self {
        Self {
            applied: false,
            target,
            patch,
        }
    }
}

impl<T> Patcher for ValuePatcher<'_, T>
where
    T: Clone + PartialEq,
{
    fn is_noop(&self) -> bool {
        // Target value is read fresh on every call, never cached.
        self.applied || self.patch.is_noop(self.target)
    }

    fn apply(&mut self) -> Result<(), PatchError> {
        if !self.applied {
            self.patch.apply(self.target)?;
            self.applied = true;
        }

        Ok(())
    }
}

///
/// OptionalPatcher
///
/// Binds one patch to one optional target.
///

pub struct OptionalPatcher<'a, T> {
    applied: bool,
    target: &'a mut Option<T>,
    patch: FieldPatch<T>,
}

impl<'a, T> OptionalPatcher<'a, T> {
    pub fn new(target: &'a mut Option<T>, patch: FieldPatch<T>) -> Self {
        Self {
            applied: false,
            target,
            patch,
        }
    }
}

impl<T> Patcher for OptionalPatcher<'_, T>
where
    T: Clone + PartialEq,
{
    fn is_noop(&self) -> bool {
        self.applied || self.patch.is_noop_option(self.target)
    }

    fn apply(&mut self) -> Result<(), PatchError> {
        if !self.applied {
            self.patch.apply_option(self.target)?;
            self.applied = true;
        }

        Ok(())
    }
}

///
/// TESTS
///
