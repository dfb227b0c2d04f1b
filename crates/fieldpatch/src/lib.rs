//! Field-level patches: immutable per-field change descriptions, idempotent
//! patchers bound to live targets, and label-keyed patch sets that apply
//! each entry exactly once.

pub mod error;
pub mod field;
pub mod patcher;
pub mod set;

pub use error::PatchError;
pub use field::{FieldPatch, PatchAction};
pub use patcher::{OptionalPatcher, Patchable, Patcher, ValuePatcher};
pub use set::PatchSet;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        field::{FieldPatch, PatchAction},
        patcher::{OptionalPatcher, Patchable, Patcher, ValuePatcher},
        set::PatchSet,
    };
}
