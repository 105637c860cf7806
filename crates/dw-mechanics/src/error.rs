//! Error types for the mechanics engine.

use crate::item::ItemKind;

/// Errors that can occur during mechanics operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// An inventory slot was addressed that does not exist.
    #[error("invalid {kind} selection: {index} (carrying {len})")]
    InvalidIndex {
        /// Which inventory was addressed.
        kind: ItemKind,
        /// The zero-based index that was requested.
        index: usize,
        /// How many items the inventory holds.
        len: usize,
    },

    /// A round was resolved after the encounter already ended.
    #[error("combat is already over")]
    CombatOver,
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
