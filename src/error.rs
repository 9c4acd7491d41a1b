use thiserror::Error;

/// Failures reported by the operations that move elements between a [`Tree`][crate::Tree] and
/// a [`Slots`][crate::Slots] sequence.
///
/// A rejected duplicate insert is not one of these: [`Tree::insert`][crate::Tree::insert] hands
/// the element back instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The tree holds more elements than the sequence has slots. Nothing was moved.
    #[error("tree holds {len} elements but only {capacity} slots are available")]
    CapacityExceeded {
        /// Number of elements in the tree.
        len: usize,
        /// Number of slots in the sequence.
        capacity: usize,
    },

    /// A flatten was asked to write into a sequence that already holds elements.
    #[error("output slots already hold elements")]
    SlotsNotEmpty,

    /// A rebuild was asked to fill a tree that still holds elements.
    #[error("cannot rebuild into a tree that still holds elements")]
    NotEmpty,

    /// A slot index past the end of the sequence.
    #[error("slot {index} is out of bounds for capacity {capacity}")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of slots in the sequence.
        capacity: usize,
    },
}
