//! An owning Binary Search Tree (BST) that is balanced on demand rather than on every insert.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). A [`Tree`] here never rebalances itself, so
//! inserting sorted input builds a tree as tall as it is long. To get back to `O(lg N)` the
//! tree can be flattened into a sorted [`Slots`] sequence and rebuilt from it, which always
//! produces a height-balanced shape. BSTs also naturally support sorted iteration by visiting
//! the left subtree, then the subtree root, then the right subtree.
//!
//! Elements must be unique. Inserting an element equal to one already in the tree hands it
//! back to the caller.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod display;
mod error;
pub mod slots;
pub mod tree;


pub use display::Sideways;
pub use error::TreeError;
pub use slots::{Slots, DEFAULT_CAPACITY};
pub use tree::{Iter, Tree};
