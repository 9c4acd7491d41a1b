//! An owning, unbalanced BST. Nothing rebalances on insert; a balanced shape is only produced by
//! flattening the tree into [`Slots`] and rebuilding it from them.
//!
//! # Examples
//!
//! ```
//! use bintree::{Slots, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.retrieve(&1), None);
//!
//! tree.insert(1).unwrap();
//! assert_eq!(tree.retrieve(&1), Some(&1));
//!
//! // Duplicates are handed back.
//! assert_eq!(tree.insert(1), Err(1));
//!
//! // Inserting in ascending order builds a stick...
//! tree.insert(2).unwrap();
//! tree.insert(3).unwrap();
//! assert_eq!(tree.height(&1), 3);
//!
//! // ...until it is flattened and rebuilt.
//! let mut slots: Slots<i32> = Slots::new();
//! tree.to_slots(&mut slots).unwrap();
//! tree.from_slots(&mut slots).unwrap();
//! assert_eq!(tree.height(&2), 2);
//! assert_eq!(tree.to_string(), "1 2 3 \n");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, instrument, trace};

use crate::{Slots, TreeError};

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree owning its elements. This can be used for inserting and retrieving
/// elements, asking for the height of the subtree holding an element, and moving every element
/// out to (and back in from) a fixed-capacity [`Slots`] sequence.
///
/// Two trees are equal (`==`) only when they have the same shape and equal elements in every
/// position. The same elements arranged differently are not equal.
#[derive(PartialEq, Eq)]
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.make_empty();
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.make_empty();
        self.root = source.root.clone();
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the elements in the tree.
    pub fn len(&self) -> usize {
        self.root.as_deref().map_or(0, Node::len)
    }

    /// Drops every node and every element in the tree, children before parents. Calling this
    /// on an empty tree does nothing.
    #[instrument(level = "trace", skip_all)]
    pub fn make_empty(&mut self) {
        Node::clear(&mut self.root);
    }

    /// Inserts `element` at its sorted position. If the tree already holds an element equal to
    /// it, the tree is left alone and `element` is handed back in the `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(String::from("a")), Ok(()));
    /// assert_eq!(tree.insert(String::from("a")), Err(String::from("a")));
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, element: T) -> Result<(), T>
    where
        T: Ord,
    {
        let result = match self.root.as_deref_mut() {
            Some(root) => root.insert(element),
            None => {
                self.root = Some(Node::new_boxed(element));
                Ok(())
            }
        };

        if result.is_err() {
            trace!("rejected duplicate element");
        }
        result
    }

    /// Potentially finds the element in this tree equal to `target`. If no element is equal,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).unwrap();
    ///
    /// assert_eq!(tree.retrieve(&1), Some(&1));
    /// assert_eq!(tree.retrieve(&42), None);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn retrieve(&self, target: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.root.as_deref().and_then(|n| n.retrieve(target))
    }

    /// The height of the subtree rooted at the node holding an element equal to `target`, where
    /// a leaf has height 1. Returns 0 if no node holds such an element.
    ///
    /// The search visits every node rather than following the ordering, so it gives the right
    /// answer even for a node that is out of place.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [50, 30, 70, 20, 40] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// assert_eq!(tree.height(&50), 3);
    /// assert_eq!(tree.height(&30), 2);
    /// assert_eq!(tree.height(&20), 1);
    /// assert_eq!(tree.height(&99), 0);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn height(&self, target: &T) -> usize
    where
        T: PartialEq,
    {
        self.root
            .as_deref()
            .and_then(|n| n.find(target))
            .map_or(0, Node::height)
    }

    /// Iterates over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    /// Moves every element, in ascending order, into consecutive slots starting at index 0. The
    /// nodes are dropped along the way but the elements are not; afterwards the tree is empty.
    ///
    /// Nothing moves if the tree holds more elements than `slots` has room for, or if any slot
    /// is already occupied.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Slots, Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// for x in [3, 1, 2] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// let mut small: Slots<i32, 2> = Slots::new();
    /// assert_eq!(
    ///     tree.to_slots(&mut small),
    ///     Err(TreeError::CapacityExceeded { len: 3, capacity: 2 })
    /// );
    ///
    /// let mut slots: Slots<i32> = Slots::new();
    /// tree.to_slots(&mut slots).unwrap();
    /// assert!(tree.is_empty());
    /// assert_eq!(slots.iter().take(4).collect::<Vec<_>>(), [Some(&1), Some(&2), Some(&3), None]);
    /// ```
    #[instrument(level = "trace", skip_all, fields(capacity = C))]
    pub fn to_slots<const C: usize>(&mut self, slots: &mut Slots<T, C>) -> Result<(), TreeError> {
        if !slots.is_empty() {
            return Err(TreeError::SlotsNotEmpty);
        }
        let len = self.len();
        if len > C {
            return Err(TreeError::CapacityExceeded { len, capacity: C });
        }

        let mut next = 0;
        if let Some(root) = self.root.take() {
            root.drain_into(slots.as_mut_slice(), &mut next);
        }

        debug!(moved = next, "flattened tree into slots");
        Ok(())
    }

    /// Builds a height-balanced tree out of the run of occupied slots starting at index 0,
    /// emptying each slot it takes from. Slots after the first empty one are left alone.
    ///
    /// The run must be in strictly ascending order (as [`Tree::to_slots`] leaves it); this is
    /// only checked in debug builds. The tree must be empty beforehand or
    /// [`TreeError::NotEmpty`] is returned and nothing moves.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Slots, Tree};
    ///
    /// let mut slots: Slots<i32> = Slots::try_from_iter(1..=7).unwrap();
    /// let mut tree = Tree::new();
    /// tree.from_slots(&mut slots).unwrap();
    ///
    /// assert!(slots.is_empty());
    /// assert_eq!(tree.height(&4), 3);
    /// assert_eq!(tree.height(&2), 2);
    /// assert_eq!(tree.height(&6), 2);
    /// ```
    #[instrument(level = "trace", skip_all, fields(capacity = C))]
    pub fn from_slots<const C: usize>(&mut self, slots: &mut Slots<T, C>) -> Result<(), TreeError>
    where
        T: Ord,
    {
        if !self.is_empty() {
            return Err(TreeError::NotEmpty);
        }

        let len = slots.occupied();
        let run = &mut slots.as_mut_slice()[..len];
        debug_assert!(
            run.windows(2).all(|pair| pair[0] < pair[1]),
            "slots must hold a strictly ascending run"
        );
        self.root = Node::build(run);

        debug!(len, "rebuilt balanced tree from slots");
        Ok(())
    }

    /// Flattens the tree into a [`Slots`] of the default capacity and rebuilds it, leaving the
    /// same elements in a height-balanced shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 1..=15 {
    ///     tree.insert(x).unwrap();
    /// }
    /// assert_eq!(tree.height(&1), 15);
    ///
    /// tree.rebalance().unwrap();
    /// assert_eq!(tree.height(&8), 4);
    /// ```
    pub fn rebalance(&mut self) -> Result<(), TreeError>
    where
        T: Ord,
    {
        let mut slots: Slots<T> = Slots::new();
        self.to_slots(&mut slots)?;
        self.from_slots(&mut slots)
    }
}

/// An in-order iterator over the elements of a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose element hasn't been yielded yet but whose left subtree has been pushed.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.data)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// A `Node` owns exactly one element and up to two children.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

/// Manual implementation of `Clone` so the bound lands on `T` alone.
impl<T> Clone for Node<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<T> Node<T> {
    fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    fn len(&self) -> usize {
        1 + self.left.as_deref().map_or(0, Self::len) + self.right.as_deref().map_or(0, Self::len)
    }

    /// A node with no children has a height of 1.
    fn height(&self) -> usize {
        let left_height = self.left.as_deref().map_or(0, Self::height);
        let right_height = self.right.as_deref().map_or(0, Self::height);
        left_height.max(right_height) + 1
    }

    /// Drops the subtree at `link` bottom-up, leaving `link` empty.
    fn clear(link: &mut Link<T>) {
        if let Some(mut node) = link.take() {
            Self::clear(&mut node.left);
            Self::clear(&mut node.right);
        }
    }

    fn insert(&mut self, element: T) -> Result<(), T>
    where
        T: Ord,
    {
        let child = match element.cmp(&self.data) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return Err(element),
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(node) => node.insert(element),
            None => {
                *child = Some(Self::new_boxed(element));
                Ok(())
            }
        }
    }

    fn retrieve(&self, target: &T) -> Option<&T>
    where
        T: Ord,
    {
        match target.cmp(&self.data) {
            Ordering::Less => self.left.as_deref().and_then(|n| n.retrieve(target)),
            Ordering::Equal => Some(&self.data),
            Ordering::Greater => self.right.as_deref().and_then(|n| n.retrieve(target)),
        }
    }

    /// Pre-order search for a node holding `target` that ignores the ordering of the tree.
    fn find(&self, target: &T) -> Option<&Self>
    where
        T: PartialEq,
    {
        if self.data == *target {
            return Some(self);
        }

        self.left
            .as_deref()
            .and_then(|n| n.find(target))
            .or_else(|| self.right.as_deref().and_then(|n| n.find(target)))
    }

    /// Moves this subtree's elements in order into `out[*next..]`, advancing `next` once per
    /// element. Each node is unpacked before its children are visited, so the `Box` is freed
    /// while its element lives on in `out`.
    ///
    /// ## Panics
    ///
    /// When `out` runs out of room. Callers check the length first.
    fn drain_into(self: Box<Self>, out: &mut [Option<T>], next: &mut usize) {
        let Self { data, left, right } = *self;

        if let Some(left) = left {
            left.drain_into(out, next);
        }
        out[*next] = Some(data);
        *next += 1;
        if let Some(right) = right {
            right.drain_into(out, next);
        }
    }

    /// Builds a balanced subtree from a sorted run of occupied slots, taking the element at the
    /// middle (rounding down) as the root and recursing on either side.
    fn build(run: &mut [Option<T>]) -> Link<T> {
        let (left, rest) = match run.len() {
            0 => return None,
            len => run.split_at_mut((len - 1) / 2),
        };
        let (root, right) = rest.split_first_mut()?;
        let data = root.take()?;

        Some(Box::new(Self {
            data,
            left: Self::build(left),
            right: Self::build(right),
        }))
    }
}
