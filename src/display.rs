//! Text renderings of a [`Tree`].
//!
//! `Display` writes the elements in ascending order, each followed by a space, then a newline.
//! [`Tree::sideways`] draws the shape of the tree for debugging.

use std::fmt;

use crate::tree::{Node, Tree};

/// How far each level of [`Sideways`] is indented.
const INDENT: &str = "    ";

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self {
            write!(f, "{} ", element)?;
        }
        writeln!(f)
    }
}

impl<T> Tree<T> {
    /// Renders the tree rotated a quarter turn counter-clockwise. Each element gets its own
    /// line, indented four spaces per level with the root one level in. Right children print
    /// above their parent and left children below. The format is meant for people, not parsers.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [2, 1, 3] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// assert_eq!(
    ///     tree.sideways().to_string(),
    ///     "        3\n    2\n        1\n"
    /// );
    /// ```
    pub fn sideways(&self) -> Sideways<'_, T> {
        Sideways { tree: self }
    }
}

/// A [`Display`][fmt::Display] adapter drawing the shape of a [`Tree`], created by
/// [`Tree::sideways`].
pub struct Sideways<'a, T> {
    tree: &'a Tree<T>,
}

impl<T> fmt::Display for Sideways<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tree.root.as_deref() {
            Some(root) => sideways(root, 1, f),
            None => Ok(()),
        }
    }
}

fn sideways<T>(node: &Node<T>, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: fmt::Display,
{
    if let Some(right) = node.right.as_deref() {
        sideways(right, depth + 1, f)?;
    }
    writeln!(f, "{}{}", INDENT.repeat(depth), node.data)?;
    if let Some(left) = node.left.as_deref() {
        sideways(left, depth + 1, f)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{Slots, Tree};

    fn tree_of(xs: &[i32]) -> Tree<i32> {
        let mut tree = Tree::new();
        for &x in xs {
            tree.insert(x).unwrap();
        }

        tree
    }

    #[test]
    fn in_order_emission() {
        let tree = tree_of(&[50, 30, 70, 20, 40]);

        assert_eq!(tree.to_string(), "20 30 40 50 70 \n");
        // Printing doesn't consume or reorder anything.
        assert_eq!(tree.to_string(), "20 30 40 50 70 \n");
    }

    #[test]
    fn empty_tree_emits_newline() {
        assert_eq!(Tree::<i32>::new().to_string(), "\n");
        assert_eq!(Tree::<i32>::new().sideways().to_string(), "");
    }

    #[test]
    fn emission_survives_rebuild() {
        let mut tree = tree_of(&[50, 30, 70, 20, 40]);
        let before = tree.to_string();

        let mut slots: Slots<i32> = Slots::new();
        tree.to_slots(&mut slots).unwrap();
        assert_eq!(tree.to_string(), "\n");

        tree.from_slots(&mut slots).unwrap();
        assert_eq!(tree.to_string(), before);
    }

    #[test]
    fn sideways_stick() {
        let tree = tree_of(&[1, 2, 3]);

        assert_eq!(
            tree.sideways().to_string(),
            "            3\n        2\n    1\n"
        );
    }

    #[test]
    fn emission_of_strings() {
        let mut tree = Tree::new();
        for word in ["pear", "apple", "fig"] {
            tree.insert(word.to_string()).unwrap();
        }

        assert_eq!(tree.to_string(), "apple fig pear \n");
    }
}
