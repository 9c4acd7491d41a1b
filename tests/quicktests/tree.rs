use bintree::{Slots, Tree};

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and rebalances we have the same elements in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                assert_eq!(bst.insert(x.clone()).is_ok(), set.insert(x.clone()));
            }
            Op::Rebalance => {
                bst.rebalance().unwrap();
            }
        }
    }
}

/// Builds a tree out of `xs`, skipping duplicates.
fn tree_of<T: Ord + Clone>(xs: &[T]) -> Tree<T> {
    let mut tree = Tree::new();
    for x in xs {
        let _ = tree.insert(x.clone());
    }

    tree
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter().all(|x| tree.retrieve(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.retrieve(x).is_none())
}

#[quickcheck]
fn duplicates_are_rejected(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    let accepted = xs.iter().filter(|&&x| tree.insert(x).is_ok()).count();
    let distinct: HashSet<_> = xs.iter().collect();

    accepted == distinct.len() && tree.len() == accepted
}

#[quickcheck]
fn iteration_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let tree = tree_of(&xs);
    let emitted: Vec<_> = tree.iter().collect();

    emitted.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn flatten_rebuild_keeps_contents(xs: Vec<u8>) -> bool {
    let mut tree = tree_of(&xs);
    let before = tree.to_string();
    let n = tree.len();

    let mut slots: Slots<u8, 256> = Slots::new();
    tree.to_slots(&mut slots).unwrap();
    let flattened = tree.is_empty() && slots.occupied() == n;

    tree.from_slots(&mut slots).unwrap();

    flattened && slots.is_empty() && tree.to_string() == before && tree.len() == n
}

#[quickcheck]
fn clone_is_equal_and_independent(xs: Vec<i8>, extra: i8) -> bool {
    let original = tree_of(&xs);
    let mut copy = original.clone();
    let equal_at_first = copy == original;

    let inserted = copy.insert(extra).is_ok();

    equal_at_first
        && (copy != original) == inserted
        && (original.retrieve(&extra).is_some() != inserted)
}

#[quickcheck]
fn height_of_missing_is_zero(xs: Vec<i8>, target: i8) -> bool {
    let tree = tree_of(&xs);

    (tree.height(&target) == 0) == !xs.contains(&target)
}
