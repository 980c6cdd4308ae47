use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use splay_tree::splay_tree::NodeRef;
use splay_tree::{Error, SplayTree};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 5_000;

/// Generates values in a range that ensures collisions.
fn value_strategy() -> impl Strategy<Value = i64> {
    -2_000i64..2_000i64
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i64),
    Remove(i64),
    Take(i64),
    Contains(i64),
    First,
    Last,
    RemoveLess(i64),
    RemoveGreater(i64),
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        6 => value_strategy().prop_map(SetOp::Insert),
        3 => value_strategy().prop_map(SetOp::Remove),
        1 => value_strategy().prop_map(SetOp::Take),
        3 => value_strategy().prop_map(SetOp::Contains),
        1 => Just(SetOp::First),
        1 => Just(SetOp::Last),
        1 => value_strategy().prop_map(SetOp::RemoveLess),
        1 => value_strategy().prop_map(SetOp::RemoveGreater),
    ]
}

/// Walks the whole tree through `NodeRef`s, checking that every child points back
/// at its parent and that values strictly increase in order. Returns the node count.
fn check_shape(node: NodeRef<'_, i64>, low: Option<i64>, high: Option<i64>) -> usize {
    let value = *node.value();
    assert!(low.is_none_or(|low| low < value), "{value} is out of order");
    assert!(high.is_none_or(|high| value < high), "{value} is out of order");

    let mut count = 1;
    for (child, low, high) in [
        (node.left(), low, Some(value)),
        (node.right(), Some(value), high),
    ] {
        if let Some(child) = child {
            assert_eq!(child.parent().map(|parent| *parent.value()), Some(value));
            count += check_shape(child, low, high);
        }
    }
    count
}

fn check_tree(tree: &SplayTree<i64>) {
    match tree.root() {
        Some(root) => {
            assert!(root.parent().is_none(), "root has a parent");
            assert_eq!(check_shape(root, None, None), tree.len());
        }
        None => assert_eq!(tree.len(), 0),
    }
}

fn root_value(tree: &SplayTree<i64>) -> Option<i64> {
    tree.root().map(|node| *node.value())
}

// ─── Core operations ─────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both SplayTree and BTreeSet and
    /// asserts identical results at every step.
    #[test]
    fn set_ops_match_btreeset(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut splay: SplayTree<i64> = SplayTree::new();
        let mut model: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match op {
                SetOp::Insert(v) => {
                    prop_assert_eq!(splay.insert(*v), model.insert(*v), "insert({})", v);
                    prop_assert_eq!(root_value(&splay), Some(*v));
                }
                SetOp::Remove(v) => {
                    prop_assert_eq!(splay.remove(v), model.remove(v), "remove({})", v);
                }
                SetOp::Take(v) => {
                    prop_assert_eq!(splay.take(v), model.take(v), "take({})", v);
                }
                SetOp::Contains(v) => {
                    let found = splay.contains(v);
                    prop_assert_eq!(found, model.contains(v), "contains({})", v);
                    if found {
                        prop_assert_eq!(root_value(&splay), Some(*v));
                    }
                }
                SetOp::First => {
                    prop_assert_eq!(splay.first(), model.first(), "first()");
                }
                SetOp::Last => {
                    prop_assert_eq!(splay.last(), model.last(), "last()");
                }
                SetOp::RemoveLess(v) => {
                    let result = splay.remove_less(v);
                    if model.is_empty() {
                        prop_assert_eq!(result.unwrap_err(), Error::EmptyTree);
                    } else {
                        let kept = model.split_off(v);
                        let less = std::mem::replace(&mut model, kept);
                        let split: Vec<i64> = result.unwrap().iter().copied().collect();
                        prop_assert_eq!(split, less.into_iter().collect::<Vec<_>>());
                    }
                }
                SetOp::RemoveGreater(v) => {
                    let result = splay.remove_greater(v);
                    if model.is_empty() {
                        prop_assert_eq!(result.unwrap_err(), Error::EmptyTree);
                    } else {
                        let greater = model.split_off(&(v + 1));
                        let split: Vec<i64> = result.unwrap().iter().copied().collect();
                        prop_assert_eq!(split, greater.into_iter().collect::<Vec<_>>());
                    }
                }
            }
            prop_assert_eq!(splay.len(), model.len());
        }

        check_tree(&splay);
        prop_assert!(splay.iter().eq(model.iter()));
    }

    /// Ascending and descending iteration visit the same values as BTreeSet.
    #[test]
    fn iter_matches_btreeset(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let splay: SplayTree<i64> = values.iter().copied().collect();
        let model: BTreeSet<i64> = values.iter().copied().collect();

        prop_assert_eq!(splay.iter().len(), model.len());
        prop_assert!(splay.iter().eq(model.iter()));
        prop_assert!(splay.iter_rev().eq(model.iter().rev()));
    }

    /// Every access leaves the parent links consistent.
    #[test]
    fn links_stay_consistent(ops in proptest::collection::vec(set_op_strategy(), 500)) {
        let mut splay: SplayTree<i64> = SplayTree::new();
        for op in ops {
            match op {
                SetOp::Insert(v) => { splay.insert(v); }
                SetOp::Remove(v) | SetOp::Take(v) => { splay.remove(&v); }
                SetOp::Contains(v) => { splay.contains(&v); }
                SetOp::First | SetOp::Last => {}
                SetOp::RemoveLess(v) => {
                    if let Ok(less) = splay.remove_less(&v) {
                        check_tree(&less);
                    }
                }
                SetOp::RemoveGreater(v) => {
                    if let Ok(greater) = splay.remove_greater(&v) {
                        check_tree(&greater);
                    }
                }
            }
            check_tree(&splay);
        }
    }

    /// Splitting partitions the values with the pivot kept in the source.
    #[test]
    fn split_partitions_around_pivot(
        values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE),
        pivot in value_strategy(),
    ) {
        let original: BTreeSet<i64> = values.iter().copied().collect();

        let mut high: SplayTree<i64> = values.iter().copied().collect();
        let low = high.remove_less(&pivot).unwrap();
        prop_assert!(low.iter().all(|&v| v < pivot));
        prop_assert!(high.iter().all(|&v| v >= pivot));
        prop_assert_eq!(low.len() + high.len(), original.len());

        let mut low: SplayTree<i64> = values.iter().copied().collect();
        let high = low.remove_greater(&pivot).unwrap();
        prop_assert!(low.iter().all(|&v| v <= pivot));
        prop_assert!(high.iter().all(|&v| v > pivot));
        prop_assert!(low.iter().chain(high.iter()).eq(original.iter()));
    }

    /// Inserting a set of values and removing them all leaves an empty tree.
    #[test]
    fn insert_then_remove_all_is_empty(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let mut splay: SplayTree<i64> = values.iter().copied().collect();
        for v in &values {
            splay.remove(v);
        }
        prop_assert!(splay.is_empty());
        prop_assert!(splay.root().is_none());
        prop_assert_eq!(splay.iter().next(), None);
        prop_assert_eq!(splay.iter_rev().next(), None);
    }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn contains_then_split_scenario() {
    let mut tree = SplayTree::new();
    for v in [10, 5, 15, 3, 7] {
        tree.insert(v);
    }
    assert!(tree.contains(&7));
    assert_eq!(root_value(&tree), Some(7));

    let less = tree.remove_less(&7).unwrap();
    assert_eq!(less.iter().copied().collect::<Vec<_>>(), [3, 5]);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [7, 10, 15]);
    check_tree(&less);
    check_tree(&tree);
}

#[test]
fn missing_value_still_splays() {
    let mut tree = SplayTree::from([10, 20, 30]);
    tree.contains(&10);
    assert!(!tree.contains(&25));
    let root = root_value(&tree).unwrap();
    assert!(root == 20 || root == 30, "root {root} is not a neighbour of 25");
}

/// Ascending inserts leave `n` on top of a left-leaning path `n-1, ..., 1`.
fn left_path(n: i64) -> SplayTree<i64> {
    (1..=n).collect()
}

#[test]
fn removing_a_leaf_splays_its_parent() {
    // 1 and 3 hang below 2.
    let mut tree = SplayTree::from([1, 3, 2]);
    assert!(tree.remove(&3));
    assert_eq!(root_value(&tree), Some(2));
    check_tree(&tree);
}

#[test]
fn removing_a_one_child_node_splays_its_parent() {
    let mut tree = left_path(5);
    assert!(tree.remove(&3));
    assert_eq!(root_value(&tree), Some(4));
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 4, 5]);
    check_tree(&tree);
}

#[test]
fn removing_a_one_child_root_promotes_the_child() {
    let mut tree = left_path(5);
    assert!(tree.remove(&5));
    assert_eq!(root_value(&tree), Some(4));
    assert!(tree.remove(&4));
    assert_eq!(root_value(&tree), Some(3));
    check_tree(&tree);
}

#[test]
fn removing_a_two_child_node_splays_the_predecessors_parent() {
    // Shape: 7 at the root, 3 (right child 5) on its left, 15 (left child 10) on
    // its right. The predecessor 5 is excised from below 3.
    let mut tree = SplayTree::from([10, 5, 15, 3, 7]);
    assert_eq!(root_value(&tree), Some(7));
    assert!(tree.remove(&7));
    assert_eq!(root_value(&tree), Some(3));
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 5, 10, 15]);
    check_tree(&tree);
}

#[test]
fn removing_a_two_child_node_whose_left_child_is_the_predecessor() {
    // Shape: 2 at the root with children 1 and 3. The predecessor's parent is the
    // removed node itself, which now holds 1.
    let mut tree = SplayTree::from([1, 3, 2]);
    assert!(tree.remove(&2));
    assert_eq!(root_value(&tree), Some(1));
    assert_eq!(tree.root().and_then(|root| root.right()).map(|node| *node.value()), Some(3));
    check_tree(&tree);
}

#[test]
fn removing_a_missing_value_splays_the_last_node_reached() {
    // From the root 7 the search for 12 goes 7, 15, 10 and stops below 10.
    let mut tree = SplayTree::from([10, 5, 15, 3, 7]);
    assert!(!tree.remove(&12));
    assert_eq!(root_value(&tree), Some(10));
    assert_eq!(tree.take(&0), None);
    assert_eq!(root_value(&tree), Some(3));
    check_tree(&tree);
}

#[test]
fn splitting_everything_off_releases_the_source_storage() {
    let mut tree: SplayTree<i64> = (0..10_000).collect();
    let capacity = tree.capacity();
    let less = tree.remove_less(&10_000).unwrap();
    assert_eq!(less.len(), 10_000);
    assert_eq!(less.capacity(), capacity);
    assert!(tree.is_empty());
    assert_eq!(tree.capacity(), 0);
}

#[test]
fn clone_is_independent() {
    let mut tree = SplayTree::from([1, 2, 3]);
    let copy = tree.clone();
    tree.remove(&2);
    assert_eq!(copy.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3]);
}

#[test]
fn borrowed_lookups() {
    let mut tree: SplayTree<String> = ["pear", "apple", "fig"].into_iter().map(String::from).collect();
    assert!(tree.contains("fig"));
    assert!(tree.remove("apple"));
    assert_eq!(tree.first().map(String::as_str), Some("fig"));
}
