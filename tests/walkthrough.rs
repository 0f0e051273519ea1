use itertools::Itertools;
use std::collections::HashMap;
use traversals::{
    AdjacencyGraph, BinaryArenaTree, OrderedTreeIterator, SequenceIterator, Side, TraversalError, Traversing,
};

fn graph() -> AdjacencyGraph<i32> {
    let mut adjacency = HashMap::new();
    adjacency.insert(1, vec![2, 3]);
    adjacency.insert(2, vec![4, 5]);
    adjacency.insert(3, vec![6, 7]);
    for leaf in 4..=7 {
        adjacency.insert(leaf, vec![]);
    }
    adjacency.into()
}

fn tree() -> BinaryArenaTree<i32> {
    let mut tree = BinaryArenaTree::new();
    let root = tree.set_root(1);
    let left = tree.add(2, root, Side::Left).unwrap();
    tree.add(3, root, Side::Right).unwrap();
    tree.add(4, left, Side::Left).unwrap();
    tree.add(5, left, Side::Right).unwrap();
    tree
}

/// Drives a traversal the way a caller would, checking the contract on every step
fn walk(traversal: &mut dyn Traversing<i32>) -> Vec<i32> {
    let mut values = vec![];
    while traversal.has_next() {
        assert!(traversal.has_next());
        values.push(traversal.try_next().unwrap());
    }
    assert!(!traversal.has_next());
    assert_eq!(traversal.try_next(), Err(TraversalError::Exhausted));
    assert!(!traversal.has_next());
    values
}

#[test_log::test]
fn test_dynamic_dispatch() {
    let graph = graph();
    let tree = tree();
    let array = [10, 20, 30, 40, 50];

    let mut traversals: Vec<(Box<dyn Traversing<i32> + '_>, Vec<i32>)> = vec![
        (Box::new(graph.iter_breadth(1)), vec![1, 2, 3, 4, 5, 6, 7]),
        (
            Box::new(OrderedTreeIterator::new(&tree, tree.root()).unwrap()),
            vec![4, 2, 5, 1, 3],
        ),
        (Box::new(SequenceIterator::new(&array)), vec![10, 20, 30, 40, 50]),
    ];

    for (traversal, expected) in traversals.iter_mut() {
        assert_eq!(walk(traversal.as_mut()), *expected);
    }
}

#[test_log::test]
fn test_std_iterators() {
    let graph = graph();
    let tree = tree();
    let array = [10, 20, 30, 40, 50];

    assert_eq!(graph.iter_breadth(1).collect_vec(), &[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.iter_in_order().collect_vec(), &[4, 2, 5, 1, 3]);
    assert_eq!(SequenceIterator::new(&array).collect_vec(), array);

    // Fused: nothing comes back after the first `None`
    let mut iter = graph.iter_breadth(7);
    assert_eq!(iter.next(), Some(7));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_empty_inputs() {
    let empty_tree = BinaryArenaTree::<i32>::new();
    let empty_array: Vec<i32> = vec![];

    assert_eq!(walk(&mut empty_tree.iter_in_order()), Vec::<i32>::new());
    assert_eq!(walk(&mut SequenceIterator::new(&empty_array)), Vec::<i32>::new());
    assert_eq!(walk(&mut graph().iter_breadth(100)), vec![100]);
}

#[test]
fn test_drain() {
    let tree = tree();
    let mut iter = tree.iter_in_order();
    assert_eq!(iter.try_next(), Ok(4));
    assert_eq!(iter.drain(), Ok(vec![2, 5, 1, 3]));
    assert_eq!(iter.drain(), Ok(vec![]));
}
