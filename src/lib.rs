//! A Binary Search Tree (BST) over ordered values that is balanced on
//! demand, not on every mutation.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Everything else follows from those two rules. Searching takes
//! `O(height)`, where the height of a `Node` is the edge count of the
//! longest path from it down to a leaf (an absent subtree counts as -1, so a
//! leaf has height 0); a `Node`'s depth is the edge count from the root down
//! to it. Careful construction keeps the height at `O(lg N)` for `N` nodes,
//! and visiting the left subtree, then the subtree root, then the right
//! subtree yields the values in sorted order for free.
//!
//! ## Balancing contract
//!
//! A tree is *balanced* when every node's two subtrees differ in height by
//! at most 1. [`Tree::build`] and [`Tree::rebalance`] produce a balanced
//! tree; [`Tree::insert`] and [`Tree::delete`] preserve only the ordering
//! invariants and will skew the tree under a one-sided workload. There is no
//! rotation machinery: [`Tree::rebalance`] discards every node and rebuilds
//! from the sorted values, and [`Tree::is_balanced`] reports whether that is
//! currently needed.
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::build(1..=15);
//! assert!(tree.is_balanced());
//!
//! // One-sided inserts skew the tree...
//! for value in (200..=250).step_by(10) {
//!     tree.insert(value);
//! }
//! assert!(!tree.is_balanced());
//!
//! // ...and an explicit rebuild restores the bound without touching the
//! // contents.
//! let before: Vec<i32> = tree.iter().copied().collect();
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.iter().copied().collect::<Vec<i32>>(), before);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iter;
pub mod print;
pub mod tree;

pub use tree::{Node, Tree};

#[cfg(test)]
mod test;
