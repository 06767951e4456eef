//! This crate exposes two classic containers, mostly for educational
//! purposes: an unbalanced Binary Search Tree and a doubly linked list.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores an element and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for an element takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). The tree in
//! [`bst`] never rebalances, so inserting sorted input produces a chain
//! whose height is `O(N)`. BSTs also naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right
//! subtree; [`traversal`] has that order and three others.
//!
//! ## Doubly Linked List
//!
//! [`dlist`] keeps its elements in a chain of nodes that each know their
//! neighbour on both sides. Two sentinel nodes, which never hold an
//! element, sit at the ends of the chain so every real node always has a
//! neighbour on both sides.
//!
//! ## Errors
//!
//! Operations that can be called in a state where they make no sense
//! (asking an empty container for its first element, indexing past the end)
//! return [`Error`]. Lookups and deletions of missing elements are not
//! errors; they return `None`/`false`.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
pub mod dlist;
mod error;
pub mod traversal;

pub use error::{Error, Result};
