//! An unbalanced Binary Search Tree holding unique, totally ordered
//! elements. Every node owns its two children outright, nothing points
//! back up the tree.
//!
//! Descents (`insert`, `contains`, `delete`) walk a cursor down the tree
//! instead of recursing so inserting already sorted data, which degenerates
//! the tree into a chain, can't blow the stack.
//!
//! # Examples
//!
//! ```
//! use classic_collections::bst::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Duplicates are ignored.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting an element hands it back.
//! assert_eq!(tree.delete(&1), Some(1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use log::{info, trace};

use crate::error::{Error, Result};
use crate::traversal::{
    self, InOrder, LevelOrder, Order, PostOrder, PreOrder, Render, Traversal,
};

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree. Elements in a left subtree are strictly smaller
/// than their ancestor and elements in a right subtree strictly greater.
/// No rebalancing ever happens.
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        // Detach children before each node is dropped so dropping never
        // recurses, however deep the tree is.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        let mut root = None;
        {
            // Each entry is a node to copy and the empty link its copy goes in.
            let mut stack: Vec<(&Node<T>, &mut Link<T>)> = Vec::new();
            if let Some(node) = self.root() {
                stack.push((node, &mut root));
            }
            while let Some((source, link)) = stack.pop() {
                let copy = link.insert(Box::new(Node::new(source.value.clone())));
                let Node { left, right, .. } = &mut **copy;
                stack.extend(source.left().map(|node| (node, left)));
                stack.extend(source.right().map(|node| (node, right)));
            }
        }

        Self {
            root,
            len: self.len,
        }
    }
}

impl<T> BinarySearchTree<T> {
    /// Generate a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` unless an equal element is already present. Returns
    /// whether the tree changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let slot = Node::locate(&mut self.root, &value);
        if slot.is_some() {
            trace!("insert: rejected duplicate element");
            return false;
        }

        *slot = Some(Box::new(Node::new(value)));
        self.len += 1;
        true
    }

    /// Whether an element equal to `value` is in the tree. O(height).
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut node = self.root();
        while let Some(n) = node {
            node = match value.cmp(&n.value) {
                Ordering::Less => n.left(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right(),
            };
        }
        false
    }

    /// Removes the element equal to `value` and returns it. If there is no
    /// such element nothing happens and `None` is returned.
    ///
    /// A node with two children takes over the smallest element of its right
    /// subtree, and the node that held it is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::bst::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<_> = [2, 1, 3].iter().copied().collect();
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.to_string(), "BST[1 3]");
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let slot = Node::locate(&mut self.root, value);
        let mut node = slot.take()?;

        let removed = match (node.left.take(), node.right.take()) {
            (Some(left), Some(right)) => {
                trace!("delete: matched node has two children, promoting successor");
                let mut right = Some(right);
                let successor =
                    Node::take_min(&mut right).expect("A non-empty subtree has a minimum");

                if cfg!(debug_assertions) {
                    assert!(left.value < successor);
                    if let Some(right) = &right {
                        assert!(successor < right.value);
                    }
                }

                let removed = mem::replace(&mut node.value, successor);
                node.left = Some(left);
                node.right = right;
                *slot = Some(node);
                removed
            }
            (None, child) | (child, None) => {
                *slot = child;
                node.value
            }
        };

        self.len -= 1;
        Some(removed)
    }

    /// Number of edges on the longest path from the root to a leaf: `-1` for
    /// an empty tree and `0` for a lone root. Visits every node.
    pub fn height(&self) -> isize {
        Node::height(self.root())
    }

    /// The smallest element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when the tree is empty.
    pub fn min(&self) -> Result<&T> {
        let mut node = self.root().ok_or(Error::EmptyContainer)?;
        while let Some(left) = node.left() {
            node = left;
        }
        Ok(&node.value)
    }

    /// The largest element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when the tree is empty.
    pub fn max(&self) -> Result<&T> {
        let mut node = self.root().ok_or(Error::EmptyContainer)?;
        while let Some(right) = node.right() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Elements in ascending order.
    pub fn inorder(&self) -> InOrder<'_, T> {
        InOrder::new(self.root(), self.len)
    }

    /// Each element before the elements of its subtrees.
    pub fn preorder(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root(), self.len)
    }

    /// Each element after the elements of its subtrees.
    pub fn postorder(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root(), self.len)
    }

    /// Elements breadth first, shallowest level first.
    pub fn levelorder(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root(), self.len)
    }

    /// Walks the tree in the given order.
    pub fn traverse(&self, order: Order) -> Traversal<'_, T> {
        Traversal::new(order, self.root(), self.len)
    }

    /// A printable, labelled line for the given traversal, e.g.
    /// `"In-order: 1 2 3\n"`.
    pub fn render(&self, order: Order) -> Render<'_, T> {
        Render::new(order, self.root(), self.len)
    }

    /// Emits the rendered traversal (without the newline) at `info` level.
    pub fn log_traversal(&self, order: Order)
    where
        T: fmt::Display,
    {
        info!("{}", self.render(order).line());
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BST[")?;
        traversal::write_spaced(f, self, |f, value| write!(f, "{}", value))?;
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BST[")?;
        traversal::write_spaced(f, self, |f, value| write!(f, "{:?}", value))?;
        f.write_str("]")
    }
}

pub(crate) struct Node<T> {
    pub(crate) value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Follows `value` down from `link` and returns either the link holding
    /// an equal element or the empty link where it would be inserted.
    fn locate<'a>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T>
    where
        T: Ord,
    {
        loop {
            match link.as_ref().map(|node| value.cmp(&node.value)) {
                None | Some(Ordering::Equal) => return link,
                Some(Ordering::Less) => {
                    link = &mut link.as_mut().expect("Ordering implies a node").left;
                }
                Some(Ordering::Greater) => {
                    link = &mut link.as_mut().expect("Ordering implies a node").right;
                }
            }
        }
    }

    /// Height of the subtree rooted at `root`, `-1` when there is none.
    /// Walks with an explicit stack rather than recursing.
    fn height(root: Option<&Self>) -> isize {
        let mut height = -1;
        let mut stack: Vec<(&Self, isize)> = root.map(|n| (n, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Unlinks the leftmost node under `link`, splicing its right subtree
    /// into its place, and returns its element.
    fn take_min(mut link: &mut Link<T>) -> Option<T> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }
        let node = link.take()?;
        let Node { value, right, .. } = *node;
        *link = right;
        Some(value)
    }
}
