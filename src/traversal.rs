//! Lazy traversals over a [`BinarySearchTree`][crate::bst::BinarySearchTree].
//!
//! Every traversal borrows the tree and yields `&T` in its order. None of
//! them recurse, so a degenerate (chain shaped) tree is walked with an
//! explicit stack or queue instead of the call stack.
//!
//! # Examples
//!
//! ```
//! use classic_collections::bst::BinarySearchTree;
//! use classic_collections::traversal::Order;
//!
//! let tree: BinarySearchTree<_> = [2, 1, 3].iter().copied().collect();
//!
//! assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [2, 1, 3]);
//! assert_eq!(tree.render(Order::PostOrder).to_string(), "Post-order: 1 3 2\n");
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use crate::bst::Node;

/// The four classic orders a binary tree can be walked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. Ascending for a BST.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
    /// Breadth first, one depth at a time, left to right.
    LevelOrder,
}

impl Order {
    /// All orders, in the order they are usually listed.
    pub const ALL: [Order; 4] = [
        Order::InOrder,
        Order::PreOrder,
        Order::PostOrder,
        Order::LevelOrder,
    ];

    /// Human readable name used when a traversal is rendered.
    pub fn label(self) -> &'static str {
        match self {
            Order::InOrder => "In-order",
            Order::PreOrder => "Pre-order",
            Order::PostOrder => "Post-order",
            Order::LevelOrder => "Level-order",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// In-order iterator. Keeps the left spine of the unvisited part on a stack.
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Pre-order iterator.
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes first so the left subtree is popped before it.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Post-order iterator.
///
/// A node is pushed twice: once unexpanded, then, when first popped, again
/// as expanded underneath its children. Popping an expanded node yields it.
pub struct PostOrder<'a, T> {
    stack: Vec<(&'a Node<T>, bool)>,
    remaining: usize,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(&node.value);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Level-order (breadth first) iterator backed by a FIFO queue.
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            queue: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// A traversal whose [`Order`] is picked at runtime.
pub enum Traversal<'a, T> {
    /// See [`InOrder`].
    InOrder(InOrder<'a, T>),
    /// See [`PreOrder`].
    PreOrder(PreOrder<'a, T>),
    /// See [`PostOrder`].
    PostOrder(PostOrder<'a, T>),
    /// See [`LevelOrder`].
    LevelOrder(LevelOrder<'a, T>),
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(order: Order, root: Option<&'a Node<T>>, len: usize) -> Self {
        match order {
            Order::InOrder => Self::InOrder(InOrder::new(root, len)),
            Order::PreOrder => Self::PreOrder(PreOrder::new(root, len)),
            Order::PostOrder => Self::PostOrder(PostOrder::new(root, len)),
            Order::LevelOrder => Self::LevelOrder(LevelOrder::new(root, len)),
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::InOrder(it) => it.next(),
            Self::PreOrder(it) => it.next(),
            Self::PostOrder(it) => it.next(),
            Self::LevelOrder(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::InOrder(it) => it.size_hint(),
            Self::PreOrder(it) => it.size_hint(),
            Self::PostOrder(it) => it.size_hint(),
            Self::LevelOrder(it) => it.size_hint(),
        }
    }
}

macro_rules! exact_and_fused {
    ($($iter:ident),*) => {
        $(
            impl<T> ExactSizeIterator for $iter<'_, T> {}
            impl<T> FusedIterator for $iter<'_, T> {}
        )*
    };
}

exact_and_fused!(InOrder, PreOrder, PostOrder, LevelOrder, Traversal);

/// A labelled, printable traversal: `"<label>: "`, the elements separated
/// by single spaces, then a newline. There is no space after the last
/// element.
///
/// Returned by [`BinarySearchTree::render`][crate::bst::BinarySearchTree::render].
/// Nothing is walked until the value is formatted.
pub struct Render<'a, T> {
    order: Order,
    root: Option<&'a Node<T>>,
    len: usize,
}

impl<'a, T> Render<'a, T> {
    pub(crate) fn new(order: Order, root: Option<&'a Node<T>>, len: usize) -> Self {
        Self { order, root, len }
    }

    /// The same line without the trailing newline.
    pub(crate) fn line(&self) -> RenderLine<'_, 'a, T> {
        RenderLine(self)
    }
}

impl<T: fmt::Display> fmt::Display for Render<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.line())
    }
}

pub(crate) struct RenderLine<'r, 'a, T>(&'r Render<'a, T>);

impl<T: fmt::Display> fmt::Display for RenderLine<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render = self.0;
        write!(f, "{}: ", render.order)?;
        write_spaced(
            f,
            Traversal::new(render.order, render.root, render.len),
            |f, value| write!(f, "{}", value),
        )
    }
}

/// Writes each item with `write_item`, separated by single spaces.
pub(crate) fn write_spaced<'a, T: 'a, I, F>(
    f: &mut fmt::Formatter<'_>,
    items: I,
    mut write_item: F,
) -> fmt::Result
where
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write_item(f, item)?;
    }
    Ok(())
}
