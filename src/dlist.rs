//! A doubly linked list bounded by two sentinel nodes.
//!
//! Nodes live in a [`generational_arena::Arena`] owned by the list and link
//! to each other through arena handles, so `prev`/`next` are only ways to
//! get around, never owners. The head and tail sentinels are allocated once
//! when the list is built and hold no element. Because they are always
//! there, linking and unlinking never has to special case an end of the
//! list, and an empty list is just `head <-> tail`.
//!
//! # Examples
//!
//! ```
//! use classic_collections::dlist::DoublyLinkedList;
//! use classic_collections::Error;
//!
//! let mut list = DoublyLinkedList::new();
//! list.add_last(2);
//! list.add_first(1);
//! list.insert_at(2, 3)?;
//!
//! assert_eq!(list.get_at(1), Ok(&2));
//! assert_eq!(list.index_of(&3), Some(2));
//!
//! assert_eq!(list.remove_first(), Ok(1));
//! assert_eq!(list.remove_at(5), Err(Error::IndexOutOfRange { index: 5, len: 2 }));
//! # Ok::<(), Error>(())
//! ```

use std::fmt;
use std::iter::{FromIterator, FusedIterator};

use generational_arena::{Arena, Index};
use log::trace;

use crate::error::{Error, Result};

struct Node<T> {
    /// `None` only for the two sentinels.
    value: Option<T>,
    prev: Index,
    next: Index,
}

impl<T> Node<T> {
    fn sentinel(prev: Index, next: Index) -> Self {
        Self {
            value: None,
            prev,
            next,
        }
    }
}

/// A doubly linked list with O(1) access to both ends and indexed access
/// that walks in from whichever end is closer.
pub struct DoublyLinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Index,
    tail: Index,
    len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list: just the two sentinels pointing at each other.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` elements before the
    /// node arena has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Arena::with_capacity(capacity + 2);
        let head = nodes.insert_with(|head| Node::sentinel(head, head));
        let tail = nodes.insert(Node::sentinel(head, head));
        nodes[head].next = tail;
        nodes[tail].next = tail;

        Self {
            nodes,
            head,
            tail,
            len: 0,
        }
    }

    /// The number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` at the front of the list.
    pub fn add_first(&mut self, value: T) {
        let first = self.nodes[self.head].next;
        self.link_between(value, self.head, first);
    }

    /// Appends `value` to the back of the list.
    pub fn add_last(&mut self, value: T) {
        let last = self.nodes[self.tail].prev;
        self.link_between(value, last, self.tail);
    }

    /// Inserts `value` so that it ends up at `index`, shifting the element
    /// there (if any) and everything after it one place back.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index > len`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        self.check_position_index(index)?;
        let next = if index == self.len {
            self.tail
        } else {
            self.node_at(index)
        };
        let prev = self.nodes[next].prev;
        self.link_between(value, prev, next);
        Ok(())
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the list is empty.
    pub fn remove_first(&mut self) -> Result<T> {
        let first = self.nodes[self.head].next;
        self.unlink(first).ok_or(Error::EmptyContainer)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the list is empty.
    pub fn remove_last(&mut self) -> Result<T> {
        let last = self.nodes[self.tail].prev;
        self.unlink(last).ok_or(Error::EmptyContainer)
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it one place forward.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_element_index(index)?;
        let node = self.node_at(index);
        Ok(self.unlink(node).expect("A checked index is a real node"))
    }

    /// Drops every element. The sentinels stay and point at each other again.
    pub fn clear(&mut self) {
        trace!("clear: dropping {} elements", self.len);
        let mut cursor = self.nodes[self.head].next;
        while cursor != self.tail {
            let next = self.nodes[cursor].next;
            self.nodes.remove(cursor);
            cursor = next;
        }

        self.nodes[self.head].next = self.tail;
        self.nodes[self.tail].prev = self.head;
        self.len = 0;
    }

    /// The first element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the list is empty.
    pub fn get_first(&self) -> Result<&T> {
        // On an empty list this is the tail sentinel, which holds nothing.
        self.value(self.nodes[self.head].next)
            .ok_or(Error::EmptyContainer)
    }

    /// The last element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the list is empty.
    pub fn get_last(&self) -> Result<&T> {
        self.value(self.nodes[self.tail].prev)
            .ok_or(Error::EmptyContainer)
    }

    /// The element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get_at(&self, index: usize) -> Result<&T> {
        self.check_element_index(index)?;
        Ok(self
            .value(self.node_at(index))
            .expect("A checked index is a real node"))
    }

    /// Whether an element equal to `value` is in the list.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// The position of the first element equal to `value`, scanning from
    /// the front.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == value)
    }

    /// Iterates over the elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.nodes[self.head].next,
            back: self.nodes[self.tail].prev,
            remaining: self.len,
        }
    }

    fn value(&self, node: Index) -> Option<&T> {
        self.nodes[node].value.as_ref()
    }

    /// Finds the node at `index`, walking in from the nearer end. `index`
    /// must be below `len`.
    fn node_at(&self, index: usize) -> Index {
        if index < self.len / 2 {
            let mut node = self.nodes[self.head].next;
            for _ in 0..index {
                node = self.nodes[node].next;
            }
            node
        } else {
            let mut node = self.nodes[self.tail].prev;
            for _ in index + 1..self.len {
                node = self.nodes[node].prev;
            }
            node
        }
    }

    fn link_between(&mut self, value: T, prev: Index, next: Index) {
        let node = self.nodes.insert(Node {
            value: Some(value),
            prev,
            next,
        });
        self.nodes[prev].next = node;
        self.nodes[next].prev = node;
        self.len += 1;

        self.debug_assert_joined(prev, node);
        self.debug_assert_joined(node, next);
    }

    /// Unlinks and frees `node`, returning its element. Sentinels are never
    /// unlinked; asking for one yields `None`.
    fn unlink(&mut self, node: Index) -> Option<T> {
        if node == self.head || node == self.tail {
            return None;
        }
        let Node { value, prev, next } = self.nodes.remove(node)?;
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.len -= 1;

        self.debug_assert_joined(prev, next);
        value
    }

    fn check_position_index(&self, index: usize) -> Result<()> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }
        Ok(())
    }

    fn check_element_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            index,
            len: self.len,
        }
    }

    fn debug_assert_joined(&self, prev: Index, next: Index) {
        if cfg!(debug_assertions) {
            assert_eq!(self.nodes[prev].next, next);
            assert_eq!(self.nodes[next].prev, prev);
        }
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len);
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

/// Borrowing iterator over a [`DoublyLinkedList`], front to back.
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Index,
    back: Index,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = &list.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = &list.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        node.value.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`DoublyLinkedList`], front to back.
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.remove_last().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}
