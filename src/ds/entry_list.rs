//! Doubly-linked list backed by an [`Arena`].
//!
//! Nodes live in the arena and link to each other by [`EntryId`], giving
//! stable handles and O(1) detach/reattach without pointer chasing:
//!
//! ```text
//!   arena (Arena<Node<T>>)
//!   ┌─────────┬────────────────────────────────────────────┐
//!   │ EntryId │ Node { value, prev, next }                 │
//!   ├─────────┼────────────────────────────────────────────┤
//!   │ id_1    │ { value: A, prev: None, next: Some(id_2) } │
//!   │ id_2    │ { value: B, prev: Some(id_1), next: id_3 } │
//!   │ id_3    │ { value: C, prev: Some(id_2), next: None } │
//!   └─────────┴────────────────────────────────────────────┘
//!
//!   head ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── tail
//! ```
//!
//! The FIFO and LRU caches keep their `(key, value)` entries in one of these
//! lists and index into it with a key -> `EntryId` hash map. All position
//! changes (`move_to_front`, `remove`, pops at either end) are O(1).
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use crate::ds::arena::{Arena, EntryId};

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<EntryId>,
    next: Option<EntryId>,
}

/// Arena-backed doubly-linked list with stable [`EntryId`] handles.
#[derive(Debug)]
pub struct EntryList<T> {
    arena: Arena<Node<T>>,
    head: Option<EntryId>,
    tail: Option<EntryId>,
}

impl<T> EntryList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if `id` is currently a node in this list.
    pub fn contains(&self, id: EntryId) -> bool {
        self.arena.contains(id)
    }

    /// Returns the value at the front of the list.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Returns the value at the back of the list.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Returns the `EntryId` at the front of the list.
    pub fn front_id(&self) -> Option<EntryId> {
        self.head
    }

    /// Returns the `EntryId` at the back of the list.
    pub fn back_id(&self) -> Option<EntryId> {
        self.tail
    }

    /// Returns the value for a node id, if present.
    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to a node value, if present.
    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Inserts a new node at the front and returns its `EntryId`.
    pub fn push_front(&mut self, value: T) -> EntryId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: None,
        });
        self.attach_front(id);
        id
    }

    /// Inserts a new node at the back and returns its `EntryId`.
    pub fn push_back(&mut self, value: T) -> EntryId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: None,
        });
        self.attach_back(id);
        id
    }

    /// Removes and returns the front value.
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.head?;
        self.remove(id)
    }

    /// Removes and returns the back value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Removes the node `id` from the list and returns its value.
    pub fn remove(&mut self, id: EntryId) -> Option<T> {
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Moves an existing node to the front; returns `false` if `id` is not
    /// present.
    pub fn move_to_front(&mut self, id: EntryId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if Some(id) == self.head {
            return true;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    /// Clears the list and frees all nodes. Capacity is retained.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns an iterator of values from front to back.
    pub fn iter(&self) -> EntryListIter<'_, T> {
        EntryListIter {
            list: self,
            current: self.head,
        }
    }

    fn detach(&mut self, id: EntryId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.arena.get_mut(prev_id) {
                    prev_node.next = next;
                }
            },
            None => self.head = next,
        }

        match next {
            Some(next_id) => {
                if let Some(next_node) = self.arena.get_mut(next_id) {
                    next_node.prev = prev;
                }
            },
            None => self.tail = prev,
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = None;
        }

        Some(())
    }

    fn attach_front(&mut self, id: EntryId) {
        let old_head = self.head;
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = old_head;
        } else {
            return;
        }
        match old_head {
            Some(head_id) => {
                if let Some(head_node) = self.arena.get_mut(head_id) {
                    head_node.prev = Some(id);
                }
            },
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    fn attach_back(&mut self, id: EntryId) {
        let old_tail = self.tail;
        if let Some(node) = self.arena.get_mut(id) {
            node.next = None;
            node.prev = old_tail;
        } else {
            return;
        }
        match old_tail {
            Some(tail_id) => {
                if let Some(tail_node) = self.arena.get_mut(tail_id) {
                    tail_node.next = Some(id);
                }
            },
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len(), 0);
            return;
        }

        let mut count = 0usize;
        let mut current = self.head;
        let mut prev = None;

        while let Some(id) = current {
            let node = self.arena.get(id).expect("list node missing");
            assert_eq!(node.prev, prev);
            prev = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len(), "cycle detected in list");
        }

        assert_eq!(self.tail, prev);
        assert_eq!(count, self.len());
    }
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over list values from front to back.
pub struct EntryListIter<'a, T> {
    list: &'a EntryList<T>,
    current: Option<EntryId>,
}

impl<'a, T> Iterator for EntryListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_both_ends() {
        let mut list = EntryList::new();
        let a = list.push_front("a");
        list.push_back("b");
        list.push_back("c");

        assert_eq!(list.front(), Some(&"a"));
        assert_eq!(list.back(), Some(&"c"));
        assert_eq!(list.len(), 3);

        assert_eq!(list.pop_front(), Some("a"));
        assert_eq!(list.pop_back(), Some("c"));
        assert_eq!(list.pop_back(), Some("b"));
        assert!(list.is_empty());
        assert!(!list.contains(a));
        list.debug_validate_invariants();
    }

    #[test]
    fn move_to_front_reorders() {
        let mut list = EntryList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert!(list.move_to_front(c));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["c", "a", "b"]);

        // Front node is a no-op move.
        assert!(list.move_to_front(c));
        assert_eq!(list.front_id(), Some(c));
        assert_eq!(list.back_id(), Some(b));
        assert!(list.contains(a));
        list.debug_validate_invariants();
    }

    #[test]
    fn move_to_front_after_remove_fails() {
        let mut list = EntryList::new();
        let a = list.push_back(1);
        list.push_back(2);
        assert_eq!(list.remove(a), Some(1));
        assert!(!list.move_to_front(a));
        assert_eq!(list.remove(a), None);
    }

    #[test]
    fn remove_middle_and_ends() {
        let mut list = EntryList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.remove(b), Some("b"));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["a", "c"]);

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.front(), Some(&"c"));
        assert_eq!(list.back(), Some(&"c"));

        assert_eq!(list.remove(c), Some("c"));
        assert!(list.is_empty());
        list.debug_validate_invariants();
    }

    #[test]
    fn get_mut_updates_value() {
        let mut list = EntryList::new();
        let id = list.push_back(10);
        if let Some(value) = list.get_mut(id) {
            *value = 20;
        }
        assert_eq!(list.get(id), Some(&20));
    }

    #[test]
    fn clear_resets_state() {
        let mut list = EntryList::with_capacity(4);
        list.push_back(1);
        list.push_back(2);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn iter_front_to_back_order() {
        let mut list = EntryList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_front(0);
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![0, 1, 2]);
    }
}
