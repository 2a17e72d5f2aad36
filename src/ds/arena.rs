//! Slot arena with stable integer handles.
//!
//! Entries are stored in a `Vec` and addressed by [`EntryId`]. Removing an
//! entry leaves its slot vacant and threads it onto an intrusive free list,
//! so handles stay valid for the entries that remain and slots are reused by
//! later inserts. This is what lets the caches keep a hash map of
//! key -> `EntryId` without any pointer or iterator aliasing.

/// Stable handle to an entry inside an [`Arena`].
///
/// An `EntryId` is only meaningful for the arena that issued it, and only
/// until that entry is removed. The caches never hand ids across their API
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub(crate) usize);

impl EntryId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<usize> },
}

/// Growable arena of `T` with O(1) insert, remove, and lookup by [`EntryId`].
#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Creates an empty arena with reserved slot capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Stores `value` and returns its handle, reusing a vacant slot if any.
    pub fn insert(&mut self, value: T) -> EntryId {
        self.len += 1;
        match self.free_head {
            Some(idx) => {
                let next_free = match self.slots[idx] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot"),
                };
                self.free_head = next_free;
                self.slots[idx] = Slot::Occupied(value);
                EntryId(idx)
            },
            None => {
                self.slots.push(Slot::Occupied(value));
                EntryId(self.slots.len() - 1)
            },
        }
    }

    /// Removes the entry at `id` and returns it, or `None` if the slot is
    /// already vacant or out of range.
    pub fn remove(&mut self, id: EntryId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }
        let taken = std::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(id.0);
        self.len -= 1;
        match taken {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    /// Returns a shared reference to the entry at `id`, if present.
    pub fn get(&self, id: EntryId) -> Option<&T> {
        match self.slots.get(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    /// Returns a mutable reference to the entry at `id`, if present.
    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut T> {
        match self.slots.get_mut(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    /// Returns `true` if `id` currently refers to a live entry.
    pub fn contains(&self, id: EntryId) -> bool {
        matches!(self.slots.get(id.0), Some(Slot::Occupied(_)))
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all entries. Slot storage is retained for reuse.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }

    /// Iterates over live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &T)> {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| match slot {
            Slot::Occupied(value) => Some((EntryId(idx), value)),
            Slot::Vacant { .. } => None,
        })
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
