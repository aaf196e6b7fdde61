//! Chunked slot allocator used to store tree nodes.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A stable reference to an object allocated in a `TypedArena<T>`.
///
/// A handle stays valid until the object it refers to is freed. Afterwards the slot may be handed
/// out again by a later allocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Handle {
    chunk: usize,
    slot: usize,
}

enum Slot<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

/// An allocator for a single type of object, addressed by `Handle`.
///
/// Objects are stored in fixed-size chunks, so growing the arena never moves existing objects.
/// Freed slots are kept in an intrusive free list and the most recently freed slot is reused
/// first.
///
/// # Examples
///
/// ```
/// use avl_dictionary::arena::TypedArena;
///
/// let mut arena = TypedArena::new(16);
///
/// let word = arena.allocate(String::from("cat"));
/// assert_eq!(arena[word], "cat");
///
/// arena[word].push_str("s");
/// assert_eq!(arena.free(&word), "cats");
/// assert!(arena.is_empty());
/// ```
pub struct TypedArena<T> {
    free_head: Option<Handle>,
    chunks: Vec<Vec<Slot<T>>>,
    chunk_size: usize,
    len: usize,
    capacity: usize,
}

impl<T> TypedArena<T> {
    fn contains_slot(&self, handle: &Handle) -> bool {
        handle.chunk < self.chunks.len() && handle.slot < self.chunks[handle.chunk].len()
    }

    /// Constructs a new, empty `TypedArena<T>` that grows by `chunk_size` slots at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_dictionary::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::new(1024);
    /// assert_eq!(arena.chunk_size(), 1024);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        TypedArena {
            free_head: None,
            chunks: Vec::new(),
            chunk_size,
            len: 0,
            capacity: 0,
        }
    }

    /// Moves `value` into the arena and returns the handle that refers to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_dictionary::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let handle = arena.allocate("dog");
    /// assert_eq!(arena.get(&handle), Some(&"dog"));
    /// ```
    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;

        match self.free_head.take() {
            None => {
                if self.len > self.capacity {
                    self.chunks.push(Vec::with_capacity(self.chunk_size));
                    self.capacity += self.chunk_size;
                }
                let chunk = self.chunks.len() - 1;
                let last_chunk = &mut self.chunks[chunk];
                last_chunk.push(Slot::Occupied(value));
                Handle {
                    chunk,
                    slot: last_chunk.len() - 1,
                }
            },
            Some(handle) => {
                let vacant = mem::replace(
                    &mut self.chunks[handle.chunk][handle.slot],
                    Slot::Occupied(value),
                );
                match vacant {
                    Slot::Vacant(next) => {
                        self.free_head = next;
                        handle
                    },
                    Slot::Occupied(_) => panic!("Error: free list points to an occupied slot."),
                }
            },
        }
    }

    /// Removes the object referred to by `handle` from the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `handle` refers to a slot that is out of range or already vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_dictionary::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let handle = arena.allocate(7);
    /// assert_eq!(arena.free(&handle), 7);
    /// assert_eq!(arena.get(&handle), None);
    /// ```
    pub fn free(&mut self, handle: &Handle) -> T {
        if !self.contains_slot(handle) {
            panic!("Error: attempting to free an out of range slot.");
        }
        let old_slot = mem::replace(
            &mut self.chunks[handle.chunk][handle.slot],
            Slot::Vacant(self.free_head),
        );
        match old_slot {
            Slot::Vacant(next) => {
                self.chunks[handle.chunk][handle.slot] = Slot::Vacant(next);
                panic!("Error: attempting to free a vacant slot.");
            },
            Slot::Occupied(value) => {
                self.len -= 1;
                self.free_head = Some(*handle);
                value
            },
        }
    }

    /// Returns an immutable reference to the object referred to by `handle`, or `None` if the
    /// slot is out of range or vacant.
    pub fn get(&self, handle: &Handle) -> Option<&T> {
        if !self.contains_slot(handle) {
            return None;
        }
        match self.chunks[handle.chunk][handle.slot] {
            Slot::Occupied(ref value) => Some(value),
            Slot::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to the object referred to by `handle`, or `None` if the slot
    /// is out of range or vacant.
    pub fn get_mut(&mut self, handle: &Handle) -> Option<&mut T> {
        if !self.contains_slot(handle) {
            return None;
        }
        match self.chunks[handle.chunk][handle.slot] {
            Slot::Occupied(ref mut value) => Some(value),
            Slot::Vacant(_) => None,
        }
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots added each time the arena grows.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(&handle).expect("Error: handle does not refer to a live object.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(&handle).expect("Error: handle does not refer to a live object.")
    }
}
