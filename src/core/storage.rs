use crate::core::{BodyHandle, EffectHandle};
use crate::error::PhysicsError;
use crate::Result;

use std::fmt::Debug;

/// A generation-checked handle into a [`Storage`]
pub trait Handle: Copy + Eq + Debug {
    /// Builds a handle from a slot index and the slot's generation
    fn from_parts(index: u32, generation: u32) -> Self;

    /// Returns the slot index
    fn index(&self) -> u32;

    /// Returns the generation the handle was issued for
    fn generation(&self) -> u32;
}

#[derive(Debug, Clone, Default)]
struct Slot {
    /// Bumped every time the slot is vacated
    generation: u32,

    /// Position of the slot's item in the dense list, if occupied
    dense: Option<usize>,
}

/// An arena that hands out stable, generation-checked handles.
///
/// Items live in a dense list kept in insertion order, so iteration visits
/// them in the order they were added. Removing an item vacates its slot
/// without invalidating any other handle; a handle to a vacated slot stays
/// invalid even after the slot is reused.
#[derive(Debug)]
pub struct Storage<H, T> {
    /// Live items with their handles, in insertion order
    items: Vec<(H, T)>,

    /// Sparse slot table indexed by `Handle::index`
    slots: Vec<Slot>,

    /// Vacated slot indices available for reuse
    free: Vec<u32>,
}

impl<H: Handle, T> Storage<H, T> {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty storage with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Adds an item to the storage and returns its handle
    pub(crate) fn add(&mut self, item: T) -> H {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot::default());
                (self.slots.len() - 1) as u32
            }
        };

        let slot = &mut self.slots[index as usize];
        let handle = H::from_parts(index, slot.generation);
        slot.dense = Some(self.items.len());
        self.items.push((handle, item));
        handle
    }

    /// Returns the dense position of a live handle
    fn position(&self, handle: H) -> Option<usize> {
        let slot = self.slots.get(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.dense
    }

    /// Returns whether the handle refers to a live item
    pub fn contains(&self, handle: H) -> bool {
        self.position(handle).is_some()
    }

    /// Gets a reference to an item by its handle
    pub fn get(&self, handle: H) -> Option<&T> {
        let position = self.position(handle)?;
        Some(&self.items[position].1)
    }

    /// Gets a mutable reference to an item by its handle
    pub fn get_mut(&mut self, handle: H) -> Option<&mut T> {
        let position = self.position(handle)?;
        Some(&mut self.items[position].1)
    }

    /// Gets mutable references to two distinct items at once
    pub fn get2_mut(&mut self, first: H, second: H) -> Option<(&mut T, &mut T)> {
        let a = self.position(first)?;
        let b = self.position(second)?;
        if a == b {
            return None;
        }

        if a < b {
            let (left, right) = self.items.split_at_mut(b);
            Some((&mut left[a].1, &mut right[0].1))
        } else {
            let (left, right) = self.items.split_at_mut(a);
            Some((&mut right[0].1, &mut left[b].1))
        }
    }

    /// Removes an item from the storage, keeping the order of the rest
    pub(crate) fn remove(&mut self, handle: H) -> Option<T> {
        let position = self.position(handle)?;

        let slot = &mut self.slots[handle.index() as usize];
        slot.dense = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index());

        let (_, item) = self.items.remove(position);
        for (moved, _) in &self.items[position..] {
            if let Some(dense) = self.slots[moved.index() as usize].dense.as_mut() {
                *dense -= 1;
            }
        }
        Some(item)
    }

    /// Returns the number of items in the storage
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears all items from the storage, invalidating every handle
    pub(crate) fn clear(&mut self) {
        for (handle, _) in &self.items {
            let slot = &mut self.slots[handle.index() as usize];
            slot.dense = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(handle.index());
        }
        self.items.clear();
    }

    /// Returns the handle of the item at `position` in insertion order
    pub fn handle_at(&self, position: usize) -> Option<H> {
        self.items.get(position).map(|(handle, _)| *handle)
    }

    /// Returns all handles in insertion order
    pub fn handles(&self) -> Vec<H> {
        self.items.iter().map(|(handle, _)| *handle).collect()
    }

    /// Returns an iterator over all items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (H, &T)> + '_ {
        self.items.iter().map(|(handle, item)| (*handle, item))
    }

    /// Returns a mutable iterator over all items in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (H, &mut T)> + '_ {
        self.items.iter_mut().map(|(handle, item)| (*handle, item))
    }
}

impl<H: Handle, T> Default for Storage<H, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Storage<BodyHandle, T> {
    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.get(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to a body by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.get_mut(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }
}

impl<T> Storage<EffectHandle, T> {
    /// Gets an effect by its handle, returning an error if not found
    pub fn get_effect(&self, handle: EffectHandle) -> Result<&T> {
        self.get(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Effect with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to an effect by its handle, returning an error if not found
    pub fn get_effect_mut(&mut self, handle: EffectHandle) -> Result<&mut T> {
        self.get_mut(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Effect with handle {:?} not found", handle)))
    }
}
