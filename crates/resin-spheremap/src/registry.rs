//! Boundary-entry registry.
//!
//! Each face keeps an ordered list of entries, one per connected component of
//! its boundary. The registry also maps every entry back to its slot so that
//! unlinking is O(1) amortized. Removal leaves a tombstone; a list is compacted
//! once tombstones outnumber live entries, which keeps the remaining entries in
//! insertion order.

use std::collections::HashMap;

use crate::error::SphereMapError;
use crate::handle::{BoundaryEntry, FaceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EntryLocation {
    face: FaceId,
    slot: usize,
}

#[derive(Debug, Clone, Default)]
struct EntryList {
    slots: Vec<Option<BoundaryEntry>>,
    live: usize,
}

/// Per-face boundary entry lists with reverse lookup.
#[derive(Debug, Clone, Default)]
pub(crate) struct BoundaryRegistry {
    lists: HashMap<FaceId, EntryList>,
    locations: HashMap<BoundaryEntry, EntryLocation>,
}

impl BoundaryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `entry` is registered with some face.
    pub fn contains(&self, entry: BoundaryEntry) -> bool {
        self.locations.contains_key(&entry)
    }

    /// The face `entry` is registered with.
    pub fn face_of(&self, entry: BoundaryEntry) -> Option<FaceId> {
        self.locations.get(&entry).map(|loc| loc.face)
    }

    /// Appends `entry` to the entry list of `face`.
    pub fn insert(&mut self, entry: BoundaryEntry, face: FaceId) -> Result<(), SphereMapError> {
        if self.contains(entry) {
            return Err(SphereMapError::AlreadyBoundaryEntry(entry));
        }
        let list = self.lists.entry(face).or_default();
        let slot = list.slots.len();
        list.slots.push(Some(entry));
        list.live += 1;
        self.locations.insert(entry, EntryLocation { face, slot });
        Ok(())
    }

    /// Removes `entry` and returns the face it was registered with.
    pub fn remove(&mut self, entry: BoundaryEntry) -> Result<FaceId, SphereMapError> {
        let loc = self
            .locations
            .remove(&entry)
            .ok_or(SphereMapError::NotBoundaryEntry(entry))?;
        if let Some(list) = self.lists.get_mut(&loc.face) {
            list.slots[loc.slot] = None;
            list.live -= 1;
            if list.slots.len() > 8 && list.live * 2 < list.slots.len() {
                self.compact(loc.face);
            }
        }
        Ok(loc.face)
    }

    /// Puts `new` into the slot held by `old`, keeping face and position.
    pub fn replace(
        &mut self,
        old: BoundaryEntry,
        new: BoundaryEntry,
    ) -> Result<FaceId, SphereMapError> {
        if self.contains(new) {
            return Err(SphereMapError::AlreadyBoundaryEntry(new));
        }
        let loc = self
            .locations
            .remove(&old)
            .ok_or(SphereMapError::NotBoundaryEntry(old))?;
        if let Some(list) = self.lists.get_mut(&loc.face) {
            list.slots[loc.slot] = Some(new);
        }
        self.locations.insert(new, loc);
        Ok(loc.face)
    }

    /// Live entries of `face` in insertion order.
    pub fn entries(&self, face: FaceId) -> impl Iterator<Item = BoundaryEntry> + '_ {
        self.lists
            .get(&face)
            .into_iter()
            .flat_map(|list| list.slots.iter().flatten().copied())
    }

    /// Number of live entries of `face`.
    pub fn entry_count(&self, face: FaceId) -> usize {
        self.lists.get(&face).map_or(0, |list| list.live)
    }

    /// Faces that own an entry list, including empty ones.
    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.lists.keys().copied()
    }

    /// Total number of registered entries.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Unregisters every entry of `face` and drops its list.
    pub fn clear_face(&mut self, face: FaceId) {
        if let Some(list) = self.lists.remove(&face) {
            for entry in list.slots.into_iter().flatten() {
                self.locations.remove(&entry);
            }
        }
    }

    /// Drops the list of `face` if it holds no live entry.
    ///
    /// Returns false if entries are still registered with `face`.
    pub fn drop_face(&mut self, face: FaceId) -> bool {
        if self.entry_count(face) > 0 {
            return false;
        }
        self.lists.remove(&face);
        true
    }

    pub fn clear(&mut self) {
        self.lists.clear();
        self.locations.clear();
    }

    fn compact(&mut self, face: FaceId) {
        let Self { lists, locations } = self;
        let Some(list) = lists.get_mut(&face) else {
            return;
        };
        list.slots.retain(Option::is_some);
        for (slot, entry) in list.slots.iter().enumerate() {
            if let Some(entry) = entry {
                locations.insert(*entry, EntryLocation { face, slot });
            }
        }
    }
}
