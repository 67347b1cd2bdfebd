//! Slot assignment for the tiles of one layout surface.
//!
//! Each tile identity maps to an integer slot; slot 0 is the focused tile.
//! Layout places tiles in ascending slot order. Every active tile has a
//! unique slot after any mutation, but slots are only guaranteed dense after
//! [`PositionMap::set_all`], [`PositionMap::compact`] or
//! [`PositionMap::sync`].

use std::collections::{BTreeMap, HashMap, HashSet};

use super::error::{MosaicError, MosaicResult};
use super::stream::Tile;

/// Mapping from tile identity to layout slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionMap {
    slots: HashMap<String, usize>,
}

impl PositionMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Creates a map with sequential slots in list order.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::DuplicateTile`] if an identity repeats.
    pub fn from_ordered<S: AsRef<str>>(ids: &[S]) -> MosaicResult<Self> {
        let mut map = Self::new();
        map.set_all(ids)?;
        Ok(map)
    }

    /// Number of tracked tiles.
    #[must_use]
    pub fn len(&self) -> usize { self.slots.len() }

    /// Returns whether no tiles are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    /// Returns whether the identity is tracked.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool { self.slots.contains_key(id) }

    /// Slot of a tile.
    #[must_use]
    pub fn slot(&self, id: &str) -> Option<usize> { self.slots.get(id).copied() }

    /// Identity holding the given slot.
    #[must_use]
    pub fn id_at(&self, slot: usize) -> Option<String> {
        self.slots.iter().find(|(_, s)| **s == slot).map(|(id, _)| id.clone())
    }

    /// Identity with the lowest slot.
    #[must_use]
    pub fn primary(&self) -> Option<String> {
        self.slots.iter().min_by_key(|(_, slot)| **slot).map(|(id, _)| id.clone())
    }

    /// Read-only copy of the mapping, sorted by identity.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, usize> {
        self.slots.iter().map(|(id, slot)| (id.clone(), *slot)).collect()
    }

    /// Identities in ascending slot order.
    #[must_use]
    pub fn ordered_ids(&self) -> Vec<String> {
        let mut entries: Vec<(&String, usize)> = self.slots.iter().map(|(id, s)| (id, *s)).collect();
        entries.sort_by_key(|(_, slot)| *slot);
        entries.into_iter().map(|(id, _)| id.clone()).collect()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Tracks a tile at the smallest unused slot.
    ///
    /// Other tiles keep their slots. Adding a tracked tile returns its
    /// current slot unchanged.
    pub fn add_tile(&mut self, id: &str) -> usize {
        if let Some(slot) = self.slot(id) {
            return slot;
        }

        let used: HashSet<usize> = self.slots.values().copied().collect();
        let slot = (0..).find(|s| !used.contains(s)).unwrap_or(used.len());
        self.slots.insert(id.to_string(), slot);
        tracing::debug!(id, slot, "tile added");
        slot
    }

    /// Stops tracking a tile, returning the slot it held.
    ///
    /// The slot stays free until the next compaction or rebuild.
    pub fn remove_tile(&mut self, id: &str) -> Option<usize> {
        let slot = self.slots.remove(id);
        if let Some(slot) = slot {
            tracing::debug!(id, slot, "tile removed");
        }
        slot
    }

    /// Exchanges the slots of two tiles.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::TileNotFound`] if either identity is untracked,
    /// in which case nothing changes.
    pub fn swap(&mut self, a: &str, b: &str) -> MosaicResult<()> {
        let slot_a = self.slot(a).ok_or_else(|| MosaicError::TileNotFound(a.to_string()))?;
        let slot_b = self.slot(b).ok_or_else(|| MosaicError::TileNotFound(b.to_string()))?;
        if a == b {
            return Ok(());
        }

        self.slots.insert(a.to_string(), slot_b);
        self.slots.insert(b.to_string(), slot_a);
        tracing::debug!(a, b, "tiles swapped");
        Ok(())
    }

    /// Rebuilds the map with sequential slots in list order.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::DuplicateTile`] if an identity repeats, in
    /// which case nothing changes.
    pub fn set_all<S: AsRef<str>>(&mut self, ids: &[S]) -> MosaicResult<()> {
        let mut slots = HashMap::with_capacity(ids.len());
        for (slot, id) in ids.iter().enumerate() {
            let id = id.as_ref();
            if slots.insert(id.to_string(), slot).is_some() {
                return Err(MosaicError::DuplicateTile(id.to_string()));
            }
        }
        self.slots = slots;
        Ok(())
    }

    /// Moves a tile to the primary slot by swapping it with the current
    /// primary tile.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyPositions`] when nothing is tracked and
    /// [`MosaicError::TileNotFound`] when `id` is untracked.
    pub fn promote(&mut self, id: &str) -> MosaicResult<()> {
        let primary = self.primary().ok_or(MosaicError::EmptyPositions)?;
        self.swap(id, &primary)
    }

    /// Renumbers slots densely from 0, keeping their relative order.
    pub fn compact(&mut self) {
        let ordered = self.ordered_ids();
        self.slots = ordered.into_iter().enumerate().map(|(slot, id)| (id, slot)).collect();
    }

    /// Re-derives the map for a new active set.
    ///
    /// Stale identities are pruned, remaining slots compacted and new
    /// identities appended in the order given.
    pub fn sync<S: AsRef<str>>(&mut self, active: &[S]) {
        let active_set: HashSet<&str> = active.iter().map(AsRef::as_ref).collect();
        let before = self.slots.len();
        self.slots.retain(|id, _| active_set.contains(id.as_str()));
        let pruned = before - self.slots.len();

        self.compact();
        for id in active {
            self.add_tile(id.as_ref());
        }

        if pruned > 0 {
            tracing::debug!(pruned, total = self.slots.len(), "position map synced");
        }
    }

    /// Orders tiles by slot.
    ///
    /// Tiles without a slot go last in their given order and are logged,
    /// since they indicate the map and the active set have diverged.
    #[must_use]
    pub fn order_tiles(&self, tiles: &[Tile]) -> Vec<Tile> {
        let mut ordered: Vec<(usize, &Tile)> = tiles
            .iter()
            .map(|tile| {
                let slot = self.slot(&tile.id).unwrap_or_else(|| {
                    tracing::warn!(id = %tile.id, "tile has no slot, placing it last");
                    usize::MAX
                });
                (slot, tile)
            })
            .collect();
        ordered.sort_by_key(|(slot, _)| *slot);
        ordered.into_iter().map(|(_, tile)| tile.clone()).collect()
    }
}
