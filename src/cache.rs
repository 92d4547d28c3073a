//! Fixed-capacity LRU cache of loaded tracks.
//!
//! The cache is a flat slot array keyed by track title. Recency is tracked
//! with a monotonically increasing logical counter bumped on every touch;
//! there are no timers or wall-clock reads, the clock is call order alone.

use log::{debug, info, warn};

use crate::track::AudioTrack;

struct Slot {
    track: AudioTrack,
    last_access: u64,
}

/// Least-recently-used cache with a fixed number of slots.
pub struct LruCache {
    slots: Vec<Option<Slot>>,
    access_counter: u64,
}

impl LruCache {
    /// Create a cache with `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, access_counter: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }

    /// Whether a track with this title is currently cached. Does not touch
    /// recency.
    pub fn contains(&self, title: &str) -> bool {
        self.find_slot(title).is_some()
    }

    /// Look up a cached track by title. A hit marks the slot as the most
    /// recently used one; a miss mutates nothing.
    pub fn get(&mut self, title: &str) -> Option<&mut AudioTrack> {
        let idx = self.find_slot(title)?;
        self.access_counter += 1;
        let slot = self.slots[idx].as_mut()?;
        slot.last_access = self.access_counter;
        Some(&mut slot.track)
    }

    /// Insert a track, taking ownership. Returns `true` when an eviction was
    /// needed to make room.
    ///
    /// If the title is already cached this is a touch: the existing slot's
    /// recency is bumped and the incoming copy is dropped. The cached copy
    /// wins; freshly analyzed state never replaces it.
    pub fn put(&mut self, track: AudioTrack) -> bool {
        if self.slots.is_empty() {
            warn!("Cache has no slots, dropping '{}'", track.title());
            return false;
        }

        if let Some(idx) = self.find_slot(track.title()) {
            self.access_counter += 1;
            if let Some(slot) = self.slots[idx].as_mut() {
                slot.last_access = self.access_counter;
            }
            debug!("'{}' already cached, touched slot {}", track.title(), idx);
            return false;
        }

        let mut evicted = false;
        if self.len() == self.slots.len() {
            evicted = self.evict_lru();
        }

        // After an eviction there is always at least one free slot.
        if let Some(idx) = self.find_empty_slot() {
            self.access_counter += 1;
            debug!("Caching '{}' in slot {}", track.title(), idx);
            self.slots[idx] = Some(Slot { track, last_access: self.access_counter });
        }
        evicted
    }

    /// Resize the slot array.
    ///
    /// Growing appends empty slots and leaves occupied slots where they are.
    /// Shrinking below the current occupancy evicts least-recently-used
    /// entries until the survivors fit, then compacts them to the front
    /// before truncating, so no occupied slot is ever silently dropped.
    pub fn set_capacity(&mut self, capacity: usize) {
        if capacity == self.slots.len() {
            return;
        }
        if capacity < self.slots.len() {
            while self.len() > capacity {
                self.evict_lru();
            }
            let occupied: Vec<Slot> = self.slots.drain(..).flatten().collect();
            self.slots = occupied.into_iter().map(Some).collect();
        }
        self.slots.resize_with(capacity, || None);
        info!("Cache capacity set to {} slots", capacity);
    }

    /// Empty every slot, dropping the owned tracks.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    /// Read-only snapshot of occupancy and per-slot recency.
    pub fn status(&self) -> CacheStatus {
        CacheStatus {
            capacity: self.slots.len(),
            occupied: self.len(),
            slots: self
                .slots
                .iter()
                .map(|s| s.as_ref().map(|slot| (slot.track.title().to_string(), slot.last_access)))
                .collect(),
        }
    }

    fn find_slot(&self, title: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|slot| slot.track.title() == title))
    }

    fn find_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_none())
    }

    // Lowest index wins a recency tie: the scan runs in index order and only
    // moves the candidate on a strictly smaller counter.
    fn find_lru_slot(&self) -> Option<usize> {
        let mut lru: Option<(usize, u64)> = None;
        for (idx, slot) in self.slots.iter().enumerate() {
            if let Some(slot) = slot {
                match lru {
                    Some((_, min)) if slot.last_access >= min => {}
                    _ => lru = Some((idx, slot.last_access)),
                }
            }
        }
        lru.map(|(idx, _)| idx)
    }

    fn evict_lru(&mut self) -> bool {
        match self.find_lru_slot() {
            Some(idx) => {
                if let Some(slot) = self.slots[idx].take() {
                    info!("Evicted '{}' from cache slot {}", slot.track.title(), idx);
                    true
                } else {
                    false
                }
            }
            None => false,
        }
    }
}

/// Point-in-time view of the cache, used for status dumps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStatus {
    pub capacity: usize,
    pub occupied: usize,
    /// One entry per slot: `Some((title, last_access))` or `None` when empty.
    pub slots: Vec<Option<(String, u64)>>,
}

impl std::fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[LRUCache] Status: {}/{} slots used", self.occupied, self.capacity)?;
        for (idx, slot) in self.slots.iter().enumerate() {
            match slot {
                Some((title, last_access)) => {
                    write!(f, "\n  Slot {}: {} (last access: {})", idx, title, last_access)?
                }
                None => write!(f, "\n  Slot {}: [EMPTY]", idx)?,
            }
        }
        Ok(())
    }
}
