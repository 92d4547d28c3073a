//! Cache-facing controller: clones tracks into the LRU cache.

use log::info;

use crate::cache::{CacheStatus, LruCache};
use crate::track::{AudioTrack, TrackError};

/// Outcome of a cache load.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CacheLoad {
    /// The title was already cached; its recency was promoted.
    AlreadyCached,
    /// The clone was stored in a free slot.
    Stored,
    /// The clone was stored after evicting the least recently used entry.
    StoredEvicting,
}

pub struct DeckController {
    cache: LruCache,
}

impl DeckController {
    pub fn new(cache_capacity: usize) -> Self {
        Self { cache: LruCache::new(cache_capacity) }
    }

    /// Clone a track into the cache.
    ///
    /// An already-cached title is touched instead of re-inserted, so the
    /// caller's copy never replaces cached state. A clone failure propagates
    /// and leaves the cache untouched.
    pub fn load_track_to_cache(&mut self, track: &AudioTrack) -> Result<CacheLoad, TrackError> {
        if self.cache.contains(track.title()) {
            self.cache.get(track.title());
            info!("'{}' already cached", track.title());
            return Ok(CacheLoad::AlreadyCached);
        }

        let mut clone = track.try_clone()?;
        clone.load();
        clone.analyze_beatgrid();
        if self.cache.put(clone) {
            Ok(CacheLoad::StoredEvicting)
        } else {
            Ok(CacheLoad::Stored)
        }
    }

    /// Fetch a cached track by title, promoting its recency on a hit.
    pub fn track_from_cache(&mut self, title: &str) -> Option<&mut AudioTrack> {
        self.cache.get(title)
    }

    pub fn set_cache_capacity(&mut self, capacity: usize) {
        self.cache.set_capacity(capacity);
    }

    pub fn cache_status(&self) -> CacheStatus {
        self.cache.status()
    }
}
