//! Two-deck mixing engine with an active deck and a BPM sync policy.
//!
//! Each deck slot owns its track outright. Loading alternates decks: the
//! clone lands on the non-active deck, the previous active deck is freed
//! and the new deck becomes active.

use log::info;

use crate::track::{AudioTrack, TrackError};

/// One of the two mixing decks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Deck {
    A,
    B,
}

impl Deck {
    pub fn index(self) -> usize {
        match self {
            Deck::A => 0,
            Deck::B => 1,
        }
    }

    pub fn other(self) -> Deck {
        match self {
            Deck::A => Deck::B,
            Deck::B => Deck::A,
        }
    }
}

pub struct MixingEngine {
    decks: [Option<AudioTrack>; 2],
    active: Deck,
    auto_sync: bool,
    bpm_tolerance: i32,
}

impl MixingEngine {
    pub fn new(auto_sync: bool, bpm_tolerance: i32) -> Self {
        info!("Mixing engine initialized with 2 empty decks");
        Self { decks: [None, None], active: Deck::A, auto_sync, bpm_tolerance }
    }

    /// Clone a track onto a deck and make that deck active.
    ///
    /// The first load goes to deck A. Every later load targets the deck that
    /// is not active, frees whatever that deck held, and frees the previous
    /// active deck once the clone is installed. With auto-sync enabled, a
    /// clone whose BPM is outside tolerance is pulled toward the active
    /// deck's BPM before installation. A clone failure propagates and leaves
    /// both decks untouched.
    pub fn load_track_to_deck(&mut self, track: &AudioTrack) -> Result<Deck, TrackError> {
        let mut clone = track.try_clone()?;

        let first_load = self.decks.iter().all(Option::is_none);
        let target = if first_load { Deck::A } else { self.active.other() };

        self.decks[target.index()] = None;
        clone.load();
        clone.analyze_beatgrid();

        if self.auto_sync && !first_load && !self.can_mix(&clone) {
            self.sync_bpm(&mut clone);
        }

        info!("Loaded '{}' to deck {}", clone.title(), target.index());
        self.decks[target.index()] = Some(clone);
        if !first_load {
            self.decks[self.active.index()] = None;
        }
        self.active = target;
        Ok(target)
    }

    /// Whether the candidate's BPM is close enough to the active deck's to
    /// mix without adjustment. False when the active deck is empty.
    pub fn can_mix(&self, candidate: &AudioTrack) -> bool {
        match &self.decks[self.active.index()] {
            Some(active) => (active.bpm() - candidate.bpm()).abs() <= self.bpm_tolerance,
            None => false,
        }
    }

    /// Pull the candidate's BPM to the floor average of the active deck's
    /// BPM and its own. No-op when the active deck is empty.
    pub fn sync_bpm(&self, candidate: &mut AudioTrack) {
        if let Some(active) = &self.decks[self.active.index()] {
            let old = candidate.bpm();
            let synced = (active.bpm() + old) / 2;
            candidate.set_bpm(synced);
            info!("Syncing BPM from {} to {}", old, synced);
        }
    }

    pub fn active_deck(&self) -> Deck {
        self.active
    }

    /// Borrow the track currently loaded on a deck, if any.
    pub fn deck_track(&self, deck: Deck) -> Option<&AudioTrack> {
        self.decks[deck.index()].as_ref()
    }

    /// Read-only snapshot of both deck slots and the active index.
    pub fn status(&self) -> DeckStatus {
        DeckStatus {
            decks: [
                self.decks[0].as_ref().map(|t| t.title().to_string()),
                self.decks[1].as_ref().map(|t| t.title().to_string()),
            ],
            active: self.active.index(),
        }
    }
}

/// Point-in-time view of the decks, used for status dumps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckStatus {
    pub decks: [Option<String>; 2],
    pub active: usize,
}

impl std::fmt::Display for DeckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "=== Deck Status ===")?;
        for (idx, deck) in self.decks.iter().enumerate() {
            match deck {
                Some(title) => write!(f, "\nDeck {}: {}", idx, title)?,
                None => write!(f, "\nDeck {}: [EMPTY]", idx)?,
            }
        }
        write!(f, "\nActive Deck: {}", self.active)
    }
}

#[cfg(test)]
mod tests;
