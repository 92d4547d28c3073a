//! Ordered, owning playlist of track clones.
//!
//! A playlist owns every track it holds; copying a playlist deep-copies the
//! tracks, so two copies never share storage. Insertion is at the front:
//! the most recently added track is first in iteration order.

use log::info;

use crate::track::AudioTrack;

#[derive(Clone)]
pub struct Playlist {
    name: String,
    tracks: Vec<AudioTrack>,
}

impl Playlist {
    /// Create an empty playlist with the given name.
    pub fn new(name: &str) -> Self {
        info!("Created playlist: {}", name);
        Self { name: name.to_string(), tracks: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Take ownership of a track and insert it at the front.
    pub fn add_track(&mut self, track: AudioTrack) {
        info!("Added '{}' to playlist '{}'", track.title(), self.name);
        self.tracks.insert(0, track);
    }

    /// Remove the first track with this title. A missing title is a normal
    /// no-op, reported via the return value and a diagnostic.
    pub fn remove_track(&mut self, title: &str) -> bool {
        match self.tracks.iter().position(|t| t.title() == title) {
            Some(idx) => {
                self.tracks.remove(idx);
                info!("Removed '{}' from playlist '{}'", title, self.name);
                true
            }
            None => {
                info!("Track '{}' not found in playlist '{}'", title, self.name);
                false
            }
        }
    }

    /// Borrow the first track with this title, if any.
    pub fn find_track(&self, title: &str) -> Option<&AudioTrack> {
        self.tracks.iter().find(|t| t.title() == title)
    }

    /// Sum of the durations of all tracks, in seconds.
    pub fn total_duration_secs(&self) -> u32 {
        self.tracks.iter().map(AudioTrack::duration_secs).sum()
    }

    /// All tracks in iteration order (most recently added first).
    pub fn tracks(&self) -> &[AudioTrack] {
        &self.tracks
    }
}

impl std::fmt::Display for Playlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "=== Playlist: {} ===", self.name)?;
        write!(f, "\nTrack count: {}", self.tracks.len())?;
        for (idx, track) in self.tracks.iter().enumerate() {
            write!(f, "\n{}. {}", idx + 1, track.describe())?;
        }
        if self.tracks.is_empty() {
            write!(f, "\n(Empty playlist)")?;
        }
        Ok(())
    }
}
