//! Track library: the catalog of original tracks and the current playlist.
//!
//! The catalog is built once from session configuration and its entries are
//! never handed out by value; playlists, the cache and the decks only ever
//! receive clones of catalog originals.

use log::{info, warn};

use crate::config::TrackSpec;
use crate::playlist::Playlist;
use crate::track::AudioTrack;

pub struct LibraryService {
    catalog: Vec<AudioTrack>,
    playlist: Playlist,
}

impl LibraryService {
    pub fn new() -> Self {
        Self { catalog: Vec::new(), playlist: Playlist::new("default") }
    }

    /// Instantiate one catalog track per descriptor.
    ///
    /// The format field picks the variant, case-insensitively; anything that
    /// is not MP3 is treated as WAV. `extra_param1`/`extra_param2` carry the
    /// bitrate for MP3 and the sample rate / bit depth for WAV.
    pub fn build_library(&mut self, specs: &[TrackSpec]) {
        for spec in specs {
            let track = if spec.format.eq_ignore_ascii_case("mp3") {
                info!("Created MP3 track '{}' ({} kbps)", spec.title, spec.extra_param1);
                AudioTrack::mp3(
                    &spec.title,
                    spec.artists.clone(),
                    spec.duration_seconds,
                    spec.bpm,
                    spec.extra_param1,
                )
            } else {
                info!(
                    "Created WAV track '{}' ({}Hz/{}bit)",
                    spec.title, spec.extra_param1, spec.extra_param2
                );
                AudioTrack::wav(
                    &spec.title,
                    spec.artists.clone(),
                    spec.duration_seconds,
                    spec.bpm,
                    spec.extra_param1,
                    spec.extra_param2,
                )
            };
            self.catalog.push(track);
        }
        info!("Track library built: {} tracks loaded", self.catalog.len());
    }

    /// Build a fresh playlist from 1-based catalog indices and make it the
    /// current one. Invalid indices are skipped with a warning; the load
    /// carries on. Returns how many tracks made it in.
    pub fn load_playlist_from_indices(&mut self, name: &str, indices: &[i64]) -> usize {
        info!("Loading playlist: {}", name);
        let mut playlist = Playlist::new(name);

        for &raw in indices {
            if raw < 1 || raw as usize > self.catalog.len() {
                warn!("Invalid track index: {}", raw);
                continue;
            }
            let original = &self.catalog[(raw - 1) as usize];
            match original.try_clone() {
                Ok(mut clone) => {
                    clone.load();
                    clone.analyze_beatgrid();
                    playlist.add_track(clone);
                }
                Err(err) => warn!("Skipping index {}: {}", raw, err),
            }
        }

        let loaded = playlist.len();
        self.playlist = playlist;
        info!("Playlist loaded: {} ({} tracks)", name, loaded);
        loaded
    }

    /// Borrow a track from the current playlist by title.
    pub fn find_track(&self, title: &str) -> Option<&AudioTrack> {
        self.playlist.find_track(title)
    }

    /// Titles of the current playlist, in iteration order.
    pub fn track_titles(&self) -> Vec<String> {
        self.playlist.tracks().iter().map(|t| t.title().to_string()).collect()
    }

    /// Log the current playlist and its total duration.
    pub fn display_library(&self) {
        info!("=== DJ Library Playlist: {} ===", self.playlist.name());
        if self.playlist.is_empty() {
            info!("Playlist is empty");
            return;
        }
        info!("{}", self.playlist);
        info!("Total duration: {} seconds", self.playlist.total_duration_secs());
    }

    pub fn catalog(&self) -> &[AudioTrack] {
        &self.catalog
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }
}

impl Default for LibraryService {
    fn default() -> Self {
        Self::new()
    }
}
