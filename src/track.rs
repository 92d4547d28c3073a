//! Audio track model: the polymorphic track capability.
//!
//! A track is a value type: whenever one crosses a container boundary
//! (catalog -> playlist, playlist -> cache, playlist -> deck) it is cloned,
//! so every container owns its copies outright and mutating a clone's BPM
//! never touches the source.

use log::debug;
use thiserror::Error;

/// Errors produced by track operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrackError {
    /// Cloning yielded no usable track. Callers must leave their target
    /// container untouched when they see this.
    #[error("failed to clone track '{0}': a track needs a non-empty title")]
    CloneFailed(String),
}

/// Format-specific track parameters. MP3 and WAV are the only two concrete
/// formats; the set is closed on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackFormat {
    Mp3 { bitrate_kbps: u32 },
    Wav { sample_rate_hz: u32, bit_depth: u32 },
}

/// A single audio track with its metadata and simulated readiness state.
#[derive(Debug, Clone)]
pub struct AudioTrack {
    title: String,
    artists: Vec<String>,
    duration_secs: u32,
    bpm: i32,
    format: TrackFormat,
    loaded: bool,
    beatgrid_ready: bool,
}

impl AudioTrack {
    /// Create an MP3 track from its metadata.
    pub fn mp3(title: &str, artists: Vec<String>, duration_secs: u32, bpm: i32, bitrate_kbps: u32) -> Self {
        Self::new(title, artists, duration_secs, bpm, TrackFormat::Mp3 { bitrate_kbps })
    }

    /// Create a WAV track from its metadata.
    pub fn wav(
        title: &str,
        artists: Vec<String>,
        duration_secs: u32,
        bpm: i32,
        sample_rate_hz: u32,
        bit_depth: u32,
    ) -> Self {
        Self::new(
            title,
            artists,
            duration_secs,
            bpm,
            TrackFormat::Wav { sample_rate_hz, bit_depth },
        )
    }

    fn new(title: &str, artists: Vec<String>, duration_secs: u32, bpm: i32, format: TrackFormat) -> Self {
        Self {
            title: title.to_string(),
            artists,
            duration_secs,
            bpm,
            format,
            loaded: false,
            beatgrid_ready: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artists(&self) -> &[String] {
        &self.artists
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn bpm(&self) -> i32 {
        self.bpm
    }

    pub fn set_bpm(&mut self, bpm: i32) {
        self.bpm = bpm;
    }

    pub fn format(&self) -> TrackFormat {
        self.format
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_beatgrid_ready(&self) -> bool {
        self.beatgrid_ready
    }

    /// Simulate decoding the track into memory. Idempotent.
    pub fn load(&mut self) {
        if !self.loaded {
            self.loaded = true;
            debug!("Loaded track '{}'", self.title);
        }
    }

    /// Simulate beat-grid analysis. Idempotent.
    pub fn analyze_beatgrid(&mut self) {
        if !self.beatgrid_ready {
            self.beatgrid_ready = true;
            debug!("Analyzed beatgrid for '{}' ({} BPM)", self.title, self.bpm);
        }
    }

    /// Produce an independently owned copy of this track's current state.
    ///
    /// This is the only sanctioned way to move a track across a container
    /// boundary. A failure is signaled, never swallowed: a track without a
    /// title has no usable cache/playlist key and refuses to clone.
    pub fn try_clone(&self) -> Result<AudioTrack, TrackError> {
        if self.title.trim().is_empty() {
            return Err(TrackError::CloneFailed(self.title.clone()));
        }
        Ok(self.clone())
    }

    /// One-line human-readable description used by playlist and status dumps.
    pub fn describe(&self) -> String {
        format!(
            "{} by {} ({}s, {} BPM)",
            self.title,
            self.artists.join(", "),
            self.duration_secs,
            self.bpm
        )
    }
}
