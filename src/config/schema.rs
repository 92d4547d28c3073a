use serde::Deserialize;

/// Top-level session settings loaded from `session.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/platter/session.toml` or
/// `~/.config/platter/session.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PLATTER__`, `__` as nested separator)
/// 2) Session file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub cache: CacheSettings,
    pub mixer: MixerSettings,
    pub playlist: PlaylistSettings,
    /// Track descriptors the library catalog is built from.
    pub library: Vec<TrackSpec>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            cache: CacheSettings::default(),
            mixer: MixerSettings::default(),
            playlist: PlaylistSettings::default(),
            library: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Number of cache slots for loaded tracks.
    pub capacity: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self { capacity: 4 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MixerSettings {
    /// Whether out-of-tolerance tracks get their BPM pulled toward the
    /// active deck on deck load.
    pub auto_sync: bool,
    /// Largest BPM gap that still counts as mixable.
    pub bpm_tolerance: i32,
}

impl Default for MixerSettings {
    fn default() -> Self {
        Self { auto_sync: false, bpm_tolerance: 8 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Name of the playlist built at session start.
    pub name: String,
    /// 1-based indices into the library catalog.
    pub tracks: Vec<i64>,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self { name: "session".to_string(), tracks: Vec::new() }
    }
}

/// One track descriptor from the session file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackSpec {
    pub title: String,
    pub artists: Vec<String>,
    pub duration_seconds: u32,
    pub bpm: i32,
    /// "MP3" or "WAV", case-insensitive. Unknown formats fall back to WAV.
    pub format: String,
    /// Bitrate in kbps for MP3, sample rate in Hz for WAV.
    pub extra_param1: u32,
    /// Unused for MP3, bit depth for WAV.
    pub extra_param2: u32,
}

impl Default for TrackSpec {
    fn default() -> Self {
        Self {
            title: String::new(),
            artists: Vec::new(),
            duration_seconds: 0,
            bpm: 0,
            format: "WAV".to_string(),
            extra_param1: 44_100,
            extra_param2: 16,
        }
    }
}
