use std::{
    env,
    path::{Path, PathBuf},
};

use super::schema::SessionSettings;

/// Session loading helpers.
///
/// `SessionSettings::load` tries environment variables first (prefix
/// `PLATTER__`), then an optional session file and falls back to struct
/// defaults.
impl SessionSettings {
    /// Load settings from environment and an optional session file.
    pub fn load(path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let session_path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => resolve_session_path(),
        };

        let mut builder = ::config::Config::builder();

        if let Some(path) = &session_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("PLATTER")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: SessionSettings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.cache.capacity == 0 {
            return Err("cache.capacity must be >= 1".to_string());
        }
        if self.mixer.bpm_tolerance < 0 {
            return Err("mixer.bpm_tolerance must be >= 0".to_string());
        }
        Ok(())
    }
}

/// Resolve the session path from `PLATTER_CONFIG_PATH` or XDG defaults.
pub fn resolve_session_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("PLATTER_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_session_path()
}

/// Compute the default session path under `$XDG_CONFIG_HOME/platter/session.toml`
/// or `~/.config/platter/session.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_session_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("platter").join("session.toml"))
}
