use super::load::{default_session_path, resolve_session_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_session_path_prefers_platter_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("PLATTER_CONFIG_PATH", "/tmp/platter-test-session.toml");
    assert_eq!(
        resolve_session_path().unwrap(),
        std::path::PathBuf::from("/tmp/platter-test-session.toml")
    );
}

#[test]
fn default_session_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_session_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("platter")
            .join("session.toml")
    );
}

#[test]
fn default_session_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_session_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("platter")
            .join("session.toml")
    );
}

#[test]
fn settings_default_to_a_usable_session() {
    let s = SessionSettings::default();
    assert_eq!(s.cache.capacity, 4);
    assert!(!s.mixer.auto_sync);
    assert_eq!(s.mixer.bpm_tolerance, 8);
    assert_eq!(s.playlist.name, "session");
    assert!(s.playlist.tracks.is_empty());
    assert!(s.library.is_empty());
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_session_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let session_path = dir.path().join("session.toml");
    std::fs::write(
        &session_path,
        r#"
[cache]
capacity = 2

[mixer]
auto_sync = true
bpm_tolerance = 5

[playlist]
name = "warmup"
tracks = [1, 2, 2]

[[library]]
title = "X"
artists = ["One"]
duration_seconds = 180
bpm = 120
format = "mp3"
extra_param1 = 320
extra_param2 = 0

[[library]]
title = "Y"
artists = ["Two", "Three"]
duration_seconds = 240
bpm = 128
format = "WAV"
extra_param1 = 48000
extra_param2 = 24
"#,
    )
    .unwrap();

    let s = SessionSettings::load(Some(&session_path)).unwrap();
    assert_eq!(s.cache.capacity, 2);
    assert!(s.mixer.auto_sync);
    assert_eq!(s.mixer.bpm_tolerance, 5);
    assert_eq!(s.playlist.name, "warmup");
    assert_eq!(s.playlist.tracks, vec![1, 2, 2]);
    assert_eq!(s.library.len(), 2);
    assert_eq!(s.library[0].title, "X");
    assert_eq!(s.library[0].format, "mp3");
    assert_eq!(s.library[1].artists, vec!["Two".to_string(), "Three".to_string()]);
    assert_eq!(s.library[1].extra_param1, 48_000);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_session_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let session_path = dir.path().join("session.toml");
    std::fs::write(
        &session_path,
        r#"
[cache]
capacity = 4
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("PLATTER__CACHE__CAPACITY", "9");

    let s = SessionSettings::load(Some(&session_path)).unwrap();
    assert_eq!(s.cache.capacity, 9);
}

#[test]
fn validate_rejects_zero_capacity_and_negative_tolerance() {
    let mut s = SessionSettings::default();
    s.cache.capacity = 0;
    assert!(s.validate().is_err());

    let mut s = SessionSettings::default();
    s.mixer.bpm_tolerance = -1;
    assert!(s.validate().is_err());
}
