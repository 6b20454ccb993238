use super::load::{default_config_path, default_log_dir, resolve_config_path};
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
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

/// Every environment key that can override a setting.
const SETTING_KEYS: [&str; 7] = [
    "ALLEGRO__AUDIO__INITIAL_VOLUME",
    "ALLEGRO__PLAYBACK__AUTO_ADVANCE",
    "ALLEGRO__UI__TITLE_TEXT",
    "ALLEGRO__UI__TICK_MS",
    "ALLEGRO__UI__MAX_MESSAGES",
    "ALLEGRO__LOGGING__FILTER",
    "ALLEGRO__LOGGING__DIR",
];

/// Clear ambient overrides so only the config file is read.
fn clear_setting_overrides() -> Vec<EnvGuard> {
    SETTING_KEYS.into_iter().map(EnvGuard::remove).collect()
}

const FULL_CONFIG: &str = r#"
[audio]
initial_volume = 60

[playback]
auto_advance = true

[ui]
title_text = "hello"
tick_ms = 30
max_messages = 5

[logging]
filter = "allegro=debug"
dir = "/tmp/allegro-log-dir"
"#;

#[test]
fn defaults_match_the_classic_player() {
    let s = Settings::default();
    assert_eq!(s.audio.initial_volume, 100.0);
    assert_eq!(s.ui.title_text, "BU Music Player");
    assert_eq!(s.ui.tick_ms, 50);
    assert!(!s.playback.auto_advance);
    assert_eq!(s.logging.filter, "info");
    assert!(s.validate().is_ok());
}

#[test]
fn resolve_config_path_prefers_allegro_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("ALLEGRO_CONFIG_PATH", "/tmp/allegro-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/allegro-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home")
            .join("allegro")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("allegro")
            .join("config.toml")
    );
}

#[test]
fn log_dir_uses_xdg_state_home_then_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_STATE_HOME", "/tmp/xdg-state");
    assert_eq!(
        default_log_dir().unwrap(),
        PathBuf::from("/tmp/xdg-state").join("allegro")
    );

    let _g2 = EnvGuard::remove("XDG_STATE_HOME");
    let _g3 = EnvGuard::set("HOME", "/tmp/home-dir");
    assert_eq!(
        default_log_dir().unwrap(),
        PathBuf::from("/tmp/home-dir/.local/state/allegro")
    );
}

#[test]
fn explicit_log_dir_wins() {
    let mut s = Settings::default();
    s.logging.dir = Some(PathBuf::from("/var/tmp/allegro-logs"));
    assert_eq!(s.log_dir(), PathBuf::from("/var/tmp/allegro-logs"));
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, FULL_CONFIG).unwrap();

    let _g1 = EnvGuard::set("ALLEGRO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _clear = clear_setting_overrides();

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.initial_volume, 60.0);
    assert!(s.playback.auto_advance);
    assert_eq!(s.ui.title_text, "hello");
    assert_eq!(s.ui.tick_ms, 30);
    assert_eq!(s.ui.max_messages, 5);
    assert_eq!(s.logging.filter, "allegro=debug");
    assert_eq!(s.log_dir(), PathBuf::from("/tmp/allegro-log-dir"));
    assert!(s.validate().is_ok());
}

#[test]
fn cleared_overrides_do_not_leak_into_file_settings() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, FULL_CONFIG).unwrap();

    let _g1 = EnvGuard::set("ALLEGRO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("ALLEGRO__UI__TICK_MS", "999");
    let _g3 = EnvGuard::set("ALLEGRO__LOGGING__FILTER", "trace");
    assert_eq!(Settings::load().unwrap().ui.tick_ms, 999);

    let _clear = clear_setting_overrides();
    let s = Settings::load().unwrap();
    assert_eq!(s.ui.tick_ms, 30);
    assert_eq!(s.logging.filter, "allegro=debug");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
initial_volume = 60
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ALLEGRO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _clear = clear_setting_overrides();
    let _g2 = EnvGuard::set("ALLEGRO__AUDIO__INITIAL_VOLUME", "30");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.initial_volume, 30.0);
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("nope.toml");

    let _g1 = EnvGuard::set("ALLEGRO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _clear = clear_setting_overrides();

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.initial_volume, 100.0);
    assert_eq!(s.ui.title_text, "BU Music Player");
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.audio.initial_volume = 120.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.ui.tick_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.ui.max_messages = 0;
    assert!(s.validate().is_err());
}
