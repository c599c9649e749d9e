//! Integration tests for file-backed settings load/save.
//!
//! These tests go through the public API of `emu-settings-store` against real
//! files in a temporary directory.  The path provider is mocked with
//! `mockall` where a test needs to check how often it is consulted.

use std::fs;
use std::path::PathBuf;

use mockall::mock;
use settings_core::{keys, SettingValue, SettingsFile};
use settings_store::infrastructure::log_sink::mock::RecordingSink;
use settings_store::{
    load, load_from, save, save_to, ConfigPathProvider, FixedPath, SettingsError, SettingsSession,
};

mock! {
    pub Paths {}
    impl ConfigPathProvider for Paths {
        fn config_file(&self) -> Result<PathBuf, SettingsError>;
    }
}

/// Installs a test-friendly `tracing` subscriber once per test binary.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

const CONFIG: &str = "\
orphan = 1
[Core]
use_cpu_jit = True

[Renderer]
resolution_factor = 10
use_hw_renderer = true
frame_limit = 100.0
no_equals_sign
a = b = c

[Audio]
volume = 0.5
output_device =

[Empty]
";

// ── Loading ───────────────────────────────────────────────────────────────────

#[test]
fn test_load_real_file_types_each_value() {
    // Arrange
    init_tracing();
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.ini");
    fs::write(&path, CONFIG).expect("write fixture");
    let sink = RecordingSink::new();

    // Act
    let settings = load_from(&path, &sink);

    // Assert
    let value = |section: &str, key: &str| settings.get(section, key).map(|s| s.value().clone());
    assert_eq!(value("Core", "use_cpu_jit"), Some(SettingValue::Bool(true)));
    assert_eq!(value("Renderer", "resolution_factor"), Some(SettingValue::Int(10)));
    assert_eq!(
        value("Renderer", "use_hw_renderer"),
        Some(SettingValue::Str("true".to_string()))
    );
    assert_eq!(value("Renderer", "frame_limit"), Some(SettingValue::Float(100.0)));
    assert_eq!(value("Audio", "volume"), Some(SettingValue::Float(0.5)));
    assert!(settings.section("Empty").is_some());

    // orphan, no_equals_sign, a = b = c
    assert_eq!(sink.warnings().len(), 3);
    assert!(sink.errors().is_empty());
}

#[test]
fn test_load_nonexistent_file_yields_empty_map() {
    init_tracing();
    let dir = tempfile::tempdir().expect("temp dir");
    let sink = RecordingSink::new();

    let settings = load(&FixedPath::new(dir.path().join("nope.ini")), &sink);

    assert!(settings.is_empty());
    assert_eq!(sink.errors().len(), 1);
}

// ── Saving ────────────────────────────────────────────────────────────────────

#[test]
fn test_save_after_load_drops_empty_sections_and_values() {
    // Arrange
    init_tracing();
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.ini");
    fs::write(&path, CONFIG).expect("write fixture");
    let sink = RecordingSink::new();
    let settings = load_from(&path, &sink);

    // Act
    assert!(save_to(&path, &settings, &sink));

    // Assert
    let written = fs::read_to_string(&path).expect("read back");
    assert_eq!(
        written,
        "[Audio]\nvolume = 0.5\n\
         [Core]\nuse_cpu_jit = True\n\
         [Renderer]\nframe_limit = 100.0\nresolution_factor = 10\nuse_hw_renderer = true\n"
    );
}

#[test]
fn test_save_then_load_round_trips_every_known_key() {
    init_tracing();
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = FixedPath::new(dir.path().join("emu").join("config.ini"));
    let sink = RecordingSink::new();

    let mut settings = SettingsFile::new();
    for (i, known) in keys::ALL_KNOWN_KEYS.iter().enumerate() {
        let value = match i % 4 {
            0 => SettingValue::Int(i as i64 - 5),
            1 => SettingValue::Float(i as f32 / 4.0),
            2 => SettingValue::Bool(i % 3 == 0),
            _ => SettingValue::Str(format!("choice-{i}")),
        };
        settings.put_known(*known, value);
    }

    assert!(save(&paths, &settings, &sink));
    let loaded = load(&paths, &sink);

    assert_eq!(loaded, settings);
    assert!(sink.is_empty(), "unexpected log output: {:?}", sink.records());
}

#[test]
fn test_save_with_unresolvable_path_logs_and_returns_false() {
    let mut paths = MockPaths::new();
    paths
        .expect_config_file()
        .times(1)
        .returning(|| Err(SettingsError::NoPlatformConfigDir));
    let sink = RecordingSink::new();

    let saved = save(&paths, &SettingsFile::new(), &sink);

    assert!(!saved);
    assert_eq!(sink.errors().len(), 1);
    assert!(sink.errors()[0].contains("platform config directory"));
}

// ── Session ───────────────────────────────────────────────────────────────────

#[test]
fn test_session_resolves_path_once_per_load_and_save() {
    // Arrange: open + save + reload = three resolutions
    init_tracing();
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.ini");
    let mut paths = MockPaths::new();
    paths
        .expect_config_file()
        .times(3)
        .returning(move || Ok(path.clone()));

    // Act
    let mut session = SettingsSession::open(paths, RecordingSink::new());
    session.put_known(keys::AUDIO_VOLUME, 0.25_f32);
    assert!(session.save());
    session.reload();

    // Assert
    assert_eq!(
        session.get_known(keys::AUDIO_VOLUME),
        Some(&SettingValue::Float(0.25))
    );
}

#[test]
fn test_session_snapshot_reflects_ui_edits() {
    use settings_store::infrastructure::ui_bridge::SettingEditDto;

    init_tracing();
    let dir = tempfile::tempdir().expect("temp dir");
    let mut session = SettingsSession::open(
        FixedPath::new(dir.path().join("config.ini")),
        RecordingSink::new(),
    );

    session.apply_edits(vec![SettingEditDto {
        section: "Layout".to_string(),
        key: "layout_option".to_string(),
        value: SettingValue::Int(2),
    }]);

    assert!(session.is_dirty());
    let snapshot = session.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].name, "Layout");
    assert_eq!(snapshot[0].settings[0].value, SettingValue::Int(2));
}
