//! Well-known setting keys edited by the emulator settings UI.
//!
//! Each [`KnownKey`] pairs a key with the section it is stored under, so the
//! UI can read and write a setting without repeating the section name.

/// A setting key together with the section it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KnownKey {
    pub section: &'static str,
    pub key: &'static str,
}

impl KnownKey {
    const fn new(section: &'static str, key: &'static str) -> Self {
        Self { section, key }
    }

    /// Finds the well-known entry for `key`, if any.
    pub fn lookup(key: &str) -> Option<KnownKey> {
        ALL_KNOWN_KEYS.iter().copied().find(|k| k.key == key)
    }
}

// ── Section names ─────────────────────────────────────────────────────────────

pub const SECTION_CORE: &str = "Core";
pub const SECTION_SYSTEM: &str = "System";
pub const SECTION_DATA_STORAGE: &str = "Data Storage";
pub const SECTION_RENDERER: &str = "Renderer";
pub const SECTION_LAYOUT: &str = "Layout";
pub const SECTION_AUDIO: &str = "Audio";

// ── Core ──────────────────────────────────────────────────────────────────────

pub const USE_CPU_JIT: KnownKey = KnownKey::new(SECTION_CORE, "use_cpu_jit");

// ── System / storage ──────────────────────────────────────────────────────────

pub const IS_NEW_3DS: KnownKey = KnownKey::new(SECTION_SYSTEM, "is_new_3ds");
pub const SYSTEM_REGION: KnownKey = KnownKey::new(SECTION_SYSTEM, "region_value");
pub const USE_VIRTUAL_SD: KnownKey = KnownKey::new(SECTION_DATA_STORAGE, "use_virtual_sd");

// ── Renderer ──────────────────────────────────────────────────────────────────

pub const USE_GLES: KnownKey = KnownKey::new(SECTION_RENDERER, "use_gles");
pub const USE_HW_RENDERER: KnownKey = KnownKey::new(SECTION_RENDERER, "use_hw_renderer");
pub const USE_HW_SHADER: KnownKey = KnownKey::new(SECTION_RENDERER, "use_hw_shader");
pub const USE_SHADER_JIT: KnownKey = KnownKey::new(SECTION_RENDERER, "use_shader_jit");
pub const SHADERS_ACCURATE_MUL: KnownKey = KnownKey::new(SECTION_RENDERER, "shaders_accurate_mul");
pub const SHADERS_ACCURATE_GS: KnownKey = KnownKey::new(SECTION_RENDERER, "shaders_accurate_gs");
pub const RESOLUTION_FACTOR: KnownKey = KnownKey::new(SECTION_RENDERER, "resolution_factor");
pub const USE_FRAME_LIMIT: KnownKey = KnownKey::new(SECTION_RENDERER, "use_frame_limit");
pub const FRAME_LIMIT: KnownKey = KnownKey::new(SECTION_RENDERER, "frame_limit");

// ── Layout ────────────────────────────────────────────────────────────────────

pub const LAYOUT_OPTION: KnownKey = KnownKey::new(SECTION_LAYOUT, "layout_option");

// ── Audio ─────────────────────────────────────────────────────────────────────

pub const ENABLE_DSP_LLE: KnownKey = KnownKey::new(SECTION_AUDIO, "enable_dsp_lle");
pub const AUDIO_STRETCHING: KnownKey = KnownKey::new(SECTION_AUDIO, "enable_audio_stretching");
pub const AUDIO_VOLUME: KnownKey = KnownKey::new(SECTION_AUDIO, "volume");
pub const AUDIO_ENGINE: KnownKey = KnownKey::new(SECTION_AUDIO, "output_engine");
pub const AUDIO_DEVICE: KnownKey = KnownKey::new(SECTION_AUDIO, "output_device");

/// Every well-known key, grouped by section.
pub const ALL_KNOWN_KEYS: [KnownKey; 19] = [
    USE_CPU_JIT,
    IS_NEW_3DS,
    SYSTEM_REGION,
    USE_VIRTUAL_SD,
    USE_GLES,
    USE_HW_RENDERER,
    USE_HW_SHADER,
    USE_SHADER_JIT,
    SHADERS_ACCURATE_MUL,
    SHADERS_ACCURATE_GS,
    RESOLUTION_FACTOR,
    USE_FRAME_LIMIT,
    FRAME_LIMIT,
    LAYOUT_OPTION,
    ENABLE_DSP_LLE,
    AUDIO_STRETCHING,
    AUDIO_VOLUME,
    AUDIO_ENGINE,
    AUDIO_DEVICE,
];
