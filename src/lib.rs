pub mod screen;
pub mod util;

pub use screen::dimensions::{ScreenDimensions, UNSET};
pub use screen::initializer::{
    init_host_screen_dimensions, init_newton_screen_dimensions, init_screen_dimensions,
    PresetOutcome,
};
pub use screen::preset::{
    parse_screen_preset, PresetError, ScreenPreset, DEFAULT_SCREEN_PRESET, SCREEN_PRESETS_KEY,
};
