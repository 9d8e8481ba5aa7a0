use std::fmt;
use std::str::FromStr;

// Preference key holding the Newton screen size
pub const SCREEN_PRESETS_KEY: &str = "screenpresets";
pub const DEFAULT_SCREEN_PRESET: &str = "320 x 480";

const SEPARATOR: char = 'x';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPreset {
    pub width: i32,
    pub height: i32,
}

impl ScreenPreset {
    pub const DEFAULT: ScreenPreset = ScreenPreset {
        width: 320,
        height: 480,
    };

    pub fn new(width: i32, height: i32) -> ScreenPreset {
        ScreenPreset { width, height }
    }
}

impl fmt::Display for ScreenPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

impl FromStr for ScreenPreset {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_screen_preset(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    MissingSeparator { value: String },
    InvalidWidth { token: String },
    InvalidHeight { token: String },
    NonPositive { width: i32, height: i32 },
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::MissingSeparator { value } => {
                write!(f, "invalid preference format {:?}: no '{}' separator", value, SEPARATOR)
            }
            PresetError::InvalidWidth { token } => {
                write!(f, "invalid preference format: width {:?} is not a number", token)
            }
            PresetError::InvalidHeight { token } => {
                write!(f, "invalid preference format: height {:?} is not a number", token)
            }
            PresetError::NonPositive { width, height } => {
                write!(f, "screen size {}x{} must be positive", width, height)
            }
        }
    }
}

impl std::error::Error for PresetError {}

// Only the first `x` counts, "1x0 x 480" splits after the `1`
pub fn split_screen_preset(value: &str) -> Result<(&str, &str), PresetError> {
    match value.split_once(SEPARATOR) {
        Some((sw, sh)) => Ok((sw.trim(), sh.trim())),
        None => Err(PresetError::MissingSeparator {
            value: value.to_string(),
        }),
    }
}

pub fn parse_screen_preset(value: &str) -> Result<ScreenPreset, PresetError> {
    let (sw, sh) = split_screen_preset(value)?;

    let width: i32 = sw.parse().map_err(|_| PresetError::InvalidWidth {
        token: sw.to_string(),
    })?;
    let height: i32 = sh.parse().map_err(|_| PresetError::InvalidHeight {
        token: sh.to_string(),
    })?;

    if width <= 0 || height <= 0 {
        return Err(PresetError::NonPositive { width, height });
    }

    Ok(ScreenPreset { width, height })
}
