use log::{debug, info, warn};

use crate::screen::dimensions::ScreenDimensions;
use crate::screen::preset::{
    parse_screen_preset, split_screen_preset, PresetError, ScreenPreset, DEFAULT_SCREEN_PRESET,
    SCREEN_PRESETS_KEY,
};
use crate::util::display::DisplayMetricsSource;
use crate::util::preferences::Preferences;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetOutcome {
    Applied(ScreenPreset),
    // The stored value was unusable, the default size was written instead
    Fallback(PresetError),
}

impl PresetOutcome {
    pub fn preset(&self) -> ScreenPreset {
        match self {
            PresetOutcome::Applied(preset) => *preset,
            PresetOutcome::Fallback(_) => ScreenPreset::DEFAULT,
        }
    }

    pub fn error(&self) -> Option<&PresetError> {
        match self {
            PresetOutcome::Applied(_) => None,
            PresetOutcome::Fallback(e) => Some(e),
        }
    }
}

pub fn init_screen_dimensions(
    display: Option<&dyn DisplayMetricsSource>,
    prefs: &dyn Preferences,
    dims: &mut ScreenDimensions,
) -> PresetOutcome {
    init_host_screen_dimensions(display, dims);
    init_newton_screen_dimensions(prefs, dims)
}

// Without a usable display dims is left untouched
pub fn init_host_screen_dimensions(
    display: Option<&dyn DisplayMetricsSource>,
    dims: &mut ScreenDimensions,
) {
    let display = match display {
        Some(display) => display,
        None => {
            warn!("init_host_screen_dimensions: no display available");
            return;
        }
    };

    let metrics = match display.display_metrics() {
        Ok(metrics) => metrics,
        Err(e) => {
            warn!("init_host_screen_dimensions: {}", e);
            return;
        }
    };

    dims.set_host(metrics.width_pixels, metrics.height_pixels);
    info!(
        "Host screen size is {}x{}",
        dims.host_width, dims.host_height
    );
}

pub fn init_newton_screen_dimensions(
    prefs: &dyn Preferences,
    dims: &mut ScreenDimensions,
) -> PresetOutcome {
    let value = prefs.get_string(SCREEN_PRESETS_KEY, DEFAULT_SCREEN_PRESET);
    debug!("Current screen preset preference is {:?}", value);

    if let Ok((sw, sh)) = split_screen_preset(&value) {
        debug!("Width from preference is {:?}", sw);
        debug!("Height from preference is {:?}", sh);
    }

    let outcome = match parse_screen_preset(&value) {
        Ok(preset) => PresetOutcome::Applied(preset),
        Err(e) => {
            warn!("{}, using {}", e, ScreenPreset::DEFAULT);
            PresetOutcome::Fallback(e)
        }
    };

    let preset = outcome.preset();
    dims.set_newton(preset.width, preset.height);
    info!(
        "Newton window size is {}x{}",
        dims.newton_width, dims.newton_height
    );

    outcome
}
