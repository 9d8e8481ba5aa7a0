mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use newton_screen::util::display::{DisplayMetricsSource, FixedDisplay};
use newton_screen::util::preferences::{JsonPreferences, Preferences};
use newton_screen::{
    init_newton_screen_dimensions, init_screen_dimensions, ScreenDimensions, SCREEN_PRESETS_KEY,
};

use cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut prefs = JsonPreferences::load(&cli.prefs)
        .with_context(|| format!("loading preferences from {}", cli.prefs.display()))?;

    let display = host_display(&cli);

    let mut dims = ScreenDimensions::new();
    let outcome = init_screen_dimensions(display.as_deref(), &prefs, &mut dims);
    if let Some(e) = outcome.error() {
        warn!("Stored screen preset ignored: {}", e);
    }

    if let Some(preset) = cli.set_preset {
        prefs.set_string(SCREEN_PRESETS_KEY, &preset.to_string());
        prefs
            .save()
            .with_context(|| format!("saving preferences to {}", prefs.path().display()))?;
        info!("Screen preset changed to {}", preset);
        init_newton_screen_dimensions(&prefs, &mut dims);
    }

    println!("host:   {} x {}", dims.host_width, dims.host_height);
    println!("newton: {} x {}", dims.newton_width, dims.newton_height);

    Ok(())
}

fn host_display(cli: &Cli) -> Option<Box<dyn DisplayMetricsSource>> {
    if let Some(size) = cli.host_size {
        return Some(Box::new(FixedDisplay::new(size.width, size.height)));
    }
    if cli.headless {
        return None;
    }
    sdl_display(cli.display)
}

#[cfg(feature = "sdl")]
fn sdl_display(index: i32) -> Option<Box<dyn DisplayMetricsSource>> {
    use newton_screen::util::sdl_container::SDLContainer;

    match SDLContainer::new() {
        Ok(sdl) => Some(Box::new(sdl.display(index))),
        Err(e) => {
            warn!("SDL init failed: {}", e);
            None
        }
    }
}

#[cfg(not(feature = "sdl"))]
fn sdl_display(_index: i32) -> Option<Box<dyn DisplayMetricsSource>> {
    warn!("Built without the sdl feature, host screen size stays unset");
    None
}
