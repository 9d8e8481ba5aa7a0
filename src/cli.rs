// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use newton_screen::ScreenPreset;

#[derive(Parser, Debug, Clone)]
#[command(name = "newton-screen")]
#[command(about = "Resolve host and Newton screen sizes", long_about = None)]
pub struct Cli {
    /// JSON preferences file
    #[arg(long, default_value = "newton-prefs.json")]
    pub prefs: PathBuf,

    /// Do not query a host display
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Index of the host display to query
    #[arg(long, default_value = "0")]
    pub display: i32,

    /// Use this host size ("<width> x <height>") instead of querying a display
    #[arg(long = "host-size")]
    pub host_size: Option<ScreenPreset>,

    /// Store a new Newton screen preset ("<width> x <height>") and apply it
    #[arg(long = "set-preset")]
    pub set_preset: Option<ScreenPreset>,
}
