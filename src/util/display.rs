use std::fmt;

#[cfg(feature = "sdl")]
use sdl2::VideoSubsystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMetrics {
    pub width_pixels: i32,
    pub height_pixels: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    NoSuchDisplay { index: i32, count: i32 },
    Unavailable(String),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::NoSuchDisplay { index, count } => {
                write!(f, "display {} requested but only {} present", index, count)
            }
            DisplayError::Unavailable(reason) => write!(f, "display metrics unavailable: {}", reason),
        }
    }
}

impl std::error::Error for DisplayError {}

// Queried on every call, a rotated display reports its new size
pub trait DisplayMetricsSource {
    fn display_metrics(&self) -> Result<DisplayMetrics, DisplayError>;
}

pub fn check_display_index(index: i32, count: i32) -> Result<(), DisplayError> {
    if index < 0 || index >= count {
        return Err(DisplayError::NoSuchDisplay { index, count });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub struct FixedDisplay {
    metrics: DisplayMetrics,
}

impl FixedDisplay {
    pub fn new(width_pixels: i32, height_pixels: i32) -> FixedDisplay {
        FixedDisplay {
            metrics: DisplayMetrics {
                width_pixels,
                height_pixels,
            },
        }
    }
}

impl DisplayMetricsSource for FixedDisplay {
    fn display_metrics(&self) -> Result<DisplayMetrics, DisplayError> {
        Ok(self.metrics)
    }
}

#[cfg(feature = "sdl")]
pub struct SdlDisplay {
    video: VideoSubsystem,
    index: i32,
}

#[cfg(feature = "sdl")]
impl SdlDisplay {
    pub fn new(video: VideoSubsystem, index: i32) -> SdlDisplay {
        SdlDisplay { video, index }
    }
}

#[cfg(feature = "sdl")]
impl DisplayMetricsSource for SdlDisplay {
    fn display_metrics(&self) -> Result<DisplayMetrics, DisplayError> {
        let count = self
            .video
            .num_video_displays()
            .map_err(DisplayError::Unavailable)?;
        check_display_index(self.index, count)?;

        let mode = self
            .video
            .current_display_mode(self.index)
            .map_err(DisplayError::Unavailable)?;

        Ok(DisplayMetrics {
            width_pixels: mode.w,
            height_pixels: mode.h,
        })
    }
}
