pub mod display;
pub mod preferences;
#[cfg(feature = "sdl")]
pub mod sdl_container;
