use sdl2::Sdl;
use sdl2::VideoSubsystem;

use log::debug;

use crate::util::display::SdlDisplay;

pub struct SDLContainer {
    _context: Sdl,
    video: VideoSubsystem,
}

impl SDLContainer {
    pub fn new() -> Result<SDLContainer, String> {
        let context = sdl2::init()?;
        let video = context.video()?;
        debug!("SDL video driver: {}", video.current_video_driver());

        Ok(SDLContainer {
            _context: context,
            video,
        })
    }

    pub fn display(&self, index: i32) -> SdlDisplay {
        SdlDisplay::new(self.video.clone(), index)
    }
}
