// Marks a dimension that has not been determined yet
pub const UNSET: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenDimensions {
    // Host size depends on the current orientation
    pub host_width: i32,
    pub host_height: i32,
    pub newton_width: i32,
    pub newton_height: i32,
}

impl ScreenDimensions {
    pub fn new() -> ScreenDimensions {
        ScreenDimensions {
            host_width: UNSET,
            host_height: UNSET,
            newton_width: UNSET,
            newton_height: UNSET,
        }
    }

    #[inline(always)]
    pub fn set_host(&mut self, width: i32, height: i32) {
        self.host_width = width;
        self.host_height = height;
    }

    #[inline(always)]
    pub fn set_newton(&mut self, width: i32, height: i32) {
        self.newton_width = width;
        self.newton_height = height;
    }

    pub fn is_host_known(&self) -> bool {
        self.host_width != UNSET && self.host_height != UNSET
    }

    pub fn is_newton_known(&self) -> bool {
        self.newton_width != UNSET && self.newton_height != UNSET
    }
}

impl Default for ScreenDimensions {
    fn default() -> Self {
        ScreenDimensions::new()
    }
}
