pub mod dimensions;
pub mod initializer;
pub mod preset;
