pub mod dimensions;
pub mod render;
