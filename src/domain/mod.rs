// Domain layer: the shape value and the capability it implements.

pub mod model;
pub mod ports;
