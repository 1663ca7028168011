// Domain layer: result models and ports (interfaces).

pub mod model;
pub mod ports;
