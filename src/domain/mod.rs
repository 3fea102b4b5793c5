// Domain layer: fixture records and the ports fixtures write through.

pub mod model;
pub mod ports;
