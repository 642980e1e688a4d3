// Domain layer: probe outcome model and the ports the probe depends on.

pub mod model;
pub mod ports;
