// Domain layer: options model and the ports configuration sources implement.

pub mod model;
pub mod ports;
