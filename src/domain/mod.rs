// Domain layer: validated inputs, results and the ports the shells implement.

pub mod model;
pub mod ports;
