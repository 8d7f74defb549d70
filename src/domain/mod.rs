// Domain layer: the record model and the ports the server depends on.

pub mod model;
pub mod ports;
