// Domain layer: address value types and the ports (random source, transform)
// the core functions are written against.

pub mod model;
pub mod ports;
