// Domain layer: value types and ports. No codec or CLI dependencies.

pub mod model;
pub mod ports;
