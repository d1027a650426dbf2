// Domain layer: version models and the ports the extractors and config plug into.

pub mod model;
pub mod ports;
