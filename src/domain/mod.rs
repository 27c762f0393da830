// Domain layer: numerology models and ports (interfaces). No HTTP or storage concerns here.

pub mod model;
pub mod ports;
