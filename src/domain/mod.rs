// Domain layer: tool schema vocabulary, execution outcomes and ports.

pub mod model;
pub mod outcome;
pub mod ports;
