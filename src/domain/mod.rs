// Domain layer: core models and ports (interfaces). No dependencies beyond
// std, chrono and serde.

pub mod model;
pub mod ports;
