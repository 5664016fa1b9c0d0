//! Domain layer: models, errors and ports, free of I/O.

pub mod errors;
pub mod models;
pub mod ports;
