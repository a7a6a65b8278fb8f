// Domain layer: request/response models and the ports to external services.

pub mod model;
pub mod ports;
