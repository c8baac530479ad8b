// Domain layer: room model, persisted record codec, and the storage port.

pub mod model;
pub mod ports;
pub mod record;
