// Domain layer: per-request values and the normalized upstream shapes.

pub mod model;
