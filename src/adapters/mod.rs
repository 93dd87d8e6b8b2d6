// Adapters layer: concrete implementations for external systems (geocoding, prediction backends).

pub mod geocoding;
pub mod prediction;
