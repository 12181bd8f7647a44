// Adapters layer: concrete sleep models and the time formatter.

pub mod clock;
pub mod linear_model;
