/// Stage-by-stage behaviour.
pub mod stages;
