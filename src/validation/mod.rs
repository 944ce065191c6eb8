//! Validation policy engine

pub mod bounds;
pub mod policy;

#[cfg(test)]
mod tests;

pub use bounds::{invalid_fields, is_valid, valid_range};
pub use policy::{Validation, validate, validate_frame_count};
