//! Core value types

pub mod components;
pub mod config;
pub mod field;
pub mod fraction;
pub mod frame_count;

#[cfg(test)]
mod tests;

pub use components::Components;
pub use config::{TimecodeProperties, TimecodePropertiesBuilder};
pub use field::TimecodeField;
pub use fraction::Fraction;
pub use frame_count::{FrameCount, FrameCountValue};
