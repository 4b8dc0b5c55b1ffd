//! Obstacle field storage and generation
//!
//! The field is a fixed-capacity structure-of-arrays: each attribute of an
//! asteroid lives in its own contiguous array indexed by slot. A slot whose
//! radius is zero or negative is unoccupied.

mod generator;
mod obstacle_field;

pub use generator::{FieldConfig, FieldGenerator, GeneratedField};
pub use obstacle_field::{ObstacleField, ObstacleRecord};

/// Field population and generation errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Slot index beyond the field's fixed capacity
    #[error("Slot {slot} is out of range for a field of capacity {capacity}")]
    SlotOutOfRange {
        /// Requested slot
        slot: usize,
        /// Field capacity
        capacity: usize,
    },

    /// Generation parameters cannot describe a field
    #[error("Invalid field layout: {0}")]
    InvalidLayout(String),
}
