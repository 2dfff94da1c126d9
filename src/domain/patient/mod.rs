//! Patient module - what the intake form collects.

mod input;
mod sex;

pub use input::{FieldBounds, InputBounds, PatientInput};
pub use sex::Sex;
