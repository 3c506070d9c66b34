//! Representation aggregator for the rotconv tool
//!
//! The presentation layer edits one representation at a time; this crate
//! canonicalizes the active representation to a 3x3 rotation matrix and
//! fans it back out to every representation, including all six Euler
//! orderings for both the mobile and fixed conventions.
//!
//! - [`Representation`] - selector for the active input representation
//! - [`InputState`] / [`OutputState`] - the editable and derived value sets
//! - [`convert_all`] - the once-per-frame conversion pipeline
//! - [`AngleUnit`] - degree/radian display helper for the UI layer

mod convert;
mod state;

pub use convert::{convert_all, overwrite_input, reset};
pub use state::{AngleUnit, InputState, OutputState, Representation};

// Re-export the math types callers need to fill the state with.
pub use rotconv_math::{EulerOrder, Matrix};
