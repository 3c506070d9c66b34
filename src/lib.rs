//! rotconv - rotation representation converter
//!
//! Enter a rotation in any one representation and read it back in all of
//! them: rotation matrix, rotation vector, axis-angle, quaternion, and
//! Euler angles (mobile/intrinsic and fixed/extrinsic, all six orders).
//!
//! The math lives in `rotconv_math`, the conversion pipeline and state in
//! `rotconv_core`; this crate adds configuration and the report binary.

pub mod config;
pub mod report;

pub use rotconv_core::{
    convert_all, overwrite_input, reset, AngleUnit, EulerOrder, InputState, Matrix, OutputState,
    Representation,
};
