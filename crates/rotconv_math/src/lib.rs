//! Rotation Mathematics Library
//!
//! This crate provides the numeric core for the rotconv tool: a small dense
//! matrix type and pure conversion functions between the six common
//! representations of a 3D rotation.
//!
//! ## Core Types
//!
//! - [`Matrix`] - row-major 2D float container with arithmetic operators
//! - [`MatrixError`] - typed errors for malformed matrix operations
//! - [`EulerOrder`] - the six axis orderings for Euler angles
//!
//! ## Modules
//!
//! - [`rotation`] - conversions between rotation matrix, rotation vector,
//!   axis-angle, quaternion, and mobile/fixed Euler angles
//! - [`transform`] - 4x4 homogeneous transform and projection builders

mod matrix;
pub mod rotation;
pub mod transform;

pub use matrix::{Matrix, MatrixError};
pub use rotation::EulerOrder;
