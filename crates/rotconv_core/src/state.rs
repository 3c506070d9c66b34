//! Input and output value containers
//!
//! Values are stored as small matrices used as vectors, with angles always
//! in radians. Degree/radian handling is a display concern and lives in
//! [`AngleUnit`].

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;

use rotconv_math::{EulerOrder, Matrix};

/// Which representation the user is currently editing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    RotationMatrix,
    RotationVector,
    AxisAngle,
    Quaternion,
    EulerMobile,
    EulerFixed,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Representation::RotationMatrix => "rotation matrix",
            Representation::RotationVector => "rotation vector",
            Representation::AxisAngle => "axis-angle",
            Representation::Quaternion => "quaternion",
            Representation::EulerMobile => "euler (mobile)",
            Representation::EulerFixed => "euler (fixed)",
        };
        f.write_str(name)
    }
}

/// The per-representation values the user edits, plus the active selector.
///
/// Only the active representation's values feed the conversion; the other
/// slots hold whatever the user last typed (possibly stale).
#[derive(Clone, Debug, PartialEq)]
pub struct InputState {
    pub active: Representation,
    pub rotation_matrix: Matrix,
    /// 3x1, axis scaled by angle (radians)
    pub rotation_vector: Matrix,
    /// 4x1: axis xyz, then angle (radians)
    pub axis_angle: Matrix,
    /// 4x1: x, y, z, w
    pub quaternion: Matrix,
    pub mobile_euler_order: EulerOrder,
    /// 3x1 angles in radians, labeled per axis
    pub mobile_euler_angle: Matrix,
    pub fixed_euler_order: EulerOrder,
    /// 3x1 angles in radians, labeled per axis
    pub fixed_euler_angle: Matrix,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            active: Representation::RotationMatrix,
            rotation_matrix: Matrix::identity(3),
            rotation_vector: zeros(3, 1),
            axis_angle: zeros(4, 1),
            quaternion: identity_quaternion(),
            mobile_euler_order: EulerOrder::Xyz,
            mobile_euler_angle: zeros(3, 1),
            fixed_euler_order: EulerOrder::Xyz,
            fixed_euler_angle: zeros(3, 1),
        }
    }
}

impl InputState {
    /// Restore every slot to the identity rotation.
    pub fn reset(&mut self) {
        *self = InputState::default();
    }
}

/// Every representation derived from the canonical matrix, including all
/// six Euler orderings for each convention.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputState {
    pub rotation_matrix: Matrix,
    /// 3x1, axis scaled by angle (radians)
    pub rotation_vector: Matrix,
    /// 4x1: axis xyz, then angle (radians)
    pub axis_angle: Matrix,
    /// 4x1: x, y, z, w
    pub quaternion: Matrix,
    /// Indexed by the position of the order in [`EulerOrder::ALL`]
    pub mobile_euler_angle: [Matrix; 6],
    pub fixed_euler_angle: [Matrix; 6],
}

impl Default for OutputState {
    fn default() -> Self {
        Self {
            rotation_matrix: Matrix::identity(3),
            rotation_vector: zeros(3, 1),
            axis_angle: zeros(4, 1),
            quaternion: identity_quaternion(),
            mobile_euler_angle: std::array::from_fn(|_| zeros(3, 1)),
            fixed_euler_angle: std::array::from_fn(|_| zeros(3, 1)),
        }
    }
}

impl OutputState {
    /// Restore every slot to the identity rotation.
    pub fn reset(&mut self) {
        *self = OutputState::default();
    }
}

/// Degree/radian formatting for the presentation layer.
///
/// The core always stores radians; this helper converts at the display
/// boundary and carries the widget parameters (range, format, drag speed)
/// that differ between the two units.
#[derive(Clone, Copy, Debug)]
pub struct AngleUnit {
    pub is_degree: bool,
}

impl Default for AngleUnit {
    fn default() -> Self {
        Self { is_degree: true }
    }
}

impl AngleUnit {
    pub fn angle_range(&self) -> f32 {
        if self.is_degree {
            360.0
        } else {
            2.0 * PI
        }
    }

    pub fn angle_format(&self) -> &'static str {
        if self.is_degree {
            "%.1f"
        } else {
            "%.3f"
        }
    }

    pub fn angle_drag_speed(&self) -> f32 {
        if self.is_degree {
            1.0
        } else {
            0.01
        }
    }

    /// Radians to the displayed unit.
    pub fn display(&self, rad: f32) -> f32 {
        if self.is_degree {
            rad * 360.0 / (2.0 * PI)
        } else {
            rad
        }
    }

    /// A displayed angle back to radians.
    pub fn store_angle(&self, displayed: f32) -> f32 {
        if self.is_degree {
            displayed * 2.0 * PI / 360.0
        } else {
            displayed
        }
    }
}

fn zeros(rows: usize, cols: usize) -> Matrix {
    match Matrix::new(rows, cols) {
        Ok(m) => m,
        Err(e) => panic!("{}", e),
    }
}

fn identity_quaternion() -> Matrix {
    let mut q = zeros(4, 1);
    q[3] = 1.0;
    q
}
