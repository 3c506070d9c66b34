//! Conversions between rotation representations
//!
//! The 3x3 rotation matrix is the canonical form: every other representation
//! (rotation vector, axis-angle, quaternion, mobile/fixed Euler angles)
//! converts to and from it. All angles are radians, all functions are pure,
//! and every function returns a freshly built [`Matrix`].
//!
//! "Mobile" Euler angles compose intrinsically (each rotation about the
//! body's own post-rotation axes); "fixed" Euler angles compose extrinsically
//! (about the world axes). For the same named order the two differ only in
//! the direction of composition, so the fixed variants delegate to the
//! mobile ones with the order reversed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Matrix;

/// Middle-angle proximity to +/-90 degrees that triggers the gimbal-lock
/// branch of the Euler extractions. Also used to clamp the `asin` argument
/// against floating-point overshoot.
const GIMBAL_LOCK_EPS: f32 = 1e-7;

/// The six axis orderings for three-angle Euler decompositions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EulerOrder {
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
}

impl EulerOrder {
    /// Every order, in enum declaration order.
    pub const ALL: [EulerOrder; 6] = [
        EulerOrder::Xyz,
        EulerOrder::Xzy,
        EulerOrder::Yxz,
        EulerOrder::Yzx,
        EulerOrder::Zxy,
        EulerOrder::Zyx,
    ];

    /// Position of this order within [`EulerOrder::ALL`].
    pub fn index(self) -> usize {
        match self {
            EulerOrder::Xyz => 0,
            EulerOrder::Xzy => 1,
            EulerOrder::Yxz => 2,
            EulerOrder::Yzx => 3,
            EulerOrder::Zxy => 4,
            EulerOrder::Zyx => 5,
        }
    }

    /// The same axes applied in the opposite sequence.
    ///
    /// Composing extrinsically in order O equals composing intrinsically in
    /// `O.reversed()`, which is how the fixed-Euler conversions are derived
    /// from the mobile ones.
    pub fn reversed(self) -> EulerOrder {
        match self {
            EulerOrder::Xyz => EulerOrder::Zyx,
            EulerOrder::Xzy => EulerOrder::Yzx,
            EulerOrder::Yxz => EulerOrder::Zxy,
            EulerOrder::Yzx => EulerOrder::Xzy,
            EulerOrder::Zxy => EulerOrder::Yxz,
            EulerOrder::Zyx => EulerOrder::Xyz,
        }
    }
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EulerOrder::Xyz => "XYZ",
            EulerOrder::Xzy => "XZY",
            EulerOrder::Yxz => "YXZ",
            EulerOrder::Yzx => "YZX",
            EulerOrder::Zxy => "ZXY",
            EulerOrder::Zyx => "ZYX",
        };
        f.write_str(name)
    }
}

/// Right-handed rotation about the X axis.
pub fn rotate_x(rad: f32) -> Matrix {
    let mut m = Matrix::identity(3);
    m[4] = rad.cos();
    m[5] = -rad.sin();
    m[7] = rad.sin();
    m[8] = rad.cos();
    m
}

/// Right-handed rotation about the Y axis.
pub fn rotate_y(rad: f32) -> Matrix {
    let mut m = Matrix::identity(3);
    m[0] = rad.cos();
    m[2] = rad.sin();
    m[6] = -rad.sin();
    m[8] = rad.cos();
    m
}

/// Right-handed rotation about the Z axis.
pub fn rotate_z(rad: f32) -> Matrix {
    let mut m = Matrix::identity(3);
    m[0] = rad.cos();
    m[1] = -rad.sin();
    m[3] = rad.sin();
    m[4] = rad.cos();
    m
}

/// Rodrigues' rotation formula.
///
/// The axis is normalized internally; a zero-length axis is treated as no
/// rotation and yields the identity matrix (documented policy, not an
/// error).
pub fn axis_angle_to_matrix(x: f32, y: f32, z: f32, rad: f32) -> Matrix {
    let d = (x * x + y * y + z * z).sqrt();
    if d <= 0.0 {
        return Matrix::identity(3);
    }
    let x = x / d;
    let y = y / d;
    let z = z / d;

    let c = rad.cos();
    let s = rad.sin();
    let t = 1.0 - c;

    let mut m = Matrix::identity(3);
    m[0] = c + x * x * t;
    m[1] = x * y * t - z * s;
    m[2] = z * x * t + y * s;
    m[3] = x * y * t + z * s;
    m[4] = c + y * y * t;
    m[5] = y * z * t - x * s;
    m[6] = z * x * t - y * s;
    m[7] = y * z * t + x * s;
    m[8] = c + z * z * t;
    m
}

/// Rotation vector: direction is the axis, magnitude is the angle.
/// The zero vector is the identity rotation.
pub fn rotation_vector_to_matrix(x_rad: f32, y_rad: f32, z_rad: f32) -> Matrix {
    let rad = (x_rad * x_rad + y_rad * y_rad + z_rad * z_rad).sqrt();
    if rad <= 0.0 {
        return Matrix::identity(3);
    }
    axis_angle_to_matrix(x_rad / rad, y_rad / rad, z_rad / rad, rad)
}

/// Quaternion (x, y, z, w) to rotation matrix.
///
/// The input is normalized by its 4-norm first, so any non-zero quaternion
/// is accepted. A zero quaternion is a precondition violation: the division
/// produces NaNs that propagate into the result.
pub fn quaternion_to_matrix(x: f32, y: f32, z: f32, w: f32) -> Matrix {
    let d = (x * x + y * y + z * z + w * w).sqrt();
    let x = x / d;
    let y = y / d;
    let z = z / d;
    let w = w / d;

    let mut m = Matrix::identity(3);
    m[(0, 0)] = 2.0 * w * w + 2.0 * x * x - 1.0;
    m[(0, 1)] = 2.0 * x * y - 2.0 * z * w;
    m[(0, 2)] = 2.0 * x * z + 2.0 * y * w;
    m[(1, 0)] = 2.0 * x * y + 2.0 * z * w;
    m[(1, 1)] = 2.0 * w * w + 2.0 * y * y - 1.0;
    m[(1, 2)] = 2.0 * y * z - 2.0 * x * w;
    m[(2, 0)] = 2.0 * x * z - 2.0 * y * w;
    m[(2, 1)] = 2.0 * y * z + 2.0 * x * w;
    m[(2, 2)] = 2.0 * w * w + 2.0 * z * z - 1.0;
    m
}

/// Intrinsic (mobile-axes) Euler angles to rotation matrix.
///
/// The angles are labeled per axis: `x` always rotates about X, regardless
/// of where X appears in the order. Order XYZ composes `Rx * Ry * Rz`.
pub fn euler_mobile_to_matrix(order: EulerOrder, x: f32, y: f32, z: f32) -> Matrix {
    match order {
        EulerOrder::Xyz => rotate_x(x) * rotate_y(y) * rotate_z(z),
        EulerOrder::Xzy => rotate_x(x) * rotate_z(z) * rotate_y(y),
        EulerOrder::Yxz => rotate_y(y) * rotate_x(x) * rotate_z(z),
        EulerOrder::Yzx => rotate_y(y) * rotate_z(z) * rotate_x(x),
        EulerOrder::Zxy => rotate_z(z) * rotate_x(x) * rotate_y(y),
        EulerOrder::Zyx => rotate_z(z) * rotate_y(y) * rotate_x(x),
    }
}

/// Extrinsic (fixed-axes) Euler angles to rotation matrix.
///
/// Extrinsic composition applies the elementary rotations in the opposite
/// matrix order: fixed XYZ composes `Rz * Ry * Rx`.
pub fn euler_fixed_to_matrix(order: EulerOrder, x: f32, y: f32, z: f32) -> Matrix {
    euler_mobile_to_matrix(order.reversed(), x, y, z)
}

/// Rotation matrix to rotation vector (3x1: axis scaled by angle).
pub fn matrix_to_rotation_vector(m: &Matrix) -> Matrix {
    let aa = matrix_to_axis_angle(m);
    let mut vec = match Matrix::new(3, 1) {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    };
    vec[0] = aa[0] * aa[3];
    vec[1] = aa[1] * aa[3];
    vec[2] = aa[2] * aa[3];
    vec
}

/// Rotation matrix to axis-angle (4x1: unit axis, then angle).
///
/// The axis comes from the antisymmetric part of the matrix. When that part
/// vanishes (`d == 0`) the rotation is either the identity or exactly 180
/// degrees; the two cases are not disambiguated here and the result is left
/// all-zero. Callers that need 180-degree recovery must handle it
/// themselves.
pub fn matrix_to_axis_angle(m: &Matrix) -> Matrix {
    let mut vec = match Matrix::new(4, 1) {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    };
    let ax = m[(2, 1)] - m[(1, 2)];
    let ay = m[(0, 2)] - m[(2, 0)];
    let az = m[(1, 0)] - m[(0, 1)];
    let d = (ax * ax + ay * ay + az * az).sqrt();
    if d > 0.0 {
        let trace = m[(0, 0)] + m[(1, 1)] + m[(2, 2)];
        // (trace - 1) / 2 can overshoot [-1, 1] by float noise near the
        // identity, which would turn acos into NaN.
        let cos_angle = ((trace - 1.0) / 2.0).clamp(-1.0, 1.0);
        vec[0] = ax / d;
        vec[1] = ay / d;
        vec[2] = az / d;
        vec[3] = cos_angle.acos();
    }
    vec
}

/// Rotation matrix to quaternion (4x1: x, y, z, w).
///
/// Branches on the trace and the largest diagonal entry so the divisor is
/// never near zero. The sign of the result is not canonicalized; `q` and
/// `-q` encode the same rotation.
pub fn matrix_to_quaternion(m: &Matrix) -> Matrix {
    let mut q = match Matrix::new(4, 1) {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    };
    let (m00, m11, m22) = (m[(0, 0)], m[(1, 1)], m[(2, 2)]);
    let trace = m00 + m11 + m22;
    if trace > 0.0 {
        let s = 2.0 * (trace + 1.0).sqrt();
        q[3] = s / 4.0;
        q[0] = (m[(2, 1)] - m[(1, 2)]) / s;
        q[1] = (m[(0, 2)] - m[(2, 0)]) / s;
        q[2] = (m[(1, 0)] - m[(0, 1)]) / s;
    } else if m00 > m11 && m00 > m22 {
        let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
        q[0] = s / 4.0;
        q[3] = (m[(2, 1)] - m[(1, 2)]) / s;
        q[1] = (m[(0, 1)] + m[(1, 0)]) / s;
        q[2] = (m[(0, 2)] + m[(2, 0)]) / s;
    } else if m11 > m22 {
        let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
        q[1] = s / 4.0;
        q[3] = (m[(0, 2)] - m[(2, 0)]) / s;
        q[0] = (m[(0, 1)] + m[(1, 0)]) / s;
        q[2] = (m[(1, 2)] + m[(2, 1)]) / s;
    } else {
        let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
        q[2] = s / 4.0;
        q[3] = (m[(1, 0)] - m[(0, 1)]) / s;
        q[0] = (m[(0, 2)] + m[(2, 0)]) / s;
        q[1] = (m[(1, 2)] + m[(2, 1)]) / s;
    }
    q
}

/// Rotation matrix to intrinsic Euler angles (3x1, labeled per axis).
///
/// Each order extracts its middle angle from one matrix entry via `asin`
/// and the outer pair via `atan2`. Near the singular configuration (middle
/// angle at +/-90 degrees) one outer angle loses its meaning: the angle for
/// the last axis in the order is forced to 0 and the first is recovered
/// from an alternate entry pair.
pub fn matrix_to_euler_mobile(order: EulerOrder, m: &Matrix) -> Matrix {
    let (x, y, z) = match order {
        EulerOrder::Xyz => {
            let s = m[(0, 2)];
            if gimbal_locked(s) {
                (m[(2, 1)].atan2(m[(1, 1)]), clamped_asin(s), 0.0)
            } else {
                (
                    (-m[(1, 2)]).atan2(m[(2, 2)]),
                    s.asin(),
                    (-m[(0, 1)]).atan2(m[(0, 0)]),
                )
            }
        }
        EulerOrder::Xzy => {
            let s = -m[(0, 1)];
            if gimbal_locked(s) {
                ((-m[(1, 2)]).atan2(m[(2, 2)]), 0.0, clamped_asin(s))
            } else {
                (
                    m[(2, 1)].atan2(m[(1, 1)]),
                    m[(0, 2)].atan2(m[(0, 0)]),
                    s.asin(),
                )
            }
        }
        EulerOrder::Yxz => {
            let s = -m[(1, 2)];
            if gimbal_locked(s) {
                (clamped_asin(s), (-m[(2, 0)]).atan2(m[(0, 0)]), 0.0)
            } else {
                (
                    s.asin(),
                    m[(0, 2)].atan2(m[(2, 2)]),
                    m[(1, 0)].atan2(m[(1, 1)]),
                )
            }
        }
        EulerOrder::Yzx => {
            let s = m[(1, 0)];
            if gimbal_locked(s) {
                (0.0, m[(0, 2)].atan2(m[(2, 2)]), clamped_asin(s))
            } else {
                (
                    (-m[(1, 2)]).atan2(m[(1, 1)]),
                    (-m[(2, 0)]).atan2(m[(0, 0)]),
                    s.asin(),
                )
            }
        }
        EulerOrder::Zxy => {
            let s = m[(2, 1)];
            if gimbal_locked(s) {
                (clamped_asin(s), 0.0, m[(1, 0)].atan2(m[(0, 0)]))
            } else {
                (
                    s.asin(),
                    (-m[(2, 0)]).atan2(m[(2, 2)]),
                    (-m[(0, 1)]).atan2(m[(1, 1)]),
                )
            }
        }
        EulerOrder::Zyx => {
            let s = -m[(2, 0)];
            if gimbal_locked(s) {
                ((-m[(1, 2)]).atan2(m[(1, 1)]), clamped_asin(s), 0.0)
            } else {
                (
                    m[(2, 1)].atan2(m[(2, 2)]),
                    s.asin(),
                    m[(1, 0)].atan2(m[(0, 0)]),
                )
            }
        }
    };
    let mut vec = match Matrix::new(3, 1) {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    };
    vec[0] = x;
    vec[1] = y;
    vec[2] = z;
    vec
}

/// Rotation matrix to extrinsic Euler angles (3x1, labeled per axis).
pub fn matrix_to_euler_fixed(order: EulerOrder, m: &Matrix) -> Matrix {
    matrix_to_euler_mobile(order.reversed(), m)
}

/// Project a drifted matrix back onto the rotation manifold by
/// round-tripping it through the quaternion representation.
///
/// Intended for matrices whose cells were edited by hand and are no longer
/// exactly orthonormal.
pub fn normalize_rotation_matrix(m: &Matrix) -> Matrix {
    let q = matrix_to_quaternion(m);
    quaternion_to_matrix(q[0], q[1], q[2], q[3])
}

/// Cartesian to spherical polar coordinates (3x1: r, theta, phi).
///
/// `theta` is the polar angle from the +Z axis, `phi` the azimuth measured
/// from +X with the sign taken from `y`. The origin maps to all zeros.
pub fn xyz_to_polar(x: f32, y: f32, z: f32) -> Matrix {
    let mut vec = match Matrix::new(3, 1) {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    };
    let r = (x * x + y * y + z * z).sqrt();
    let mut theta = 0.0;
    if r != 0.0 {
        theta = (z / r).acos();
    }
    let planar = (x * x + y * y).sqrt();
    let mut phi = 0.0;
    if planar != 0.0 {
        phi = (x / planar).acos();
        if y < 0.0 {
            phi = -phi;
        }
    }
    vec[0] = r;
    vec[1] = theta;
    vec[2] = phi;
    vec
}

/// Spherical polar to Cartesian coordinates (3x1: x, y, z).
pub fn polar_to_xyz(r: f32, theta_rad: f32, phi_rad: f32) -> Matrix {
    let mut vec = match Matrix::new(3, 1) {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    };
    vec[0] = r * theta_rad.sin() * phi_rad.cos();
    vec[1] = r * theta_rad.sin() * phi_rad.sin();
    vec[2] = r * theta_rad.cos();
    vec
}

fn gimbal_locked(sin_middle: f32) -> bool {
    sin_middle.abs() >= 1.0 - GIMBAL_LOCK_EPS
}

fn clamped_asin(s: f32) -> f32 {
    s.clamp(-(1.0 - GIMBAL_LOCK_EPS), 1.0 - GIMBAL_LOCK_EPS).asin()
}
