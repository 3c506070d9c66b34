//! 4x4 homogeneous transform and projection builders
//!
//! These feed the presentation layer: posing the rendered model from the
//! canonical 3x3 rotation, and building view/projection matrices for the
//! camera. All of them return 4x4 matrices in row-major order.

use crate::Matrix;

/// Embed a 3x3 rotation into the top-left of a 4x4 identity.
pub fn expand3to4(mat3: &Matrix) -> Matrix {
    let mut mat4 = Matrix::identity(4);
    for row in 0..3 {
        for col in 0..3 {
            mat4[(row, col)] = mat3[(row, col)];
        }
    }
    mat4
}

/// The top-left 3x3 block of a 4x4 transform.
pub fn shrink4to3(mat4: &Matrix) -> Matrix {
    let mut mat3 = Matrix::identity(3);
    for row in 0..3 {
        for col in 0..3 {
            mat3[(row, col)] = mat4[(row, col)];
        }
    }
    mat3
}

/// Translation by (x, y, z).
pub fn translate(x: f32, y: f32, z: f32) -> Matrix {
    let mut mat = Matrix::identity(4);
    mat[3] = x;
    mat[7] = y;
    mat[11] = z;
    mat
}

/// Axis-aligned scale.
pub fn scale(x: f32, y: f32, z: f32) -> Matrix {
    let mut mat = Matrix::identity(4);
    mat[0] = x;
    mat[5] = y;
    mat[10] = z;
    mat
}

/// 4x4 rotation about the X axis.
pub fn rotate_x(rad: f32) -> Matrix {
    let mut mat = Matrix::identity(4);
    mat[5] = rad.cos();
    mat[6] = -rad.sin();
    mat[9] = rad.sin();
    mat[10] = rad.cos();
    mat
}

/// 4x4 rotation about the Y axis.
pub fn rotate_y(rad: f32) -> Matrix {
    let mut mat = Matrix::identity(4);
    mat[0] = rad.cos();
    mat[2] = rad.sin();
    mat[8] = -rad.sin();
    mat[10] = rad.cos();
    mat
}

/// 4x4 rotation about the Z axis.
pub fn rotate_z(rad: f32) -> Matrix {
    let mut mat = Matrix::identity(4);
    mat[0] = rad.cos();
    mat[1] = -rad.sin();
    mat[4] = rad.sin();
    mat[5] = rad.cos();
    mat
}

/// 4x4 rotation about an arbitrary axis; a zero-length axis yields the
/// identity.
pub fn rotate_axis_angle(x: f32, y: f32, z: f32, rad: f32) -> Matrix {
    let mut mat = Matrix::identity(4);
    let d = (x * x + y * y + z * z).sqrt();
    if d <= 0.0 {
        return mat;
    }
    let l = x / d;
    let m = y / d;
    let n = z / d;
    let c = rad.cos();
    let s = rad.sin();
    let c1 = 1.0 - c;
    mat[0] = (1.0 - l * l) * c + l * l;
    mat[1] = l * m * c1 - n * s;
    mat[2] = n * l * c1 + m * s;
    mat[4] = l * m * c1 + n * s;
    mat[5] = (1.0 - m * m) * c + m * m;
    mat[6] = m * n * c1 - l * s;
    mat[8] = n * l * c1 - m * s;
    mat[9] = m * n * c1 + l * s;
    mat[10] = (1.0 - n * n) * c + n * n;
    mat
}

/// View matrix looking from `eye` toward `gaze` with the given `up` hint.
///
/// Falls back to the bare eye translation when the basis degenerates
/// (gaze parallel to up, or eye == gaze).
pub fn look_at(eye: [f32; 3], gaze: [f32; 3], up: [f32; 3]) -> Matrix {
    let tv = translate(-eye[0], -eye[1], -eye[2]);

    let tx = eye[0] - gaze[0];
    let ty = eye[1] - gaze[1];
    let tz = eye[2] - gaze[2];
    let rx = up[1] * tz - up[2] * ty;
    let ry = up[2] * tx - up[0] * tz;
    let rz = up[0] * ty - up[1] * tx;
    let sx = ty * rz - tz * ry;
    let sy = tz * rx - tx * rz;
    let sz = tx * ry - ty * rx;

    let s = (sx * sx + sy * sy + sz * sz).sqrt();
    if s == 0.0 {
        return tv;
    }
    let r = (rx * rx + ry * ry + rz * rz).sqrt();
    let t = (tx * tx + ty * ty + tz * tz).sqrt();
    let mut rv = Matrix::identity(4);
    rv[0] = rx / r;
    rv[1] = ry / r;
    rv[2] = rz / r;
    rv[4] = sx / s;
    rv[5] = sy / s;
    rv[6] = sz / s;
    rv[8] = tx / t;
    rv[9] = ty / t;
    rv[10] = tz / t;

    rv * tv
}

/// Orthographic projection; degenerate extents leave the identity cells
/// untouched.
pub fn orthographic(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    z_near: f32,
    z_far: f32,
) -> Matrix {
    let mut mat = Matrix::identity(4);
    let dx = right - left;
    let dy = top - bottom;
    let dz = z_far - z_near;
    if dx != 0.0 && dy != 0.0 && dz != 0.0 {
        mat[0] = 2.0 / dx;
        mat[5] = 2.0 / dy;
        mat[10] = -2.0 / dz;
        mat[3] = -(right + left) / dx;
        mat[7] = -(top + bottom) / dy;
        mat[11] = -(z_far + z_near) / dz;
    }
    mat
}

/// Perspective frustum from clip-plane extents.
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, z_near: f32, z_far: f32) -> Matrix {
    let mut mat = Matrix::identity(4);
    let dx = right - left;
    let dy = top - bottom;
    let dz = z_far - z_near;
    if dx != 0.0 && dy != 0.0 && dz != 0.0 {
        mat[0] = 2.0 * z_near / dx;
        mat[5] = 2.0 * z_near / dy;
        mat[2] = (right + left) / dx;
        mat[6] = (top + bottom) / dy;
        mat[10] = -(z_far + z_near) / dz;
        mat[11] = -2.0 * z_far * z_near / dz;
        mat[14] = -1.0;
        mat[15] = 0.0;
    }
    mat
}

/// Perspective projection from vertical field of view, with an optional
/// principal-point offset (cx, cy) for off-center viewports.
pub fn perspective(cx: f32, cy: f32, fovy: f32, aspect: f32, z_near: f32, z_far: f32) -> Matrix {
    let mut mat = Matrix::identity(4);
    let dz = z_far - z_near;
    if dz != 0.0 {
        mat[5] = 1.0 / (fovy * 0.5).tan();
        mat[0] = mat[5] / aspect;
        mat[2] = cx;
        mat[6] = cy;
        mat[10] = -(z_far + z_near) / dz;
        mat[11] = -2.0 * z_far * z_near / dz;
        mat[14] = -1.0;
        mat[15] = 0.0;
    }
    mat
}
