//! The convert-all pipeline
//!
//! Runs once per frame: canonicalize the active input representation to the
//! 3x3 rotation matrix, then derive every output representation from it.
//! Given unchanged inputs the pipeline is idempotent.

use rotconv_math::{rotation, EulerOrder, Matrix};

use crate::state::{InputState, OutputState, Representation};

/// Convert the active input representation into every output slot.
///
/// `normalize` only applies when the active representation is the rotation
/// matrix itself: a hand-edited matrix is projected back onto the rotation
/// manifold before fanning out. The other representations already
/// normalize as part of their own conversion.
pub fn convert_all(input: &InputState, output: &mut OutputState, normalize: bool) {
    log::debug!("convert_all: active representation = {}", input.active);

    let mat3 = match input.active {
        Representation::RotationMatrix => {
            let mat3 = input.rotation_matrix.clone();
            if normalize {
                rotation::normalize_rotation_matrix(&mat3)
            } else {
                mat3
            }
        }
        Representation::RotationVector => rotation::rotation_vector_to_matrix(
            input.rotation_vector[0],
            input.rotation_vector[1],
            input.rotation_vector[2],
        ),
        Representation::AxisAngle => rotation::axis_angle_to_matrix(
            input.axis_angle[0],
            input.axis_angle[1],
            input.axis_angle[2],
            input.axis_angle[3],
        ),
        Representation::Quaternion => rotation::quaternion_to_matrix(
            input.quaternion[0],
            input.quaternion[1],
            input.quaternion[2],
            input.quaternion[3],
        ),
        Representation::EulerMobile => rotation::euler_mobile_to_matrix(
            input.mobile_euler_order,
            input.mobile_euler_angle[0],
            input.mobile_euler_angle[1],
            input.mobile_euler_angle[2],
        ),
        Representation::EulerFixed => rotation::euler_fixed_to_matrix(
            input.fixed_euler_order,
            input.fixed_euler_angle[0],
            input.fixed_euler_angle[1],
            input.fixed_euler_angle[2],
        ),
    };

    output.rotation_vector = rotation::matrix_to_rotation_vector(&mat3);
    output.axis_angle = rotation::matrix_to_axis_angle(&mat3);
    output.quaternion = rotation::matrix_to_quaternion(&mat3);
    for order in EulerOrder::ALL {
        output.mobile_euler_angle[order.index()] = rotation::matrix_to_euler_mobile(order, &mat3);
        output.fixed_euler_angle[order.index()] = rotation::matrix_to_euler_fixed(order, &mat3);
    }
    output.rotation_matrix = mat3;
}

/// Copy every output representation back into the corresponding input slot,
/// adopting the converted values as the new edit baselines. Euler inputs
/// take the output variant matching their currently selected order.
pub fn overwrite_input(input: &mut InputState, output: &OutputState) {
    input.rotation_matrix = output.rotation_matrix.clone();
    input.rotation_vector = output.rotation_vector.clone();
    input.axis_angle = output.axis_angle.clone();
    input.quaternion = output.quaternion.clone();
    input.mobile_euler_angle = output.mobile_euler_angle[input.mobile_euler_order.index()].clone();
    input.fixed_euler_angle = output.fixed_euler_angle[input.fixed_euler_order.index()].clone();
}

/// Restore both value sets to the identity rotation.
pub fn reset(input: &mut InputState, output: &mut OutputState) {
    input.reset();
    output.reset();
}
