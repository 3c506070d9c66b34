//! Text report of a converted rotation
//!
//! Renders every output representation as the tool prints it: the matrix
//! in rows, vector representations on one line, and both Euler tables
//! with all six orders. Angles go through [`AngleUnit`] so the report
//! honors the configured degree/radian display.

use std::fmt::Write;

use rotconv_core::{AngleUnit, EulerOrder, Matrix, OutputState};

/// Render the full report for a converted rotation.
pub fn render(output: &OutputState, unit: AngleUnit) -> String {
    let mut s = String::new();

    section(&mut s, "Rotation Matrix");
    let _ = write!(s, "{}", output.rotation_matrix);

    section(&mut s, "Rotation Vector");
    let _ = writeln!(
        s,
        "  [{:9.5}, {:9.5}, {:9.5}]",
        unit.display(output.rotation_vector[0]),
        unit.display(output.rotation_vector[1]),
        unit.display(output.rotation_vector[2]),
    );

    section(&mut s, "Axis-Angle");
    let _ = writeln!(
        s,
        "  axis  [{:9.5}, {:9.5}, {:9.5}]",
        output.axis_angle[0], output.axis_angle[1], output.axis_angle[2],
    );
    let _ = writeln!(s, "  angle {:9.5}", unit.display(output.axis_angle[3]));

    section(&mut s, "Quaternion (x, y, z, w)");
    let _ = writeln!(
        s,
        "  [{:9.5}, {:9.5}, {:9.5}, {:9.5}]",
        output.quaternion[0], output.quaternion[1], output.quaternion[2], output.quaternion[3],
    );

    section(&mut s, "Euler Angle (Mobile: intrinsic rotation)");
    euler_table(&mut s, &output.mobile_euler_angle, unit);

    section(&mut s, "Euler Angle (Fixed: extrinsic rotation)");
    euler_table(&mut s, &output.fixed_euler_angle, unit);

    s
}

fn section(s: &mut String, title: &str) {
    if !s.is_empty() {
        s.push('\n');
    }
    let _ = writeln!(s, "{}:", title);
}

fn euler_table(s: &mut String, angles: &[Matrix; 6], unit: AngleUnit) {
    for order in EulerOrder::ALL {
        let a = &angles[order.index()];
        let _ = writeln!(
            s,
            "  {}  x: {:9.5}  y: {:9.5}  z: {:9.5}",
            order,
            unit.display(a[0]),
            unit.display(a[1]),
            unit.display(a[2]),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotconv_core::{convert_all, InputState, Representation};
    use std::f32::consts::PI;

    #[test]
    fn test_report_identity() {
        let output = OutputState::default();
        let s = render(&output, AngleUnit::default());
        assert!(s.contains("Rotation Matrix:"));
        assert!(s.contains("Quaternion (x, y, z, w):"));
        assert!(s.contains("XYZ"));
        assert!(s.contains("ZYX"));
    }

    #[test]
    fn test_report_angles_in_degrees() {
        let mut input = InputState::default();
        input.active = Representation::AxisAngle;
        input.axis_angle[2] = 1.0;
        input.axis_angle[3] = PI / 2.0;
        let mut output = OutputState::default();
        convert_all(&input, &mut output, false);

        let s = render(&output, AngleUnit { is_degree: true });
        assert!(s.contains(" 90.0"), "report:\n{}", s);
    }
}
