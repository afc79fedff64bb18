//! Rotation decompositions used by the solver.
use nalgebra::{Quaternion, UnitQuaternion, Vector3};

/// Decompose `rotation` into intrinsic X, Y, Z Euler angles.
///
/// Returns `(roll, pitch, yaw)` such that `rotation = Rx(roll) * Ry(pitch) * Rz(yaw)`, with
/// pitch in `[-pi/2, pi/2]`. At `|pitch| = pi/2` roll and yaw share an axis, the whole
/// residual rotation is then assigned to roll.
///
/// Note that this differs from [`UnitQuaternion::euler_angles`], which decomposes as
/// `Rz(yaw) * Ry(pitch) * Rx(roll)`.
#[must_use]
pub fn intrinsic_xyz(rotation: &UnitQuaternion<f64>) -> (f64, f64, f64) {
    let m = rotation.to_rotation_matrix().into_inner();

    let sin_pitch = m[(0, 2)].clamp(-1.0, 1.0);
    let pitch = sin_pitch.asin();

    if sin_pitch.abs() < 1.0 - 1e-12 {
        let roll = (-m[(1, 2)]).atan2(m[(2, 2)]);
        let yaw = (-m[(0, 1)]).atan2(m[(0, 0)]);
        (roll, pitch, yaw)
    } else {
        // gimbal lock
        let roll = m[(2, 1)].atan2(m[(1, 1)]);
        (roll, pitch, 0.0)
    }
}

/// Extract the twist of `rotation` around `direction`.
///
/// The twist is the part of the rotation about `direction`, found by projecting the vector
/// part of the quaternion onto it. This is used to read mechanical zero offsets off a joint
/// origin, it is not needed to solve a pose.
///
/// A rotation of half a turn about an axis perpendicular to `direction` has no defined twist,
/// in that case the identity is returned.
#[must_use]
pub fn twist(rotation: &UnitQuaternion<f64>, direction: &Vector3<f64>) -> UnitQuaternion<f64> {
    let vector_part = rotation.imag();
    let projection = direction * (vector_part.dot(direction) / direction.norm_squared());
    let twist = Quaternion::from_parts(rotation.w, projection);

    UnitQuaternion::try_new(twist, f64::EPSILON).unwrap_or_else(UnitQuaternion::identity)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    fn xyz(roll: f64, pitch: f64, yaw: f64) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), roll)
            * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), pitch)
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), yaw)
    }

    #[test]
    fn recovers_intrinsic_angles() {
        for (roll, pitch, yaw) in [
            (0.0, 0.0, 0.0),
            (0.3, 0.0, 0.0),
            (0.0, -0.4, 0.0),
            (0.0, 0.0, 1.2),
            (0.2, -0.3, 0.5),
            (-1.0, 0.7, -2.5),
        ] {
            let (r, p, y) = intrinsic_xyz(&xyz(roll, pitch, yaw));
            assert_relative_eq!(r, roll, epsilon = 1e-12);
            assert_relative_eq!(p, pitch, epsilon = 1e-12);
            assert_relative_eq!(y, yaw, epsilon = 1e-12);
        }
    }

    #[test]
    fn order_differs_from_extrinsic() {
        let rotation = xyz(0.2, 0.3, 0.4);
        let (roll, pitch, yaw) = rotation.euler_angles();
        let (r, p, y) = intrinsic_xyz(&rotation);

        assert!((r - roll).abs() > 1e-3 || (p - pitch).abs() > 1e-3 || (y - yaw).abs() > 1e-3);
    }

    #[test]
    fn gimbal_lock_is_reconstructed() {
        let rotation = xyz(0.3, FRAC_PI_2, 0.2);
        let (r, p, y) = intrinsic_xyz(&rotation);

        assert_relative_eq!(p, FRAC_PI_2, epsilon = 1e-6);
        assert_relative_eq!(y, 0.0);
        assert_relative_eq!(xyz(r, p, y), rotation, epsilon = 1e-6);
    }

    #[test]
    fn twist_about_own_axis_is_the_rotation() {
        let rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.74);
        let twist = twist(&rotation, &Vector3::y());

        assert_relative_eq!(twist, rotation, epsilon = 1e-12);
    }

    #[test]
    fn twist_ignores_swing() {
        let swing = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), 0.5);
        let about_y = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.3);

        // the direction does not need to be normalized
        let twist = twist(&swing, &(Vector3::y() * 2.0));
        assert_relative_eq!(twist, UnitQuaternion::identity(), epsilon = 1e-12);

        let twist = super::twist(&(about_y * swing), &Vector3::y());
        assert_relative_eq!(twist.angle(), 0.3, epsilon = 0.05);
        assert_relative_eq!(twist.axis().unwrap(), Vector3::y_axis(), epsilon = 1e-12);
    }

    #[test]
    fn undefined_twist_is_identity() {
        let half_turn = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI);
        let twist = twist(&half_turn, &Vector3::z());

        assert_relative_eq!(twist, UnitQuaternion::identity(), epsilon = 1e-12);
    }
}
