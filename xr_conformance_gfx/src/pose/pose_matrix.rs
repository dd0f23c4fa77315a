/// Pose and transform conversion to backend matrices
///
/// The backend consumes row-major, post-multiplied matrices. That is the same
/// memory layout as a column-major, pre-multiplied `glam::Mat4`, so both
/// conversions produce a `Mat4` whose 16 floats are exactly what gets uploaded.

use glam::{Mat4, Quat, Vec3};
use super::xr_types::{Matrix4x4f, Posef};

/// Affine transform of `pose`: rotate about the origin, then translate.
/// Unit scale.
pub fn matrix_from_pose(pose: &Posef) -> Mat4 {
    let o = pose.orientation;
    let p = pose.position;
    Mat4::from_rotation_translation(
        Quat::from_xyzw(o.x, o.y, o.z, o.w),
        Vec3::new(p.x, p.y, p.z),
    )
}

/// Reinterpret an XR matrix as a backend matrix. No arithmetic.
pub fn matrix_from_transform(matrix: &Matrix4x4f) -> Mat4 {
    bytemuck::cast(*matrix)
}

#[cfg(test)]
#[path = "pose_matrix_tests.rs"]
mod tests;
