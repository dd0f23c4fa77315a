/// Pose module - XR pose types and backend matrix conversion

pub mod xr_types;
pub mod pose_matrix;

pub use xr_types::*;
pub use pose_matrix::*;
