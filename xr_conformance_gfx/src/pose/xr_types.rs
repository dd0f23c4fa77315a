/// XR math value types, laid out like their OpenXR counterparts

use bytemuck::{Pod, Zeroable};

/// `XrVector3f`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3f {
    pub const ZERO: Vector3f = Vector3f { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// `XrQuaternionf`, expected to be unit length
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Quaternionf {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternionf {
    pub const IDENTITY: Quaternionf = Quaternionf { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl Default for Quaternionf {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `XrPosef`: orientation, then position
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Posef {
    pub orientation: Quaternionf,
    pub position: Vector3f,
}

impl Posef {
    pub const IDENTITY: Posef = Posef {
        orientation: Quaternionf::IDENTITY,
        position: Vector3f::ZERO,
    };
}

/// `XrMatrix4x4f`: 16 floats, column-major
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Matrix4x4f {
    pub m: [f32; 16],
}

impl Matrix4x4f {
    pub const IDENTITY: Matrix4x4f = Matrix4x4f {
        m: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };
}

impl Default for Matrix4x4f {
    fn default() -> Self {
        Self::IDENTITY
    }
}
