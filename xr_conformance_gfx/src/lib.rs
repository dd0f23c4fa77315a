/*!
# XR Conformance Graphics

Direct3D-side helpers for the XR conformance test suite.

This crate is platform-agnostic: it holds the swapchain format catalogue, the
pose-to-matrix conversions, the shader compile policy and the adapter
selection logic. Platform calls (DXGI enumeration, the FXC compiler) sit
behind the `AdapterFactory` and `ShaderBackend` traits and are implemented by
the `xr_conformance_gfx_d3d` crate.

## Architecture

- **FormatRegistry**: Read-only catalogue of swapchain formats and expected usage
- **Pose conversion**: `Posef` / `Matrix4x4f` to column-major `glam::Mat4`
- **ShaderCompiler**: Compiles HLSL with a fixed strict flag policy
- **AdapterSelector**: Picks the adapter matching a runtime-reported LUID
- **Harness**: Process-wide configuration and logging
*/

// Internal modules
mod error;
mod config;
mod harness;
pub mod log;
pub mod format;
pub mod pose;
pub mod shader;
pub mod adapter;

// Main xrc namespace module
pub mod xrc {
    // Error types
    pub use crate::error::{Error, Result};

    // Harness singleton and its configuration
    pub use crate::harness::Harness;
    pub use crate::config::{HarnessConfig, ADAPTER_LUID_ENV, LOG_LEVEL_ENV};

    // Logging sub-module (types only; the xrc_* macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Swapchain format catalogue
    pub mod format {
        pub use crate::format::*;
    }

    // Pose types and matrix conversion
    pub mod pose {
        pub use crate::pose::*;
    }

    // Shader compilation
    pub mod shader {
        pub use crate::shader::*;
    }

    // Adapter selection
    pub mod adapter {
        pub use crate::adapter::*;
    }
}

// Re-export math library at crate root
pub use glam;
