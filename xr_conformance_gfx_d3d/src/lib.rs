/*!
# XR Conformance Graphics - Direct3D Backend

DXGI and FXC implementations of the `xr_conformance_gfx` platform traits.

- **DxgiAdapterFactory**: `AdapterFactory` over `IDXGIFactory1::EnumAdapters1`
- **FxcShaderBackend**: `ShaderBackend` over `D3DCompile`
- **dxgi_format**: conversions between `DxgiFormat` and the native `DXGI_FORMAT`

Everything here is Windows-only; on other targets the crate is empty.
*/

#[cfg(windows)]
mod dxgi_adapter;
#[cfg(windows)]
mod d3d_shader;
#[cfg(windows)]
pub mod dxgi_format;

// Main xrc namespace module
#[cfg(windows)]
pub mod xrc {
    pub mod d3d {
        pub use crate::dxgi_adapter::{
            DxgiAdapter, DxgiAdapterFactory, DxgiAdapterSelector,
            describe_dxgi_adapters, select_dxgi_adapter,
        };
        pub use crate::d3d_shader::{FxcShaderBackend, FxcShaderCompiler};
        pub use crate::dxgi_format::{from_dxgi_format, to_dxgi_format};
    }
}
