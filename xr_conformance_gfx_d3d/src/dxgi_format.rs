//! Conversions between `DxgiFormat` and the native `DXGI_FORMAT`

use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT;
use xr_conformance_gfx::xrc::format::DxgiFormat;

pub fn to_dxgi_format(format: DxgiFormat) -> DXGI_FORMAT {
    DXGI_FORMAT(format.raw() as _)
}

pub fn from_dxgi_format(format: DXGI_FORMAT) -> DxgiFormat {
    DxgiFormat(format.0 as u32)
}
