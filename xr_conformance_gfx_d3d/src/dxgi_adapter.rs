/// DxgiAdapterFactory - DXGI implementation of AdapterFactory

use windows::Win32::Graphics::Dxgi::{
    CreateDXGIFactory1, IDXGIAdapter1, IDXGIFactory1, DXGI_ADAPTER_DESC1,
    DXGI_ADAPTER_FLAG_SOFTWARE, DXGI_ERROR_NOT_FOUND,
};
use xr_conformance_gfx::xrc::{Error, Result};
use xr_conformance_gfx::xrc::adapter::{Adapter, AdapterDesc, AdapterFactory, AdapterLuid, AdapterSelector};
use xr_conformance_gfx::{xrc_debug, xrc_error};

/// Selector over the system DXGI factory
pub type DxgiAdapterSelector = AdapterSelector<DxgiAdapterFactory>;

/// Owned `IDXGIAdapter1`; the COM reference is released on drop
#[derive(Debug, Clone)]
pub struct DxgiAdapter {
    adapter: IDXGIAdapter1,
}

impl DxgiAdapter {
    /// Native adapter, for device creation
    pub fn as_raw(&self) -> &IDXGIAdapter1 {
        &self.adapter
    }

    pub fn into_raw(self) -> IDXGIAdapter1 {
        self.adapter
    }
}

impl Adapter for DxgiAdapter {
    fn desc(&self) -> Result<AdapterDesc> {
        let mut desc = DXGI_ADAPTER_DESC1::default();
        unsafe { self.adapter.GetDesc1(&mut desc) }
            .map_err(|e| platform_error("IDXGIAdapter1::GetDesc1", &e))?;
        Ok(convert_desc(&desc))
    }
}

/// DXGI factory used for adapter enumeration
pub struct DxgiAdapterFactory {
    factory: IDXGIFactory1,
}

impl DxgiAdapterFactory {
    /// Create a DXGI 1.1 factory
    ///
    /// # Errors
    ///
    /// `PlatformError` if `CreateDXGIFactory1` fails.
    pub fn new() -> Result<Self> {
        let factory = unsafe { CreateDXGIFactory1::<IDXGIFactory1>() }
            .map_err(|e| platform_error("CreateDXGIFactory1", &e))?;
        xrc_debug!("xrc::d3d::dxgi", "DXGI factory created");
        Ok(Self { factory })
    }
}

impl AdapterFactory for DxgiAdapterFactory {
    type Adapter = DxgiAdapter;

    fn adapter_at(&self, index: u32) -> Result<Option<DxgiAdapter>> {
        match unsafe { self.factory.EnumAdapters1(index) } {
            Ok(adapter) => Ok(Some(DxgiAdapter { adapter })),
            Err(err) if err.code() == DXGI_ERROR_NOT_FOUND => Ok(None),
            Err(err) => Err(platform_error("IDXGIFactory1::EnumAdapters1", &err)),
        }
    }
}

/// Select the adapter matching `luid` (zero for the first adapter) from a fresh DXGI factory
///
/// # Errors
///
/// - `NotFound` if no adapter has the requested LUID
/// - `PlatformError` for any DXGI failure
pub fn select_dxgi_adapter(luid: AdapterLuid) -> Result<DxgiAdapter> {
    AdapterSelector::new(DxgiAdapterFactory::new()?).select_adapter(luid)
}

/// Describe every adapter the system reports
pub fn describe_dxgi_adapters() -> Result<Vec<AdapterDesc>> {
    AdapterSelector::new(DxgiAdapterFactory::new()?).describe_adapters()
}

fn convert_desc(desc: &DXGI_ADAPTER_DESC1) -> AdapterDesc {
    let name_len = desc
        .Description
        .iter()
        .position(|&c| c == 0)
        .unwrap_or(desc.Description.len());

    AdapterDesc {
        description: String::from_utf16_lossy(&desc.Description[..name_len]),
        vendor_id: desc.VendorId,
        device_id: desc.DeviceId,
        sub_sys_id: desc.SubSysId,
        revision: desc.Revision,
        dedicated_video_memory: desc.DedicatedVideoMemory as u64,
        dedicated_system_memory: desc.DedicatedSystemMemory as u64,
        shared_system_memory: desc.SharedSystemMemory as u64,
        luid: AdapterLuid::new(desc.AdapterLuid.LowPart, desc.AdapterLuid.HighPart),
        is_software: desc.Flags & DXGI_ADAPTER_FLAG_SOFTWARE.0 as u32 != 0,
    }
}

fn platform_error(context: &str, err: &windows::core::Error) -> Error {
    let error = Error::PlatformError {
        context: context.to_string(),
        status: err.code().0,
    };
    xrc_error!("xrc::d3d::dxgi", "{}: {}", error, err.message());
    error
}

#[cfg(test)]
#[path = "dxgi_adapter_tests.rs"]
mod tests;
