//! Unit tests for dxgi_adapter.rs

use super::*;
use windows::Win32::Foundation::LUID;

fn desc_named(name: &str) -> DXGI_ADAPTER_DESC1 {
    let mut desc = DXGI_ADAPTER_DESC1::default();
    for (dst, src) in desc.Description.iter_mut().zip(name.encode_utf16()) {
        *dst = src;
    }
    desc
}

// ============================================================================
// Description conversion
// ============================================================================

#[test]
fn test_convert_desc_fields() {
    let mut desc = desc_named("Microsoft Basic Render Driver");
    desc.VendorId = 0x1414;
    desc.DeviceId = 0x8C;
    desc.AdapterLuid = LUID { LowPart: 0xABCD, HighPart: -2 };
    desc.Flags = DXGI_ADAPTER_FLAG_SOFTWARE.0 as u32;

    let converted = convert_desc(&desc);
    assert_eq!(converted.description, "Microsoft Basic Render Driver");
    assert_eq!(converted.vendor_id, 0x1414);
    assert_eq!(converted.device_id, 0x8C);
    assert_eq!(converted.luid, AdapterLuid::new(0xABCD, -2));
    assert!(converted.is_software);
}

#[test]
fn test_convert_desc_hardware_adapter() {
    let converted = convert_desc(&desc_named("GPU"));
    assert_eq!(converted.description, "GPU");
    assert!(!converted.is_software);
    assert!(converted.luid.is_zero());
}

// ============================================================================
// Live adapters
// ============================================================================

#[test]
fn test_first_adapter_desc_matches_out_parameter_query() {
    let factory = DxgiAdapterFactory::new().unwrap();
    let adapter = factory.adapter_at(0).unwrap().expect("DXGI reports at least one adapter");

    let mut raw = DXGI_ADAPTER_DESC1::default();
    unsafe { adapter.as_raw().GetDesc1(&mut raw) }.unwrap();

    let desc = adapter.desc().unwrap();
    assert_eq!(desc.luid, AdapterLuid::new(raw.AdapterLuid.LowPart, raw.AdapterLuid.HighPart));
    assert!(!desc.description.is_empty());
    assert!(format!("{:?}", adapter).contains("DxgiAdapter"));
}

#[test]
fn test_adapter_past_end_is_none() {
    let factory = DxgiAdapterFactory::new().unwrap();
    assert!(factory.adapter_at(u32::MAX).unwrap().is_none());
}
