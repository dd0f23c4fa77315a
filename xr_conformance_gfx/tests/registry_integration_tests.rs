//! Integration tests for the swapchain format registry
//!
//! Walks the registry the way a swapchain conformance test does.
//! No GPU required.
//!
//! Run with: cargo test --test registry_integration_tests

use xr_conformance_gfx::xrc::Harness;
use xr_conformance_gfx::xrc::format::{
    DxgiFormat, FormatRegistry, SwapchainCreateFlags, SwapchainUsageFlags,
};

// ============================================================================
// ENUMERATION
// ============================================================================

#[test]
fn test_integration_harness_registry_is_global() {
    assert!(std::ptr::eq(Harness::registry(), FormatRegistry::global()));
}

#[test]
fn test_integration_every_entry_looks_up_to_itself() {
    let registry = Harness::registry();

    for entry in registry.all_entries() {
        let found = registry.lookup(entry.native_id).unwrap();
        assert_eq!(found, entry);
        assert!(found.display_name.starts_with("DXGI_FORMAT_"));
    }
}

#[test]
fn test_integration_runtime_format_list_partition() {
    let registry = Harness::registry();

    // Formats a runtime might report, plus one the catalogue does not know
    let runtime_formats = [
        DxgiFormat::R8G8B8A8_UNORM_SRGB,
        DxgiFormat::B8G8R8A8_UNORM,
        DxgiFormat::D32_FLOAT,
        DxgiFormat(130),
    ];

    let known: Vec<_> = runtime_formats
        .iter()
        .filter_map(|&id| registry.lookup(id).ok())
        .collect();
    assert_eq!(known.len(), 3);

    let unknown = registry.lookup(DxgiFormat(130)).unwrap_err();
    assert!(unknown.is_not_found());
}

// ============================================================================
// SWAPCHAIN CREATION MATRIX
// ============================================================================

#[test]
fn test_integration_creation_matrix_for_concrete_formats() {
    let registry = Harness::registry();

    for entry in registry.concrete_formats() {
        assert!(!entry.expected_usage_combos.is_empty(), "{}", entry.display_name);
        assert!(!entry.expected_creation_flags.is_empty(), "{}", entry.display_name);

        // Every format is creatable with no create flags
        assert!(entry.allows_creation(SwapchainCreateFlags::empty()));

        if entry.is_depth_format() {
            assert!(!entry.allows_creation(SwapchainCreateFlags::PROTECTED_CONTENT));
            assert!(entry.allows_usage(SwapchainUsageFlags::DEPTH_STENCIL_ATTACHMENT | SwapchainUsageFlags::SAMPLED));
        }
    }
}

#[test]
fn test_integration_typeless_families() {
    let registry = Harness::registry();

    let srgb = registry.lookup(DxgiFormat::R8G8B8A8_UNORM_SRGB).unwrap();
    let family = registry.typeless_source(srgb.native_id).unwrap();
    assert_eq!(family.native_id, DxgiFormat::R8G8B8A8_TYPELESS);
    assert!(family.is_typeless);

    let members: Vec<_> = registry
        .concrete_formats()
        .filter(|e| e.typeless_equivalent == DxgiFormat::R8G8B8A8_TYPELESS)
        .map(|e| e.native_id)
        .collect();
    assert!(members.contains(&DxgiFormat::R8G8B8A8_UNORM));
    assert!(members.contains(&DxgiFormat::R8G8B8A8_UNORM_SRGB));
    assert!(members.contains(&DxgiFormat::R8G8B8A8_UINT));
}
