//! Unit tests for adapter_selector.rs and luid.rs
//!
//! Uses MockAdapterFactory; no GPU required.

use super::*;
use crate::adapter::luid::luid_matches;
use crate::adapter::mock_adapter::MockAdapterFactory;

// ============================================================================
// LUID
// ============================================================================

#[test]
fn test_luid_from_u64_splits_halves() {
    let luid = AdapterLuid::from_u64(0x0000_0001_0000_ABCD);
    assert_eq!(luid.high_part, 1);
    assert_eq!(luid.low_part, 0xABCD);
    assert_eq!(luid.to_u64(), 0x0000_0001_0000_ABCD);
}

#[test]
fn test_luid_negative_high_part_roundtrip() {
    let luid = AdapterLuid::new(0xFFFF_FFFF, -1);
    assert_eq!(luid.to_u64(), u64::MAX);
    assert_eq!(AdapterLuid::from(u64::MAX), luid);
}

#[test]
fn test_luid_zero() {
    assert!(AdapterLuid::ZERO.is_zero());
    assert!(AdapterLuid::default().is_zero());
    assert!(!AdapterLuid::new(1, 0).is_zero());
    assert!(!AdapterLuid::new(0, 1).is_zero());
}

#[test]
fn test_luid_matches() {
    let luid = AdapterLuid::new(0x1234, 0x56);
    assert!(luid_matches(luid, 0x0000_0056_0000_1234));
    assert!(!luid_matches(luid, 0x0000_1234_0000_0056));
}

#[test]
fn test_luid_display() {
    assert_eq!(AdapterLuid::new(0xABCD, 0x1).to_string(), "00000001-0000ABCD");
}

// ============================================================================
// enumerate_adapters
// ============================================================================

#[test]
fn test_enumerate_in_platform_order() {
    let selector = AdapterSelector::new(MockAdapterFactory::with_luids(&[10, 20, 30]));

    let indices: Vec<u32> = selector
        .enumerate_adapters()
        .map(|adapter| adapter.unwrap().index)
        .collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_enumerate_restarts_from_first_adapter() {
    let selector = AdapterSelector::new(MockAdapterFactory::with_luids(&[10, 20]));
    assert_eq!(selector.enumerate_adapters().count(), 2);
    assert_eq!(selector.enumerate_adapters().count(), 2);
}

#[test]
fn test_enumerate_empty_factory() {
    let selector = AdapterSelector::new(MockAdapterFactory::with_luids(&[]));
    assert!(selector.enumerate_adapters().next().is_none());
}

#[test]
fn test_enumerate_stops_after_error() {
    let mut factory = MockAdapterFactory::with_luids(&[10, 20, 30]);
    factory.fail_enum_at = Some(1);
    let selector = AdapterSelector::new(factory);

    let mut iter = selector.enumerate_adapters();
    assert!(iter.next().unwrap().is_ok());
    assert!(matches!(iter.next(), Some(Err(Error::PlatformError { .. }))));
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

// ============================================================================
// select_adapter
// ============================================================================

#[test]
fn test_select_zero_returns_first_adapter() {
    let selector = AdapterSelector::new(MockAdapterFactory::with_luids(&[10, 20, 30]));

    let selected = selector.select_adapter(AdapterLuid::ZERO).unwrap();
    let first = selector.enumerate_adapters().next().unwrap().unwrap();

    assert_eq!(selected.index, 0);
    assert_eq!(selected.desc().unwrap(), first.desc().unwrap());
}

#[test]
fn test_select_matching_luid() {
    let selector = AdapterSelector::new(MockAdapterFactory::with_luids(&[10, 0x0000_0002_0000_0014, 30]));

    let selected = selector.select_adapter(AdapterLuid::new(0x14, 2)).unwrap();
    assert_eq!(selected.index, 1);
    assert_eq!(selected.desc().unwrap().description, "Adapter 1");
}

#[test]
fn test_select_luid_with_negative_high_part() {
    let runtime_id: u64 = 0xFFFF_FFFE_0000_0042;
    let selector = AdapterSelector::new(MockAdapterFactory::with_luids(&[10, runtime_id]));

    let requested = AdapterLuid::new(0x42, -2);
    assert!(luid_matches(requested, runtime_id));

    let selected = selector.select_adapter(requested).unwrap();
    assert_eq!(selected.index, 1);
}

#[test]
fn test_select_unknown_luid_is_not_found() {
    let selector = AdapterSelector::new(MockAdapterFactory::with_luids(&[10, 20]));

    let err = selector.select_adapter(AdapterLuid::from_u64(99)).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_select_zero_with_no_adapters_is_not_found() {
    let selector = AdapterSelector::new(MockAdapterFactory::with_luids(&[]));
    assert!(selector.select_adapter(AdapterLuid::ZERO).unwrap_err().is_not_found());
}

#[test]
fn test_select_propagates_enumeration_failure() {
    let mut factory = MockAdapterFactory::with_luids(&[10, 20]);
    factory.fail_enum_at = Some(1);
    let selector = AdapterSelector::new(factory);

    let err = selector.select_adapter(AdapterLuid::from_u64(20)).unwrap_err();
    assert_eq!(err.status(), Some(0x887A0020u32 as i32));
}

#[test]
fn test_select_propagates_desc_failure() {
    let mut factory = MockAdapterFactory::with_luids(&[10, 20]);
    factory.fail_desc_at = Some(0);
    let selector = AdapterSelector::new(factory);

    // The first adapter is described even when any adapter would do
    let err = selector.select_adapter(AdapterLuid::ZERO).unwrap_err();
    assert!(matches!(err, Error::PlatformError { ref context, .. } if context == "GetDesc1"));
}

// ============================================================================
// Handle release
// ============================================================================

#[test]
fn test_skipped_adapters_are_released() {
    let selector = AdapterSelector::new(MockAdapterFactory::with_luids(&[10, 20, 30]));

    let selected = selector.select_adapter(AdapterLuid::from_u64(30)).unwrap();
    assert_eq!(selector.factory().created_handles(), 3);
    assert_eq!(selector.factory().live_handles(), 1);

    drop(selected);
    assert_eq!(selector.factory().live_handles(), 0);
    assert_eq!(selector.factory().released_handles(), 3);
}

#[test]
fn test_not_found_releases_every_handle() {
    let selector = AdapterSelector::new(MockAdapterFactory::with_luids(&[10, 20, 30]));

    selector.select_adapter(AdapterLuid::from_u64(40)).unwrap_err();
    assert_eq!(selector.factory().created_handles(), 3);
    assert_eq!(selector.factory().released_handles(), 3);
    assert_eq!(selector.factory().live_handles(), 0);
}

#[test]
fn test_error_path_releases_handles() {
    let mut factory = MockAdapterFactory::with_luids(&[10, 20, 30]);
    factory.fail_desc_at = Some(1);
    let selector = AdapterSelector::new(factory);

    selector.select_adapter(AdapterLuid::from_u64(30)).unwrap_err();
    assert_eq!(selector.factory().created_handles(), 2);
    assert_eq!(selector.factory().live_handles(), 0);
}

#[test]
fn test_selection_stops_at_first_match() {
    let selector = AdapterSelector::new(MockAdapterFactory::with_luids(&[10, 20, 30]));

    let _selected = selector.select_adapter(AdapterLuid::ZERO).unwrap();
    assert_eq!(selector.factory().created_handles(), 1);
}

// ============================================================================
// describe_adapters
// ============================================================================

#[test]
fn test_describe_adapters() {
    let selector = AdapterSelector::new(MockAdapterFactory::with_luids(&[10, 20]));

    let descs = selector.describe_adapters().unwrap();
    assert_eq!(descs.len(), 2);
    assert_eq!(descs[0].luid, AdapterLuid::from_u64(10));
    assert_eq!(descs[1].description, "Adapter 1");
    assert_eq!(selector.factory().live_handles(), 0);
}

#[test]
fn test_describe_adapters_propagates_failure() {
    let mut factory = MockAdapterFactory::with_luids(&[10, 20]);
    factory.fail_desc_at = Some(1);
    let selector = AdapterSelector::new(factory);

    assert!(matches!(selector.describe_adapters(), Err(Error::PlatformError { .. })));
}
