/// Per-format capability descriptor

use super::dxgi_format::DxgiFormat;
use super::swapchain_flags::{SwapchainCreateFlags, SwapchainUsageFlags, DEPTH_TEXTURE_USAGE};

/// Capability axes reserved for future use (array sizes, sample counts, mip
/// counts). Empty for every catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReservedAxes {
    pub array_counts: &'static [u32],
    pub sample_counts: &'static [u32],
    pub mip_counts: &'static [u32],
}

impl ReservedAxes {
    pub const EMPTY: ReservedAxes = ReservedAxes {
        array_counts: &[],
        sample_counts: &[],
        mip_counts: &[],
    };

    pub fn is_empty(&self) -> bool {
        self.array_counts.is_empty() && self.sample_counts.is_empty() && self.mip_counts.is_empty()
    }
}

/// What the harness expects of one native pixel format
///
/// Descriptors are value objects living in the static catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// Registry key
    pub native_id: DxgiFormat,
    /// Diagnostic label (`DXGI_FORMAT_*`)
    pub display_name: &'static str,
    /// No concrete numeric interpretation; only ever a family for concrete formats
    pub is_typeless: bool,
    pub supports_mipmap: bool,
    pub supports_array: bool,
    /// Block-compressed
    pub is_compressed: bool,
    /// Typeless format this one is created from, or itself
    pub typeless_equivalent: DxgiFormat,
    /// Usage flag sets a runtime may report as supported, in order
    pub expected_usage_combos: &'static [SwapchainUsageFlags],
    /// Creation flag sets a runtime may accept
    pub expected_creation_flags: &'static [SwapchainCreateFlags],
    pub reserved: ReservedAxes,
}

impl FormatDescriptor {
    /// False when the format is created as-is by the runtime
    pub fn has_typeless_equivalent(&self) -> bool {
        self.typeless_equivalent != self.native_id
    }

    /// Concrete depth/stencil format
    pub fn is_depth_format(&self) -> bool {
        self.expected_usage_combos.contains(&DEPTH_TEXTURE_USAGE)
    }

    /// Whether `usage` is exactly one of the expected usage combinations
    pub fn allows_usage(&self, usage: SwapchainUsageFlags) -> bool {
        self.expected_usage_combos.contains(&usage)
    }

    /// Whether `flags` is exactly one of the expected creation flag sets
    pub fn allows_creation(&self, flags: SwapchainCreateFlags) -> bool {
        self.expected_creation_flags.contains(&flags)
    }
}
