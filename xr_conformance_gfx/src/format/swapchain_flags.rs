/// Swapchain usage and creation flags, plus the named flag sets the format
/// catalogue is written with.

use bitflags::bitflags;

bitflags! {
    /// `XrSwapchainUsageFlags` bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SwapchainUsageFlags: u64 {
        const COLOR_ATTACHMENT = 0x0000_0001;
        const DEPTH_STENCIL_ATTACHMENT = 0x0000_0002;
        const UNORDERED_ACCESS = 0x0000_0004;
        const TRANSFER_SRC = 0x0000_0008;
        const TRANSFER_DST = 0x0000_0010;
        const SAMPLED = 0x0000_0020;
        const MUTABLE_FORMAT = 0x0000_0040;
        const INPUT_ATTACHMENT = 0x0000_0080;
    }
}

bitflags! {
    /// `XrSwapchainCreateFlags` bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SwapchainCreateFlags: u64 {
        const PROTECTED_CONTENT = 0x0000_0001;
        const STATIC_IMAGE = 0x0000_0002;
    }
}

// ===== NAMED USAGE SETS =====

/// Render to it and sample from it
pub const COLOR_TEXTURE_USAGE: SwapchainUsageFlags =
    SwapchainUsageFlags::COLOR_ATTACHMENT.union(SwapchainUsageFlags::SAMPLED);

/// Color usage with views of other formats from the same typeless family
pub const COLOR_TEXTURE_USAGE_MUTABLE: SwapchainUsageFlags =
    COLOR_TEXTURE_USAGE.union(SwapchainUsageFlags::MUTABLE_FORMAT);

/// Block-compressed formats can't be render targets, so sampling only
pub const COLOR_TEXTURE_USAGE_COMPRESSED: SwapchainUsageFlags = SwapchainUsageFlags::SAMPLED;

/// Depth/stencil attachment that can also be sampled
pub const DEPTH_TEXTURE_USAGE: SwapchainUsageFlags =
    SwapchainUsageFlags::DEPTH_STENCIL_ATTACHMENT.union(SwapchainUsageFlags::SAMPLED);

// ===== NAMED USAGE COMBINATIONS (per format family) =====

/// Color formats created through a typeless family
pub const COLOR_USAGE_COMBOS: &[SwapchainUsageFlags] = &[COLOR_TEXTURE_USAGE, COLOR_TEXTURE_USAGE_MUTABLE];

/// Color formats created as-is (no typeless family, so no mutable format)
pub const COLOR_USAGE_COMBOS_IMMUTABLE: &[SwapchainUsageFlags] = &[COLOR_TEXTURE_USAGE];

/// Block-compressed formats
pub const COMPRESSED_USAGE_COMBOS: &[SwapchainUsageFlags] = &[COLOR_TEXTURE_USAGE_COMPRESSED];

/// Depth/stencil formats
pub const DEPTH_USAGE_COMBOS: &[SwapchainUsageFlags] = &[DEPTH_TEXTURE_USAGE];

// ===== NAMED CREATION FLAG SETS =====

/// Creation flags a runtime may accept for color formats
pub const COLOR_CREATE_FLAGS: &[SwapchainCreateFlags] = &[
    SwapchainCreateFlags::empty(),
    SwapchainCreateFlags::PROTECTED_CONTENT,
    SwapchainCreateFlags::STATIC_IMAGE,
];

/// Creation flags a runtime may accept for depth formats
pub const DEPTH_CREATE_FLAGS: &[SwapchainCreateFlags] = &[
    SwapchainCreateFlags::empty(),
    SwapchainCreateFlags::STATIC_IMAGE,
];
