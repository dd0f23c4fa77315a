/// The DXGI swapchain format catalogue
///
/// One row per format the harness knows how to test. Rows are grouped by
/// typeless family; the typeless row comes first.
///
/// Row columns: format, supports_mipmap, supports_array, is_compressed,
/// typeless equivalent, then usage combos and creation flags for concrete rows.

use super::descriptor::{FormatDescriptor, ReservedAxes};
use super::dxgi_format::DxgiFormat as F;
use super::swapchain_flags::{
    SwapchainCreateFlags, SwapchainUsageFlags,
    COLOR_CREATE_FLAGS, DEPTH_CREATE_FLAGS,
    COLOR_USAGE_COMBOS, COLOR_USAGE_COMBOS_IMMUTABLE, COMPRESSED_USAGE_COMBOS, DEPTH_USAGE_COMBOS,
};

const fn display_name(id: F) -> &'static str {
    match id.name() {
        Some(name) => name,
        None => panic!("catalogue format without a DXGI name"),
    }
}

const fn typeless(
    id: F,
    supports_mipmap: bool,
    supports_array: bool,
    is_compressed: bool,
    typeless_equivalent: F,
) -> FormatDescriptor {
    FormatDescriptor {
        native_id: id,
        display_name: display_name(id),
        is_typeless: true,
        supports_mipmap,
        supports_array,
        is_compressed,
        typeless_equivalent,
        expected_usage_combos: &[],
        expected_creation_flags: &[],
        reserved: ReservedAxes::EMPTY,
    }
}

const fn concrete(
    id: F,
    supports_mipmap: bool,
    supports_array: bool,
    is_compressed: bool,
    typeless_equivalent: F,
    expected_usage_combos: &'static [SwapchainUsageFlags],
    expected_creation_flags: &'static [SwapchainCreateFlags],
) -> FormatDescriptor {
    FormatDescriptor {
        native_id: id,
        display_name: display_name(id),
        is_typeless: false,
        supports_mipmap,
        supports_array,
        is_compressed,
        typeless_equivalent,
        expected_usage_combos,
        expected_creation_flags,
        reserved: ReservedAxes::EMPTY,
    }
}

const COLOR: &[SwapchainUsageFlags] = COLOR_USAGE_COMBOS;
const COLOR_AS_IS: &[SwapchainUsageFlags] = COLOR_USAGE_COMBOS_IMMUTABLE;
const COMPRESSED: &[SwapchainUsageFlags] = COMPRESSED_USAGE_COMBOS;
const DEPTH: &[SwapchainUsageFlags] = DEPTH_USAGE_COMBOS;
const COLOR_CREATE: &[SwapchainCreateFlags] = COLOR_CREATE_FLAGS;
const DEPTH_CREATE: &[SwapchainCreateFlags] = DEPTH_CREATE_FLAGS;

#[rustfmt::skip]
pub(crate) static CATALOGUE: &[FormatDescriptor] = &[
    typeless(F::R32G32B32A32_TYPELESS, true, true, false, F::R32G32B32A32_TYPELESS),
    concrete(F::R32G32B32A32_FLOAT, true, true, false, F::R32G32B32A32_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R32G32B32A32_UINT, true, true, false, F::R32G32B32A32_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R32G32B32A32_SINT, true, true, false, F::R32G32B32A32_TYPELESS, COLOR, COLOR_CREATE),

    typeless(F::R32G32B32_TYPELESS, true, true, false, F::R32G32B32_TYPELESS),
    concrete(F::R32G32B32_FLOAT, true, true, false, F::R32G32B32_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R32G32B32_UINT, true, true, false, F::R32G32B32_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R32G32B32_SINT, true, true, false, F::R32G32B32_TYPELESS, COLOR, COLOR_CREATE),

    typeless(F::R16G16B16A16_TYPELESS, true, true, false, F::R16G16B16A16_TYPELESS),
    concrete(F::R16G16B16A16_FLOAT, true, true, false, F::R16G16B16A16_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R16G16B16A16_UNORM, true, true, false, F::R16G16B16A16_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R16G16B16A16_UINT, true, true, false, F::R16G16B16A16_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R16G16B16A16_SNORM, true, true, false, F::R16G16B16A16_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R16G16B16A16_SINT, true, true, false, F::R16G16B16A16_TYPELESS, COLOR, COLOR_CREATE),

    typeless(F::R32G32_TYPELESS, true, true, false, F::R32G32_TYPELESS),
    concrete(F::R32G32_FLOAT, true, true, false, F::R32G32_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R32G32_UINT, true, true, false, F::R32G32_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R32G32_SINT, true, true, false, F::R32G32_TYPELESS, COLOR, COLOR_CREATE),

    typeless(F::R32G8X24_TYPELESS, true, true, false, F::R32G8X24_TYPELESS),
    concrete(F::D32_FLOAT_S8X24_UINT, true, false, false, F::R32G8X24_TYPELESS, DEPTH, DEPTH_CREATE),

    typeless(F::R32_FLOAT_X8X24_TYPELESS, true, true, false, F::R32_FLOAT_X8X24_TYPELESS),
    concrete(F::X32_TYPELESS_G8X24_UINT, true, true, false, F::R32_FLOAT_X8X24_TYPELESS, COLOR, COLOR_CREATE),

    typeless(F::R10G10B10A2_TYPELESS, true, true, false, F::R10G10B10A2_TYPELESS),
    concrete(F::R10G10B10A2_UNORM, true, true, false, F::R10G10B10A2_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R10G10B10A2_UINT, true, true, false, F::R10G10B10A2_TYPELESS, COLOR, COLOR_CREATE),

    // No typeless equivalent, created as-is by the runtime
    concrete(F::R11G11B10_FLOAT, false, true, false, F::R11G11B10_FLOAT, COLOR_AS_IS, COLOR_CREATE),

    typeless(F::R8G8B8A8_TYPELESS, true, true, false, F::R8G8B8A8_TYPELESS),
    concrete(F::R8G8B8A8_UNORM, true, true, false, F::R8G8B8A8_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R8G8B8A8_UNORM_SRGB, true, true, false, F::R8G8B8A8_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R8G8B8A8_UINT, true, true, false, F::R8G8B8A8_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R8G8B8A8_SNORM, true, true, false, F::R8G8B8A8_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R8G8B8A8_SINT, true, true, false, F::R8G8B8A8_TYPELESS, COLOR, COLOR_CREATE),

    typeless(F::R16G16_TYPELESS, true, true, false, F::R16G16_TYPELESS),
    concrete(F::R16G16_FLOAT, true, true, false, F::R16G16_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R16G16_UNORM, true, true, false, F::R16G16_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R16G16_UINT, true, true, false, F::R16G16_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R16G16_SNORM, true, true, false, F::R16G16_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R16G16_SINT, true, true, false, F::R16G16_TYPELESS, COLOR, COLOR_CREATE),

    typeless(F::R32_TYPELESS, true, true, false, F::R32_TYPELESS),
    concrete(F::D32_FLOAT, true, false, false, F::R32_TYPELESS, DEPTH, DEPTH_CREATE),
    concrete(F::R32_FLOAT, true, true, false, F::R32_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R32_UINT, true, true, false, F::R32_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R32_SINT, true, true, false, F::R32_TYPELESS, COLOR, COLOR_CREATE),

    typeless(F::R24G8_TYPELESS, true, true, false, F::R24G8_TYPELESS),
    concrete(F::D24_UNORM_S8_UINT, true, false, false, F::R24G8_TYPELESS, DEPTH, DEPTH_CREATE),
    // View formats of the R24G8 family, typeless themselves
    typeless(F::R24_UNORM_X8_TYPELESS, true, true, false, F::R24G8_TYPELESS),
    typeless(F::X24_TYPELESS_G8_UINT, true, true, false, F::R24G8_TYPELESS),

    typeless(F::R8G8_TYPELESS, true, true, false, F::R8G8_TYPELESS),
    concrete(F::R8G8_UNORM, true, true, false, F::R8G8_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R8G8_UINT, true, true, false, F::R8G8_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R8G8_SNORM, true, true, false, F::R8G8_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R8G8_SINT, true, true, false, F::R8G8_TYPELESS, COLOR, COLOR_CREATE),

    typeless(F::R16_TYPELESS, true, true, false, F::R16_TYPELESS),
    concrete(F::R16_FLOAT, true, true, false, F::R16_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::D16_UNORM, true, false, false, F::R16_TYPELESS, DEPTH, DEPTH_CREATE),
    concrete(F::R16_UNORM, true, true, false, F::R16_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R16_UINT, true, true, false, F::R16_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R16_SNORM, true, true, false, F::R16_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R16_SINT, true, true, false, F::R16_TYPELESS, COLOR, COLOR_CREATE),

    typeless(F::R8_TYPELESS, true, true, false, F::R8_TYPELESS),
    concrete(F::R8_UNORM, true, true, false, F::R8_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R8_UINT, true, true, false, F::R8_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R8_SNORM, true, true, false, F::R8_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::R8_SINT, true, true, false, F::R8_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::A8_UNORM, true, true, false, F::R8_TYPELESS, COLOR, COLOR_CREATE),

    // No typeless equivalents, created as-is by the runtime
    concrete(F::R1_UNORM, true, true, false, F::R1_UNORM, COLOR_AS_IS, COLOR_CREATE),
    concrete(F::R9G9B9E5_SHAREDEXP, false, true, false, F::R9G9B9E5_SHAREDEXP, COLOR_AS_IS, COLOR_CREATE),
    concrete(F::R8G8_B8G8_UNORM, false, true, false, F::R8G8_B8G8_UNORM, COLOR_AS_IS, COLOR_CREATE),
    concrete(F::G8R8_G8B8_UNORM, false, true, false, F::G8R8_G8B8_UNORM, COLOR_AS_IS, COLOR_CREATE),

    typeless(F::BC1_TYPELESS, true, true, true, F::BC1_TYPELESS),
    concrete(F::BC1_UNORM, true, true, true, F::BC1_TYPELESS, COMPRESSED, COLOR_CREATE),
    concrete(F::BC1_UNORM_SRGB, true, true, true, F::BC1_TYPELESS, COMPRESSED, COLOR_CREATE),

    typeless(F::BC2_TYPELESS, true, true, true, F::BC2_TYPELESS),
    concrete(F::BC2_UNORM, true, true, true, F::BC2_TYPELESS, COMPRESSED, COLOR_CREATE),
    concrete(F::BC2_UNORM_SRGB, true, true, true, F::BC2_TYPELESS, COMPRESSED, COLOR_CREATE),

    typeless(F::BC3_TYPELESS, true, true, true, F::BC3_TYPELESS),
    concrete(F::BC3_UNORM, true, true, true, F::BC3_TYPELESS, COMPRESSED, COLOR_CREATE),
    concrete(F::BC3_UNORM_SRGB, true, true, true, F::BC3_TYPELESS, COMPRESSED, COLOR_CREATE),

    typeless(F::BC4_TYPELESS, true, true, true, F::BC4_TYPELESS),
    concrete(F::BC4_UNORM, true, true, true, F::BC4_TYPELESS, COMPRESSED, COLOR_CREATE),
    concrete(F::BC4_SNORM, true, true, true, F::BC4_TYPELESS, COMPRESSED, COLOR_CREATE),

    typeless(F::BC5_TYPELESS, true, true, true, F::BC5_TYPELESS),
    concrete(F::BC5_UNORM, true, true, true, F::BC5_TYPELESS, COMPRESSED, COLOR_CREATE),
    concrete(F::BC5_SNORM, true, true, true, F::BC5_TYPELESS, COMPRESSED, COLOR_CREATE),

    // No typeless equivalents, created as-is by the runtime
    concrete(F::B5G6R5_UNORM, false, true, false, F::B5G6R5_UNORM, COLOR_AS_IS, COLOR_CREATE),
    concrete(F::B5G5R5A1_UNORM, false, true, false, F::B5G5R5A1_UNORM, COLOR_AS_IS, COLOR_CREATE),
    concrete(F::R10G10B10_XR_BIAS_A2_UNORM, false, true, false, F::R10G10B10_XR_BIAS_A2_UNORM, COLOR_AS_IS, COLOR_CREATE),

    typeless(F::B8G8R8A8_TYPELESS, true, true, false, F::B8G8R8A8_TYPELESS),
    concrete(F::B8G8R8A8_UNORM, true, true, false, F::B8G8R8A8_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::B8G8R8A8_UNORM_SRGB, true, true, false, F::B8G8R8A8_TYPELESS, COLOR, COLOR_CREATE),

    typeless(F::B8G8R8X8_TYPELESS, true, true, false, F::B8G8R8X8_TYPELESS),
    concrete(F::B8G8R8X8_UNORM, true, true, false, F::B8G8R8X8_TYPELESS, COLOR, COLOR_CREATE),
    concrete(F::B8G8R8X8_UNORM_SRGB, true, true, false, F::B8G8R8X8_TYPELESS, COLOR, COLOR_CREATE),

    typeless(F::BC6H_TYPELESS, true, true, true, F::BC6H_TYPELESS),
    concrete(F::BC6H_UF16, true, true, true, F::BC6H_TYPELESS, COMPRESSED, COLOR_CREATE),
    concrete(F::BC6H_SF16, true, true, true, F::BC6H_TYPELESS, COMPRESSED, COLOR_CREATE),

    typeless(F::BC7_TYPELESS, true, true, true, F::BC7_TYPELESS),
    concrete(F::BC7_UNORM, true, true, true, F::BC7_TYPELESS, COMPRESSED, COLOR_CREATE),
    concrete(F::BC7_UNORM_SRGB, true, true, true, F::BC7_TYPELESS, COMPRESSED, COLOR_CREATE),

    // No typeless equivalent, created as-is by the runtime
    concrete(F::B4G4R4A4_UNORM, false, true, false, F::B4G4R4A4_UNORM, COLOR_AS_IS, COLOR_CREATE),
];
