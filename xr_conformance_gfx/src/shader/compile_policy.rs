/// Shader compilation policy
///
/// The flag bits match the `D3DCOMPILE_*` constants so backends can pass
/// `bits()` straight through.

use bitflags::bitflags;

bitflags! {
    /// `D3DCOMPILE_*` flags used by the harness
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShaderCompileFlags: u32 {
        const DEBUG = 1 << 0;
        const SKIP_OPTIMIZATION = 1 << 2;
        const PACK_MATRIX_COLUMN_MAJOR = 1 << 4;
        const ENABLE_STRICTNESS = 1 << 11;
        const OPTIMIZATION_LEVEL3 = 1 << 15;
        const WARNINGS_ARE_ERRORS = 1 << 18;
    }
}

/// Which build flavour the policy is computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderBuildMode {
    /// No optimization, debug info kept
    Debug,
    /// Maximum optimization
    Release,
}

impl ShaderBuildMode {
    /// Mode of the running build (`debug_assertions`)
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            ShaderBuildMode::Debug
        } else {
            ShaderBuildMode::Release
        }
    }
}

impl ShaderCompileFlags {
    /// Flags applied to every compilation, regardless of build mode
    pub const STRICT_BASE: ShaderCompileFlags = ShaderCompileFlags::PACK_MATRIX_COLUMN_MAJOR
        .union(ShaderCompileFlags::ENABLE_STRICTNESS)
        .union(ShaderCompileFlags::WARNINGS_ARE_ERRORS);

    /// Complete flag set for `mode`
    pub const fn policy(mode: ShaderBuildMode) -> ShaderCompileFlags {
        match mode {
            ShaderBuildMode::Debug => Self::STRICT_BASE
                .union(ShaderCompileFlags::SKIP_OPTIMIZATION)
                .union(ShaderCompileFlags::DEBUG),
            ShaderBuildMode::Release => Self::STRICT_BASE.union(ShaderCompileFlags::OPTIMIZATION_LEVEL3),
        }
    }
}
