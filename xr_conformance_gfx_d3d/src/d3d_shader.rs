/// FxcShaderBackend - D3DCompile implementation of ShaderBackend

use std::ffi::CString;
use windows::core::PCSTR;
use windows::Win32::Foundation::E_INVALIDARG;
use windows::Win32::Graphics::Direct3D::Fxc::D3DCompile;
use windows::Win32::Graphics::Direct3D::ID3DBlob;
use xr_conformance_gfx::xrc::{Error, Result};
use xr_conformance_gfx::xrc::shader::{ShaderBackend, ShaderCompileFlags, ShaderCompiler};

/// Shader compiler over the system FXC compiler
pub type FxcShaderCompiler = ShaderCompiler<FxcShaderBackend>;

/// FXC (`d3dcompiler_47.dll`) backend
#[derive(Debug, Clone, Copy, Default)]
pub struct FxcShaderBackend;

impl FxcShaderBackend {
    /// Compiler front-end over FXC using the build's flag policy
    pub fn compiler() -> FxcShaderCompiler {
        ShaderCompiler::new(FxcShaderBackend)
    }
}

impl ShaderBackend for FxcShaderBackend {
    fn compile_raw(
        &self,
        source: &str,
        entry_point: &str,
        target_profile: &str,
        flags: ShaderCompileFlags,
    ) -> Result<Vec<u8>> {
        let entry_point = c_string(entry_point)?;
        let target_profile = c_string(target_profile)?;

        let mut code: Option<ID3DBlob> = None;
        let mut errors: Option<ID3DBlob> = None;

        let result = unsafe {
            D3DCompile(
                source.as_ptr().cast(),
                source.len(),
                PCSTR::null(),
                None,
                None,
                PCSTR(entry_point.as_ptr().cast()),
                PCSTR(target_profile.as_ptr().cast()),
                flags.bits(),
                0,
                &mut code,
                Some(&mut errors),
            )
        };

        if let Err(err) = result {
            let diagnostics = errors
                .as_ref()
                .map(|blob| String::from_utf8_lossy(blob_bytes(blob)).trim_end_matches('\0').trim_end().to_string())
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| err.message().to_string());
            return Err(Error::CompileError {
                status: err.code().0,
                diagnostics,
            });
        }

        Ok(code.as_ref().map(|blob| blob_bytes(blob).to_vec()).unwrap_or_default())
    }
}

fn blob_bytes(blob: &ID3DBlob) -> &[u8] {
    unsafe {
        std::slice::from_raw_parts(blob.GetBufferPointer() as *const u8, blob.GetBufferSize())
    }
}

fn c_string(value: &str) -> Result<CString> {
    CString::new(value).map_err(|_| Error::CompileError {
        status: E_INVALIDARG.0,
        diagnostics: format!("'{}' contains an interior NUL byte", value.escape_debug()),
    })
}
