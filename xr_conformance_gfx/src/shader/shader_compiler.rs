/// ShaderCompiler - compiles HLSL with the harness' fixed policy
///
/// The actual compiler lives behind the `ShaderBackend` trait (D3DCompile in
/// the d3d backend crate). Every call recompiles; nothing is cached.

use crate::error::{Error, Result};
use super::compile_policy::{ShaderBuildMode, ShaderCompileFlags};

/// Compiler backend
///
/// Implementations return the bytecode on success, or
/// `Error::CompileError` carrying the compiler's status and full diagnostic
/// buffer on failure.
pub trait ShaderBackend {
    fn compile_raw(
        &self,
        source: &str,
        entry_point: &str,
        target_profile: &str,
        flags: ShaderCompileFlags,
    ) -> Result<Vec<u8>>;
}

impl<B: ShaderBackend + ?Sized> ShaderBackend for &B {
    fn compile_raw(
        &self,
        source: &str,
        entry_point: &str,
        target_profile: &str,
        flags: ShaderCompileFlags,
    ) -> Result<Vec<u8>> {
        (**self).compile_raw(source, entry_point, target_profile, flags)
    }
}

/// Compiled shader bytecode, owned by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderBlob {
    bytecode: Vec<u8>,
    entry_point: String,
    target_profile: String,
}

impl ShaderBlob {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytecode
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytecode
    }

    pub fn len(&self) -> usize {
        self.bytecode.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytecode.is_empty()
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    pub fn target_profile(&self) -> &str {
        &self.target_profile
    }
}

/// Shader compiler front-end
pub struct ShaderCompiler<B: ShaderBackend> {
    backend: B,
    flags: ShaderCompileFlags,
}

impl<B: ShaderBackend> ShaderCompiler<B> {
    /// Compiler using the policy of the running build
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            flags: ShaderCompileFlags::policy(ShaderBuildMode::current()),
        }
    }

    /// Flags passed to the backend on every call
    pub fn flags(&self) -> ShaderCompileFlags {
        self.flags
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Compile `source` at `entry_point` for `target_profile` (e.g. `"ps_5_0"`)
    ///
    /// # Errors
    ///
    /// `CompileError` with the backend's diagnostic text when compilation fails.
    pub fn compile(&self, source: &str, entry_point: &str, target_profile: &str) -> Result<ShaderBlob> {
        crate::xrc_trace!(
            "xrc::ShaderCompiler",
            "Compiling '{}' for {} with flags {:?}",
            entry_point,
            target_profile,
            self.flags
        );

        let bytecode = self
            .backend
            .compile_raw(source, entry_point, target_profile, self.flags)
            .map_err(|error| {
                crate::xrc_error!(
                    "xrc::ShaderCompiler",
                    "Compiling '{}' for {} failed: {}",
                    entry_point,
                    target_profile,
                    error
                );
                error
            })?;

        if bytecode.is_empty() {
            let error = Error::CompileError {
                status: 0,
                diagnostics: format!("compiler returned no bytecode for '{}' ({})", entry_point, target_profile),
            };
            crate::xrc_error!("xrc::ShaderCompiler", "{}", error);
            return Err(error);
        }

        Ok(ShaderBlob {
            bytecode,
            entry_point: entry_point.to_string(),
            target_profile: target_profile.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "shader_compiler_tests.rs"]
mod tests;
