//! Unit tests for shader_compiler.rs and compile_policy.rs
//!
//! Uses a mock backend; no compiler or GPU required.

use std::cell::RefCell;
use super::*;

// ============================================================================
// Mock backend
// ============================================================================

/// Accepts sources containing `entry_point`, rejects everything else
struct MockBackend {
    calls: RefCell<Vec<(String, String, ShaderCompileFlags)>>,
}

impl MockBackend {
    fn new() -> Self {
        Self { calls: RefCell::new(Vec::new()) }
    }
}

impl ShaderBackend for MockBackend {
    fn compile_raw(
        &self,
        source: &str,
        entry_point: &str,
        target_profile: &str,
        flags: ShaderCompileFlags,
    ) -> Result<Vec<u8>> {
        self.calls
            .borrow_mut()
            .push((entry_point.to_string(), target_profile.to_string(), flags));

        if source.contains(entry_point) {
            Ok(b"DXBC".iter().copied().chain(source.bytes().take(8)).collect())
        } else {
            Err(Error::CompileError {
                status: 0x80004005u32 as i32,
                diagnostics: format!("error X3501: '{}': entrypoint not found", entry_point),
            })
        }
    }
}

/// Succeeds with no bytecode
struct EmptyBackend;

impl ShaderBackend for EmptyBackend {
    fn compile_raw(&self, _: &str, _: &str, _: &str, _: ShaderCompileFlags) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

const VALID_PS: &str = "float4 main() : SV_Target { return float4(1, 0, 0, 1); }";
const INVALID_PS: &str = "float4 ps_entry() : SV_Target { return 0; }";

// ============================================================================
// Policy
// ============================================================================

#[test]
fn test_debug_policy() {
    let flags = ShaderCompileFlags::policy(ShaderBuildMode::Debug);
    assert_eq!(
        flags,
        ShaderCompileFlags::PACK_MATRIX_COLUMN_MAJOR
            | ShaderCompileFlags::ENABLE_STRICTNESS
            | ShaderCompileFlags::WARNINGS_ARE_ERRORS
            | ShaderCompileFlags::SKIP_OPTIMIZATION
            | ShaderCompileFlags::DEBUG
    );
    assert!(!flags.contains(ShaderCompileFlags::OPTIMIZATION_LEVEL3));
}

#[test]
fn test_release_policy() {
    let flags = ShaderCompileFlags::policy(ShaderBuildMode::Release);
    assert_eq!(
        flags,
        ShaderCompileFlags::PACK_MATRIX_COLUMN_MAJOR
            | ShaderCompileFlags::ENABLE_STRICTNESS
            | ShaderCompileFlags::WARNINGS_ARE_ERRORS
            | ShaderCompileFlags::OPTIMIZATION_LEVEL3
    );
}

#[test]
fn test_flag_bits_match_d3dcompile() {
    assert_eq!(ShaderCompileFlags::DEBUG.bits(), 0x1);
    assert_eq!(ShaderCompileFlags::SKIP_OPTIMIZATION.bits(), 0x4);
    assert_eq!(ShaderCompileFlags::PACK_MATRIX_COLUMN_MAJOR.bits(), 0x10);
    assert_eq!(ShaderCompileFlags::ENABLE_STRICTNESS.bits(), 0x800);
    assert_eq!(ShaderCompileFlags::OPTIMIZATION_LEVEL3.bits(), 0x8000);
    assert_eq!(ShaderCompileFlags::WARNINGS_ARE_ERRORS.bits(), 0x40000);
}

#[test]
fn test_current_mode_follows_build() {
    let expected = if cfg!(debug_assertions) { ShaderBuildMode::Debug } else { ShaderBuildMode::Release };
    assert_eq!(ShaderBuildMode::current(), expected);
}

// ============================================================================
// compile
// ============================================================================

#[test]
fn test_compile_valid_source() {
    let compiler = ShaderCompiler::new(MockBackend::new());
    let blob = compiler.compile(VALID_PS, "main", "ps_5_0").unwrap();

    assert!(!blob.is_empty());
    assert!(blob.as_bytes().starts_with(b"DXBC"));
    assert_eq!(blob.entry_point(), "main");
    assert_eq!(blob.target_profile(), "ps_5_0");
}

#[test]
fn test_compile_invalid_source_carries_diagnostics() {
    let compiler = ShaderCompiler::new(MockBackend::new());
    let err = compiler.compile(INVALID_PS, "main", "ps_5_0").unwrap_err();

    match err {
        Error::CompileError { status, diagnostics } => {
            assert_eq!(status, 0x80004005u32 as i32);
            assert!(!diagnostics.is_empty());
            assert!(diagnostics.contains("X3501"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_compile_passes_policy_flags_every_call() {
    let backend = MockBackend::new();
    let compiler = ShaderCompiler::new(&backend);

    compiler.compile(VALID_PS, "main", "ps_5_0").unwrap();
    compiler.compile(VALID_PS, "main", "ps_5_0").unwrap();

    let calls = backend.calls.borrow();
    // No caching: both calls reach the backend
    assert_eq!(calls.len(), 2);
    for (entry, target, flags) in calls.iter() {
        assert_eq!(entry, "main");
        assert_eq!(target, "ps_5_0");
        assert_eq!(*flags, ShaderCompileFlags::policy(ShaderBuildMode::current()));
    }
    assert_eq!(compiler.flags(), ShaderCompileFlags::policy(ShaderBuildMode::current()));
}

#[test]
fn test_empty_bytecode_is_a_compile_error() {
    let compiler = ShaderCompiler::new(EmptyBackend);
    let err = compiler.compile(VALID_PS, "main", "vs_5_0").unwrap_err();
    assert!(matches!(err, Error::CompileError { .. }));
}

#[test]
fn test_blob_into_bytes() {
    let compiler = ShaderCompiler::new(MockBackend::new());
    let blob = compiler.compile(VALID_PS, "main", "ps_5_0").unwrap();
    let len = blob.len();
    assert_eq!(blob.into_bytes().len(), len);
}
