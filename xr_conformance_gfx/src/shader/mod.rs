/// Shader module - compile policy and compiler front-end

pub mod compile_policy;
pub mod shader_compiler;

pub use compile_policy::*;
pub use shader_compiler::*;
