/// Adapter module - GPU adapter identification and selection

pub mod luid;
pub mod adapter_selector;
pub mod mock_adapter;

pub use luid::*;
pub use adapter_selector::*;
