/// Format module - swapchain format capability registry

pub mod dxgi_format;
pub mod swapchain_flags;
pub mod descriptor;
pub mod registry;
mod catalogue;

pub use dxgi_format::*;
pub use swapchain_flags::*;
pub use descriptor::*;
pub use registry::*;
