/// FormatRegistry - read-only map from native format to capability descriptor
///
/// The process-wide instance is built from the static catalogue on first
/// access and never mutated afterwards, so any number of test threads may
/// read it without locking.

use std::sync::LazyLock;
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use super::catalogue::CATALOGUE;
use super::descriptor::FormatDescriptor;
use super::dxgi_format::DxgiFormat;

static GLOBAL_REGISTRY: LazyLock<FormatRegistry> = LazyLock::new(|| FormatRegistry::new(CATALOGUE));

/// Immutable format capability registry
#[derive(Debug)]
pub struct FormatRegistry {
    /// Descriptors in catalogue order
    entries: &'static [FormatDescriptor],
    /// native id -> index into `entries`
    index: FxHashMap<DxgiFormat, usize>,
}

impl FormatRegistry {
    /// Build a registry over `entries`
    ///
    /// # Panics
    ///
    /// Panics if two entries share a native id. The catalogue is compiled in,
    /// so a duplicate is a programming error.
    pub fn new(entries: &'static [FormatDescriptor]) -> Self {
        let mut index = FxHashMap::with_capacity_and_hasher(entries.len(), Default::default());
        for (i, entry) in entries.iter().enumerate() {
            let previous = index.insert(entry.native_id, i);
            assert!(previous.is_none(), "duplicate format in catalogue: {}", entry.native_id);
        }
        Self { entries, index }
    }

    /// The process-wide registry over the DXGI catalogue
    pub fn global() -> &'static FormatRegistry {
        &GLOBAL_REGISTRY
    }

    /// Exact-key lookup
    ///
    /// # Errors
    ///
    /// `NotFound` when the harness does not know how to test `native_id`.
    pub fn lookup(&self, native_id: DxgiFormat) -> Result<&'static FormatDescriptor> {
        self.index
            .get(&native_id)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| Error::NotFound(format!("no swapchain test entry for {}", native_id)))
    }

    /// Every descriptor, in catalogue order
    pub fn all_entries(&self) -> std::slice::Iter<'static, FormatDescriptor> {
        self.entries.iter()
    }

    /// Descriptors of formats that can be requested for swapchain creation
    pub fn concrete_formats(&self) -> impl Iterator<Item = &'static FormatDescriptor> {
        self.entries.iter().filter(|d| !d.is_typeless)
    }

    /// Descriptors of typeless formats
    pub fn typeless_formats(&self) -> impl Iterator<Item = &'static FormatDescriptor> {
        self.entries.iter().filter(|d| d.is_typeless)
    }

    /// Descriptor of the typeless format `native_id` is created from
    ///
    /// For formats without a typeless counterpart this is the format itself.
    pub fn typeless_source(&self, native_id: DxgiFormat) -> Result<&'static FormatDescriptor> {
        let descriptor = self.lookup(native_id)?;
        self.lookup(descriptor.typeless_equivalent)
    }

    pub fn contains(&self, native_id: DxgiFormat) -> bool {
        self.index.contains_key(&native_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Diagnostic name for any format id, registered or not
    pub fn format_name(&self, native_id: DxgiFormat) -> String {
        match self.lookup(native_id) {
            Ok(descriptor) => descriptor.display_name.to_string(),
            Err(_) => native_id.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
