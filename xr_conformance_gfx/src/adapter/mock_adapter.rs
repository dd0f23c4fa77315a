/// Mock adapter factory for unit tests (no GPU required)
///
/// Tracks live adapter handles so tests can check every handle is released
/// exactly once.

#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::adapter::{Adapter, AdapterDesc, AdapterFactory, AdapterLuid};
#[cfg(test)]
use crate::error::{Error, Result};

// ============================================================================
// Mock Adapter
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockAdapter {
    pub index: u32,
    desc: Option<AdapterDesc>,
    live: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

#[cfg(test)]
impl Adapter for MockAdapter {
    fn desc(&self) -> Result<AdapterDesc> {
        self.desc.clone().ok_or_else(|| Error::PlatformError {
            context: "GetDesc1".to_string(),
            status: 0x887A0001u32 as i32,
        })
    }
}

#[cfg(test)]
impl Drop for MockAdapter {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Mock Factory
// ============================================================================

#[cfg(test)]
pub struct MockAdapterFactory {
    pub adapters: Vec<AdapterDesc>,
    /// Enumeration fails with a platform error at this index
    pub fail_enum_at: Option<u32>,
    /// Adapter at this index cannot be described
    pub fail_desc_at: Option<u32>,
    pub live: Arc<AtomicUsize>,
    pub created: Arc<AtomicUsize>,
    pub released: Arc<AtomicUsize>,
}

#[cfg(test)]
impl MockAdapterFactory {
    pub fn new(adapters: Vec<AdapterDesc>) -> Self {
        Self {
            adapters,
            fail_enum_at: None,
            fail_desc_at: None,
            live: Arc::new(AtomicUsize::new(0)),
            created: Arc::new(AtomicUsize::new(0)),
            released: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Factory with adapters named "Adapter N" and the given LUIDs
    pub fn with_luids(luids: &[u64]) -> Self {
        let adapters = luids
            .iter()
            .enumerate()
            .map(|(i, &id)| AdapterDesc {
                description: format!("Adapter {}", i),
                vendor_id: 0x10DE,
                device_id: 0x2000 + i as u32,
                luid: AdapterLuid::from_u64(id),
                ..AdapterDesc::default()
            })
            .collect();
        Self::new(adapters)
    }

    pub fn live_handles(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    pub fn created_handles(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn released_handles(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
impl AdapterFactory for MockAdapterFactory {
    type Adapter = MockAdapter;

    fn adapter_at(&self, index: u32) -> Result<Option<MockAdapter>> {
        if self.fail_enum_at == Some(index) {
            return Err(Error::PlatformError {
                context: "EnumAdapters1".to_string(),
                status: 0x887A0020u32 as i32,
            });
        }

        let Some(desc) = self.adapters.get(index as usize) else {
            return Ok(None);
        };

        self.live.fetch_add(1, Ordering::SeqCst);
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Some(MockAdapter {
            index,
            desc: if self.fail_desc_at == Some(index) { None } else { Some(desc.clone()) },
            live: self.live.clone(),
            released: self.released.clone(),
        }))
    }
}
