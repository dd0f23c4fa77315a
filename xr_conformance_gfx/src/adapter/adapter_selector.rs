/// AdapterSelector - picks the GPU adapter under test
///
/// Enumeration goes through the `AdapterFactory` trait (DXGI in the d3d
/// backend crate). Adapters are owned values: the one returned belongs to the
/// caller, and every other adapter touched during a scan is dropped, which
/// releases its platform handle.

use crate::error::{Error, Result};
use super::luid::{luid_matches, AdapterDesc, AdapterLuid};

/// One enumerated adapter
pub trait Adapter {
    /// Query the adapter description
    ///
    /// # Errors
    ///
    /// `PlatformError` when the platform cannot describe the adapter.
    fn desc(&self) -> Result<AdapterDesc>;
}

/// Platform adapter factory
pub trait AdapterFactory {
    type Adapter: Adapter;

    /// Adapter at `index` in platform enumeration order, `Ok(None)` past the end
    ///
    /// # Errors
    ///
    /// `PlatformError` for any enumeration failure other than end-of-list.
    fn adapter_at(&self, index: u32) -> Result<Option<Self::Adapter>>;
}

/// Lazy adapter enumeration, in platform order
///
/// Yields each adapter once. Stops after the platform's end-of-list signal or
/// after yielding an error.
pub struct Adapters<'a, F: AdapterFactory> {
    factory: &'a F,
    index: u32,
    finished: bool,
}

impl<'a, F: AdapterFactory> Iterator for Adapters<'a, F> {
    type Item = Result<F::Adapter>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.factory.adapter_at(self.index) {
            Ok(Some(adapter)) => {
                self.index += 1;
                Some(Ok(adapter))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

impl<'a, F: AdapterFactory> std::iter::FusedIterator for Adapters<'a, F> {}

/// Adapter selection over a platform factory
pub struct AdapterSelector<F: AdapterFactory> {
    factory: F,
}

impl<F: AdapterFactory> AdapterSelector<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Enumerate adapters lazily; each call starts from the first adapter
    pub fn enumerate_adapters(&self) -> Adapters<'_, F> {
        Adapters {
            factory: &self.factory,
            index: 0,
            finished: false,
        }
    }

    /// Select the adapter whose LUID equals `requested`, or the first adapter
    /// when `requested` is zero
    ///
    /// # Errors
    ///
    /// - `NotFound` if enumeration completes without a match
    /// - `PlatformError` if enumeration or description retrieval fails
    pub fn select_adapter(&self, requested: AdapterLuid) -> Result<F::Adapter> {
        for adapter in self.enumerate_adapters() {
            let adapter = adapter.map_err(log_platform_error)?;
            let desc = adapter.desc().map_err(log_platform_error)?;

            if requested.is_zero() || luid_matches(desc.luid, requested.to_u64()) {
                crate::xrc_info!(
                    "xrc::AdapterSelector",
                    "Selected adapter '{}' (LUID {}, vendor {:#06x}, device {:#06x})",
                    desc.description,
                    desc.luid,
                    desc.vendor_id,
                    desc.device_id
                );
                return Ok(adapter);
            }

            crate::xrc_trace!(
                "xrc::AdapterSelector",
                "Skipping adapter '{}' (LUID {})",
                desc.description,
                desc.luid
            );
        }

        crate::xrc_warn!("xrc::AdapterSelector", "No adapter with LUID {}", requested);
        Err(Error::NotFound(format!("no adapter with LUID {}", requested)))
    }

    /// Describe every adapter, in enumeration order
    pub fn describe_adapters(&self) -> Result<Vec<AdapterDesc>> {
        self.enumerate_adapters()
            .map(|adapter| adapter.and_then(|adapter| adapter.desc()))
            .collect::<Result<Vec<_>>>()
            .map_err(log_platform_error)
    }
}

fn log_platform_error(error: Error) -> Error {
    crate::xrc_error!("xrc::AdapterSelector", "{}", error);
    error
}

#[cfg(test)]
#[path = "adapter_selector_tests.rs"]
mod tests;
