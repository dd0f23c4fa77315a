/// Adapter hardware identifiers and descriptions

use std::fmt;

/// Locally unique adapter identifier (`LUID`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AdapterLuid {
    pub low_part: u32,
    pub high_part: i32,
}

impl AdapterLuid {
    /// Sentinel meaning "the default adapter"
    pub const ZERO: AdapterLuid = AdapterLuid { low_part: 0, high_part: 0 };

    pub const fn new(low_part: u32, high_part: i32) -> Self {
        Self { low_part, high_part }
    }

    /// Split a 64-bit id: high 32 bits into `high_part`, low 32 bits into `low_part`
    pub const fn from_u64(id: u64) -> Self {
        Self {
            low_part: id as u32,
            high_part: (id >> 32) as u32 as i32,
        }
    }

    pub const fn to_u64(self) -> u64 {
        ((self.high_part as u32 as u64) << 32) | self.low_part as u64
    }

    pub const fn is_zero(self) -> bool {
        self.low_part == 0 && self.high_part == 0
    }
}

/// Whether `luid` identifies the adapter `id` as reported by an XR runtime
pub const fn luid_matches(luid: AdapterLuid, id: u64) -> bool {
    luid.to_u64() == id
}

impl From<u64> for AdapterLuid {
    fn from(id: u64) -> Self {
        AdapterLuid::from_u64(id)
    }
}

impl fmt::Display for AdapterLuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}-{:08X}", self.high_part as u32, self.low_part)
    }
}

/// Description of an enumerated adapter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdapterDesc {
    pub description: String,
    pub vendor_id: u32,
    pub device_id: u32,
    pub sub_sys_id: u32,
    pub revision: u32,
    pub dedicated_video_memory: u64,
    pub dedicated_system_memory: u64,
    pub shared_system_memory: u64,
    pub luid: AdapterLuid,
    /// Software rasterizer (WARP and friends)
    pub is_software: bool,
}
