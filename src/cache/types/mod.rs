use std::time::SystemTime;

/// Defines the type for the capacity of the cache in terms of the number of entries the cache may store
pub type TotalCapacity = usize;

/// Defines the type for the number of accesses of an entry since its last write
pub type UsageCount = u64;

/// Defines the type for the expiry of an entry
pub(crate) type ExpireAfter = SystemTime;
