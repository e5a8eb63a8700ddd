pub(crate) mod eviction_policy;
