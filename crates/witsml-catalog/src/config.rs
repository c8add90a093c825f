use serde::{Deserialize, Serialize};

/// Configuration for the [`CatalogResolver`](crate::CatalogResolver).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Issue the per-type listings of a wellbore query concurrently.
    /// Output order is the same either way.
    pub concurrent_fanout: bool,
    /// Fail a wellbore query when listings were attempted and every one of
    /// them failed. When `false`, such a query resolves to an empty list.
    pub require_any_success: bool,
    /// Reject malformed locators in
    /// [`available_objects`](crate::CatalogResolver::available_objects)
    /// instead of degrading them to a shallower query level.
    pub strict_locators: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            concurrent_fanout: true,
            require_any_success: false,
            strict_locators: false,
        }
    }
}

impl ResolverConfig {
    /// One listing at a time, in request order.
    pub fn sequential() -> Self {
        Self {
            concurrent_fanout: false,
            ..Default::default()
        }
    }
}
