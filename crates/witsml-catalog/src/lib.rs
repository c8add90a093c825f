//! Catalog resolution for WITSML.
//!
//! The [`CatalogResolver`] takes a parsed [`QueryTarget`](witsml_locator::QueryTarget)
//! and asks an [`ObjectCatalogSession`](witsml_session::ObjectCatalogSession)
//! for the children one level below it: wells at server level, wellbores at
//! well level, and one listing per requested object type at wellbore level.
//! The result is a flat, ordered list of
//! [`ResourceIdentifier`](witsml_types::ResourceIdentifier)s.
//!
//! A wellbore query degrades per type: an unknown or failing type is
//! reported as a [`Diagnostic`] and contributes nothing, while its siblings
//! are still listed.
//!
//! # Quick Start
//!
//! ```rust
//! use witsml_catalog::{CatalogResolver, ResolverConfig};
//! use witsml_session::InMemoryCatalog;
//! use witsml_types::{ObjectRecord, ObjectType, WellRecord};
//!
//! let catalog = InMemoryCatalog::new();
//! catalog.insert_well(WellRecord::new("W1", "w1")).unwrap();
//! catalog.insert_wellbore("w1", "WB1", "wb1").unwrap();
//! catalog
//!     .insert_object("w1", "wb1", ObjectType::Log, ObjectRecord::new("Log1", "l1"))
//!     .unwrap();
//!
//! let resolver = CatalogResolver::new(ResolverConfig::default());
//! let resolution = futures::executor::block_on(
//!     resolver.available_objects("/W1(w1)/WB1(wb1)", &["LOG", "MUDLOG"], "", &catalog),
//! )
//! .unwrap();
//! assert_eq!(resolution.identifiers[0].locator(), "/W1(w1)/WB1(wb1)/Log1(l1)");
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod report;
pub mod resolver;

#[cfg(test)]
mod test_support;

// Re-exports for convenience.
pub use config::ResolverConfig;
pub use error::{CatalogError, CatalogResult};
pub use fetch::ObjectCollection;
pub use report::{Diagnostic, Resolution};
pub use resolver::CatalogResolver;
