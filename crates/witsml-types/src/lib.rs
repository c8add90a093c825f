//! Foundation types for the WITSML catalog.
//!
//! This crate provides the value types shared by the locator parser, the
//! session collaborator, and the catalog resolver. None of them hold a
//! connection; they are plain data that can be cloned, compared, and
//! serialized freely.
//!
//! # Key Types
//!
//! - [`QueryLevel`]: Granularity of a request: server, well, or wellbore
//! - [`WellRef`] / [`WellboreRef`]: Addressed nodes of the well hierarchy
//! - [`ObjectType`]: The fixed table of wellbore child object types
//! - [`ResourceIdentifier`]: One resolved child resource with its parent path
//! - [`WellRecord`], [`WellboreRecord`], [`ObjectRecord`]: Listing entries
//!   returned by a catalog session

pub mod error;
pub mod identifier;
pub mod level;
pub mod object_type;
pub mod record;
pub mod refs;

pub use error::TypeError;
pub use identifier::ResourceIdentifier;
pub use level::QueryLevel;
pub use object_type::ObjectType;
pub use record::{CatalogRecord, Listing, ObjectRecord, WellRecord, WellboreRecord};
pub use refs::{path_segment, WellRef, WellboreRef};
