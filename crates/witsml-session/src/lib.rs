//! Session collaborator for the WITSML catalog.
//!
//! The catalog never talks to a server directly. It goes through an
//! [`ObjectCatalogSession`], which the embedding application connects,
//! authenticates, and configures before handing it over. This crate defines
//! that interface and ships [`InMemoryCatalog`], a session backed by data
//! held in memory or loaded from a JSON [`CatalogSnapshot`].

pub mod error;
pub mod memory;
pub mod session;
pub mod snapshot;

pub use error::{SessionError, SessionResult, TransportError, TransportResult};
pub use memory::InMemoryCatalog;
pub use session::ObjectCatalogSession;
pub use snapshot::{CatalogSnapshot, WellSnapshot, WellboreSnapshot};
