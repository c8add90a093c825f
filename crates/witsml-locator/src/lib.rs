//! Locator parsing for the WITSML catalog.
//!
//! A locator is a path of `<name>(<id>)` segments naming a well and,
//! optionally, one of its wellbores:
//!
//! ```text
//! /                        server level: list wells
//! /Alpha(w-1)              well level: list wellbores of w-1
//! /Alpha(w-1)/Main(wb-1)   wellbore level: list objects of the requested types
//! ```
//!
//! Parsing produces a [`QueryTarget`], which records the query level, the
//! addressed refs, the requested object types, and the free-text well filter.
//!
//! # Modules
//!
//! - [`error`]: Error types for strict parsing
//! - [`segment`]: Scanning of a single `<name>(<id>)` segment
//! - [`target`]: The [`QueryTarget`] type
//! - [`parser`]: [`parse`] (lenient) and [`try_parse`] (strict)

pub mod error;
pub mod parser;
pub mod segment;
pub mod target;

pub use error::{LocatorError, Result};
pub use parser::{parse, try_parse};
pub use segment::{scan_segment, Segment};
pub use target::QueryTarget;
