//! Override transforms and the curated registry.
//!
//! This module provides:
//! - the static registry mapping environment-variable suffixes to
//!   (target path, transform kind) pairs
//! - the address-list parser for service endpoint pools
//! - connection-string parsing and surgery for the `database` section

mod address;
mod database;
mod registry;

pub use address::parse_address_list;
pub use database::{ConnectionString, DbField};
pub use registry::{lookup, OverrideEntry, TransformKind};
