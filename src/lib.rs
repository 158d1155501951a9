//! genconfig - Environment-driven configuration post-processor.
//!
//! Applies `CMS_`-prefixed environment variable overrides to a base JSON
//! configuration document: typed scalar overrides, service address lists,
//! and database connection-string surgery. Runs once at container start.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod coerce;
pub mod document;
pub mod engine;
pub mod error;
pub mod logging;
pub mod transform;

pub use engine::{Engine, Mode, OverrideReport, ENV_PREFIX};
pub use error::{Error, OverrideError, Result};
