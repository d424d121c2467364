//! Shared domain types for the OSI reference browser.
//!
//! * [`osi`]: layer records, layer numbers and protocol categories.
//! * [`error`]: validation failures raised while building those types.
//! * [`config`]: runtime switches assembled by the CLI.

pub mod config;
pub mod error;
pub mod osi;

pub use error::{OsiError, Result};
