//! # OSI Model Types
//!
//! * [`layer::Layer`]: one immutable row of the reference table.
//! * [`layer::LayerNumber`]: a layer ordinal, validated to `1..=7`.
//! * [`category::ProtocolCategory`]: the tag used to filter listings.

pub mod category;
pub mod layer;

pub use category::ProtocolCategory;
pub use layer::{Layer, LayerNumber};
