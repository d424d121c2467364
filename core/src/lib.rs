//! The reference table and the query engine that reads it.
//!
//! * [`table`]: builds the fixed seven-layer [`table::ReferenceTable`].
//! * [`query`]: show, list and search operations over that table.
//! * [`report`]: the line-oriented output those operations produce.

pub mod query;
pub mod report;
pub mod table;

pub use query::{list_layers, search_protocol, select_layers, show_layer};
pub use report::{Line, Report};
pub use table::{ReferenceTable, build_table};
