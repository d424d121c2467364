use anyhow::Context;
use osiref_common::osi::ProtocolCategory;
use osiref_core::{query, table};

use crate::terminal::print;

pub fn list(category: Option<ProtocolCategory>) -> anyhow::Result<()> {
    let table = table::build_table();
    let report = query::list_layers(&table, category);
    print::report(&report).context("failed to write layer listing")
}
