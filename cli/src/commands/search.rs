use anyhow::Context;
use osiref_core::{query, table};

use crate::terminal::print;

pub fn search(protocol: &str) -> anyhow::Result<()> {
    let table = table::build_table();
    let report = query::search_protocol(&table, protocol);
    print::report(&report).context("failed to write search results")
}
