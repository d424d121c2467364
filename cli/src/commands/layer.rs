use anyhow::Context;
use osiref_common::osi::LayerNumber;
use osiref_core::{query, table};

use crate::terminal::print;

pub fn show(layer: LayerNumber, detailed: bool) -> anyhow::Result<()> {
    let table = table::build_table();
    let report = query::show_layer(&table, layer.get(), detailed);
    print::report(&report).with_context(|| format!("failed to write layer {layer}"))
}
