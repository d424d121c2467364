mod commands;
mod terminal;

use anyhow::Context;
use commands::{CommandLine, Request, layer, list, search};
use osiref_common::config::Config;
use terminal::{logging, print};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_color: commands.no_color,
        verbose: commands.verbose,
    };

    logging::init_logging(&cfg);
    print::initialize(&cfg);

    let request: Request = commands.request();
    debug!(?request, "dispatching request");

    match request {
        Request::Show { layer, detailed } => layer::show(layer, detailed),
        Request::List { category } => list::list(category),
        Request::Search { query } => search::search(&query),
        Request::Help => CommandLine::print_help().context("failed to write help text"),
    }
}
