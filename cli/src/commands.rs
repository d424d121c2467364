pub mod layer;
pub mod list;
pub mod search;

use std::io;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, CommandFactory, Parser};
use osiref_common::osi::{LayerNumber, ProtocolCategory};
use tracing::{debug, warn};

const EXAMPLES: &str = "\
Examples:
  Show layer details:   osiref -l 4
  List all layers:      osiref --list
  List by category:     osiref --list -c transport
  Search for protocol:  osiref -s TCP
  Detailed view:        osiref -l 7 -d";

#[derive(Parser, Debug)]
#[command(name = "osiref", version)]
#[command(about = "OSI Model Reference Tool")]
#[command(after_help = EXAMPLES)]
pub struct CommandLine {
    /// Display specific layer (1–7)
    #[arg(short, long, value_name = "NUMBER", value_parser = parse_layer)]
    pub layer: Option<LayerNumber>,

    /// Show detailed technical information
    #[arg(short, long)]
    pub detailed: bool,

    /// List all layers
    #[arg(long)]
    pub list: bool,

    /// Only list layers carrying this protocol category
    /// [routing, transport, encryption, data-format, application]
    #[arg(short, long, value_name = "CATEGORY", requires = "list")]
    pub category: Option<ProtocolCategory>,

    /// Search for protocol across all layers
    #[arg(short, long, value_name = "PROTOCOL", value_parser = NonEmptyStringValueParser::new())]
    pub search: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log more diagnostics to stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// The single operation an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Show { layer: LayerNumber, detailed: bool },
    List { category: Option<ProtocolCategory> },
    Search { query: String },
    Help,
}

fn parse_layer(s: &str) -> osiref_common::Result<LayerNumber> {
    s.parse()
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn print_help() -> io::Result<()> {
        Self::command().print_help()
    }

    /// Picks one operation. `--layer` wins over `--search`, which wins over `--list`.
    pub fn request(&self) -> Request {
        let selected = [self.layer.is_some(), self.search.is_some(), self.list]
            .iter()
            .filter(|flag| **flag)
            .count();
        if selected > 1 {
            debug!(selected, "several operations requested, using the first by precedence");
        }

        if self.detailed && self.layer.is_none() {
            warn!("--detailed only applies together with --layer");
        }

        if let Some(layer) = self.layer {
            return Request::Show {
                layer,
                detailed: self.detailed,
            };
        }

        if let Some(query) = &self.search {
            return Request::Search {
                query: query.clone(),
            };
        }

        if self.list {
            return Request::List {
                category: self.category,
            };
        }

        Request::Help
    }
}
