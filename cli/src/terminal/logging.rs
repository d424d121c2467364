//! Diagnostics on stderr.
//!
//! Report text always goes to stdout; this module only carries what the
//! `tracing` macros emit, labelled like compiler diagnostics (`warning: ...`).

use colored::*;
use osiref_common::config::Config;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{FormatFields, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// Verbosity at which events start naming the module that emitted them.
const TARGET_VERBOSITY: u8 = 2;

pub struct DiagnosticFormat {
    show_target: bool,
}

impl DiagnosticFormat {
    pub fn new(cfg: &Config) -> Self {
        Self {
            show_target: cfg.verbose >= TARGET_VERBOSITY,
        }
    }

    /// Info events are plain sentences and carry no label.
    fn label(level: &Level) -> Option<ColoredString> {
        match *level {
            Level::ERROR => Some("error:".red().bold()),
            Level::WARN => Some("warning:".yellow().bold()),
            Level::INFO => None,
            Level::DEBUG => Some("debug:".blue()),
            Level::TRACE => Some("trace:".dimmed()),
        }
    }
}

impl<S, N> FormatEvent<S, N> for DiagnosticFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if let Some(label) = Self::label(meta.level()) {
            write!(writer, "{label} ")?;
        }
        if self.show_target {
            write!(writer, "{} ", format!("[{}]", meta.target()).dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the stderr subscriber. The level comes from `-v` only.
pub fn init_logging(cfg: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cfg.log_directive()))
        .with_writer(std::io::stderr)
        .event_format(DiagnosticFormat::new(cfg))
        .try_init();
}
