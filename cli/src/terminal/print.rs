use std::io::{self, Write};

use crate::terminal::colors;
use colored::*;
use osiref_common::config::Config;
use osiref_core::{Line, Report};

/// Disables styling when asked to, or when stdout is not a terminal.
pub fn initialize(cfg: &Config) {
    if cfg.no_color || !console::Term::stdout().is_term() {
        colored::control::set_override(false);
    }
}

pub fn report(report: &Report) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in report.lines() {
        writeln!(out, "{}", styled(line))?;
    }
    out.flush()
}

/// Renders one line with terminal styling.
///
/// With colors disabled the result equals the line's plain `Display` text.
pub fn styled(line: &Line) -> String {
    match line {
        Line::Blank => String::new(),
        Line::Title(text) => format!("{}", text.color(colors::PRIMARY).bold()),
        Line::Rule(width) => format!("{}", "-".repeat(*width).color(colors::SEPARATOR)),
        Line::Heading(text) => format!("{}", text.color(colors::ACCENT).bold()),
        Line::Notice(text) => format!("{}", text.color(colors::NOTICE)),
        Line::Field { indent, key, value } => format!(
            "{:width$}{}{} {}",
            "",
            key.color(colors::KEY),
            ":".color(colors::SEPARATOR),
            value.color(colors::TEXT_DEFAULT),
            width = *indent
        ),
        Line::Section { indent, title } => format!(
            "{:width$}{}{}",
            "",
            title.color(colors::KEY).bold(),
            ":".color(colors::SEPARATOR),
            width = *indent
        ),
        Line::Bullet {
            indent,
            label,
            detail,
        } => {
            let mut output = format!(
                "{:width$}{} {}",
                "",
                "•".color(colors::SEPARATOR),
                label.color(colors::TEXT_DEFAULT),
                width = *indent
            );
            if let Some(detail) = detail {
                output.push_str(&format!(
                    " {} {}",
                    "—".color(colors::SEPARATOR),
                    detail.color(colors::DETAIL)
                ));
            }
            output
        }
    }
}
