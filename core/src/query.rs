//! Show, list and search operations over a [`ReferenceTable`].
//!
//! Every operation is a pure read: it borrows the table, builds a [`Report`]
//! and leaves the table untouched. Calling one twice with the same
//! arguments yields identical reports.

use osiref_common::osi::{Layer, LayerNumber, ProtocolCategory};
use tracing::debug;

use crate::report::{Line, Report};
use crate::table::ReferenceTable;

/// Function descriptions longer than this are cut in listings.
pub const FUNCTION_SUMMARY_WIDTH: usize = 60;
/// Listings show at most this many protocols per layer.
pub const PROTOCOL_PREVIEW: usize = 3;

const NO_STANDARD: &str = "No specific standard listed";
const ELLIPSIS: &str = "...";
const LIST_RULE_WIDTH: usize = 16;
const SEARCH_RULE_WIDTH: usize = 32;

/// Renders a single layer.
///
/// Numbers outside `1..=7` yield a report holding only the invalid-layer notice.
pub fn show_layer(table: &ReferenceTable, number: u8, detailed: bool) -> Report {
    debug!(layer = number, detailed, "showing layer");
    let mut report = Report::new();

    let layer = match lookup(table, number) {
        Ok(layer) => layer,
        Err(notice) => {
            report.push(Line::Notice(notice));
            return report;
        }
    };

    report.push(Line::Blank);
    report.push(Line::Title(format!(
        "=== Layer {}: {} ===",
        layer.number, layer.name
    )));
    report.push(Line::Blank);
    report.push(Line::Field {
        indent: 0,
        key: "Primary Function".into(),
        value: layer.function.clone(),
    });
    report.push(Line::Blank);
    report.push(Line::Field {
        indent: 0,
        key: "Protocol Data Unit (PDU)".into(),
        value: layer.pdu_name.clone(),
    });

    report.push(Line::Blank);
    report.push(Line::Section {
        indent: 0,
        title: "Key Protocols".into(),
    });
    for protocol in &layer.protocols {
        let standard = layer.standard_for(protocol).unwrap_or(NO_STANDARD);
        report.push(Line::Bullet {
            indent: 2,
            label: protocol.clone(),
            detail: Some(standard.to_string()),
        });
    }

    if detailed {
        push_bullet_section(&mut report, "Key Technologies", &layer.key_technologies);
        push_bullet_section(&mut report, "Technical Standards", &layer.standards);
    }

    report
}

fn lookup(table: &ReferenceTable, number: u8) -> Result<&Layer, String> {
    let number = LayerNumber::try_from(number).map_err(|err| err.to_string())?;
    table
        .get(number)
        .ok_or_else(|| format!("Layer {number} is missing from the reference table."))
}

fn push_bullet_section(report: &mut Report, title: &str, entries: &[String]) {
    report.push(Line::Blank);
    report.push(Line::Section {
        indent: 0,
        title: title.to_string(),
    });
    for entry in entries {
        report.push(Line::Bullet {
            indent: 2,
            label: entry.clone(),
            detail: None,
        });
    }
}

/// Layers retained by `filter`, lowest number first.
pub fn select_layers(
    table: &ReferenceTable,
    filter: Option<ProtocolCategory>,
) -> impl Iterator<Item = &Layer> {
    table
        .layers()
        .filter(move |layer| filter.is_none_or(|category| layer.has_category(category)))
}

/// Renders the layer overview, optionally restricted to one category.
pub fn list_layers(table: &ReferenceTable, filter: Option<ProtocolCategory>) -> Report {
    debug!(?filter, "listing layers");
    let mut report = Report::new();

    let title = match filter {
        Some(category) => format!("OSI Model Layers ({category}):"),
        None => "OSI Model Layers:".to_string(),
    };
    report.push(Line::Blank);
    report.push(Line::Title(title));
    report.push(Line::Rule(LIST_RULE_WIDTH));

    let mut retained = 0usize;
    for layer in select_layers(table, filter) {
        retained += 1;
        report.push(Line::Blank);
        report.push(Line::Heading(format!("Layer {}: {}", layer.number, layer.name)));
        report.push(Line::Field {
            indent: 2,
            key: "Function".into(),
            value: summarize(&layer.function, FUNCTION_SUMMARY_WIDTH),
        });
        report.push(Line::Field {
            indent: 2,
            key: "Key Protocols".into(),
            value: preview_protocols(&layer.protocols, PROTOCOL_PREVIEW),
        });
    }

    if let (0, Some(category)) = (retained, filter) {
        report.push(Line::Blank);
        report.push(Line::Notice(format!(
            "No layers carry the {category} category."
        )));
    }

    report
}

/// Cuts `text` to `limit` characters and appends an ellipsis when anything was cut.
pub fn summarize(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut summary: String = text.chars().take(limit).collect();
    summary.push_str(ELLIPSIS);
    summary
}

/// Joins the first `limit` protocols, marking the rest with an ellipsis.
pub fn preview_protocols(protocols: &[String], limit: usize) -> String {
    let shown = protocols
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<&str>>()
        .join(", ");

    if protocols.len() > limit {
        format!("{shown}{ELLIPSIS}")
    } else {
        shown
    }
}

/// Finds protocols containing `query`, ignoring case, across every layer.
pub fn search_protocol(table: &ReferenceTable, query: &str) -> Report {
    debug!(query, "searching protocols");
    let mut report = Report::new();

    report.push(Line::Blank);
    report.push(Line::Title(format!(
        "Search Results for '{}':",
        query.to_uppercase()
    )));
    report.push(Line::Rule(SEARCH_RULE_WIDTH));

    let mut found = false;
    for layer in table.layers() {
        let matches = layer.matching_protocols(query);
        if matches.is_empty() {
            continue;
        }
        found = true;

        report.push(Line::Blank);
        report.push(Line::Heading(format!("Layer {}: {}", layer.number, layer.name)));
        report.push(Line::Field {
            indent: 2,
            key: "Protocols".into(),
            value: matches.join(", "),
        });
        if !layer.standards.is_empty() {
            report.push(Line::Section {
                indent: 2,
                title: "Standards".into(),
            });
            for standard in &layer.standards {
                report.push(Line::Bullet {
                    indent: 4,
                    label: standard.clone(),
                    detail: None,
                });
            }
        }
    }

    if !found {
        debug!(query, "no protocol matched");
        report.push(Line::Notice(format!(
            "No protocols found matching '{query}'."
        )));
    }

    report
}
