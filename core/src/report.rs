use std::fmt;

/// One line of rendered output.
///
/// Lines carry their role so a terminal front end can style them, while the
/// `Display` impl of [`Report`] yields the canonical plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Blank,
    /// Top-level banner, e.g. `=== Layer 4: Transport ===`.
    Title(String),
    /// A run of dashes under a title.
    Rule(usize),
    /// A per-layer heading inside a listing or search result.
    Heading(String),
    /// `key: value`, indented by `indent` spaces.
    Field {
        indent: usize,
        key: String,
        value: String,
    },
    /// A section label, rendered with a trailing colon.
    Section { indent: usize, title: String },
    /// A bulleted entry with an optional trailing detail.
    Bullet {
        indent: usize,
        label: String,
        detail: Option<String>,
    },
    /// A standalone message such as "nothing found".
    Notice(String),
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Blank => Ok(()),
            Line::Title(text) | Line::Heading(text) | Line::Notice(text) => f.write_str(text),
            Line::Rule(width) => f.write_str(&"-".repeat(*width)),
            Line::Field { indent, key, value } => {
                write!(f, "{:width$}{key}: {value}", "", width = *indent)
            }
            Line::Section { indent, title } => write!(f, "{:width$}{title}:", "", width = *indent),
            Line::Bullet {
                indent,
                label,
                detail,
            } => {
                write!(f, "{:width$}• {label}", "", width = *indent)?;
                if let Some(detail) = detail {
                    write!(f, " — {detail}")?;
                }
                Ok(())
            }
        }
    }
}

/// Ordered output of a single query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<Line>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Texts of every [`Line::Heading`], in order.
    pub fn headings(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                Line::Heading(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Texts of every [`Line::Notice`], in order.
    pub fn notices(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                Line::Notice(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
