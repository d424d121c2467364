use std::fmt;
use std::str::FromStr;

use crate::error::{OsiError, Result};

/// Classification tag attached to a layer's protocols.
///
/// Used only to filter the layer listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProtocolCategory {
    Routing,
    Transport,
    Encryption,
    DataFormat,
    Application,
}

impl ProtocolCategory {
    pub const ALL: [ProtocolCategory; 5] = [
        ProtocolCategory::Routing,
        ProtocolCategory::Transport,
        ProtocolCategory::Encryption,
        ProtocolCategory::DataFormat,
        ProtocolCategory::Application,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProtocolCategory::Routing => "Routing",
            ProtocolCategory::Transport => "Transport",
            ProtocolCategory::Encryption => "Encryption",
            ProtocolCategory::DataFormat => "Data Format",
            ProtocolCategory::Application => "Application",
        }
    }
}

impl fmt::Display for ProtocolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProtocolCategory {
    type Err = OsiError;

    /// Parses a category name, ignoring case.
    ///
    /// `DataFormat` accepts "data-format", "data_format", "dataformat" and "data format".
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "routing" => Ok(ProtocolCategory::Routing),
            "transport" => Ok(ProtocolCategory::Transport),
            "encryption" => Ok(ProtocolCategory::Encryption),
            "dataformat" => Ok(ProtocolCategory::DataFormat),
            "application" => Ok(ProtocolCategory::Application),
            _ => Err(OsiError::UnknownCategory(s.to_string())),
        }
    }
}
