//! # Layer Model
//!
//! A [`Layer`] is one row of the OSI reference table. Rows are assembled once
//! with the builder methods (`with_protocols`, `with_standards`, ...) and only
//! read afterwards.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{OsiError, Result};
use crate::osi::category::ProtocolCategory;

/// A layer ordinal, guaranteed to be within `1..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerNumber(u8);

impl LayerNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    pub const PHYSICAL: LayerNumber = LayerNumber(1);
    pub const DATA_LINK: LayerNumber = LayerNumber(2);
    pub const NETWORK: LayerNumber = LayerNumber(3);
    pub const TRANSPORT: LayerNumber = LayerNumber(4);
    pub const SESSION: LayerNumber = LayerNumber(5);
    pub const PRESENTATION: LayerNumber = LayerNumber(6);
    pub const APPLICATION: LayerNumber = LayerNumber(7);

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every valid layer number, lowest first.
    pub fn all() -> impl Iterator<Item = LayerNumber> {
        (Self::MIN..=Self::MAX).map(LayerNumber)
    }
}

impl TryFrom<u8> for LayerNumber {
    type Error = OsiError;

    fn try_from(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(LayerNumber(value))
        } else {
            Err(OsiError::InvalidLayer(value))
        }
    }
}

impl FromStr for LayerNumber {
    type Err = OsiError;

    fn from_str(s: &str) -> Result<Self> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| OsiError::NotANumber(s.to_string()))?;
        LayerNumber::try_from(value)
    }
}

impl fmt::Display for LayerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the OSI reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub number: LayerNumber,
    pub name: String,
    pub function: String,
    pub protocols: Vec<String>,
    pub categories: BTreeSet<ProtocolCategory>,
    pub standards: Vec<String>,
    pub pdu_name: String,
    pub key_technologies: Vec<String>,
}

impl Layer {
    pub fn new(
        number: LayerNumber,
        name: impl Into<String>,
        function: impl Into<String>,
        pdu_name: impl Into<String>,
    ) -> Self {
        Self {
            number,
            name: name.into(),
            function: function.into(),
            protocols: Vec::new(),
            categories: BTreeSet::new(),
            standards: Vec::new(),
            pdu_name: pdu_name.into(),
            key_technologies: Vec::new(),
        }
    }

    pub fn with_protocols(mut self, protocols: &[&str]) -> Self {
        self.protocols = protocols.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_categories(mut self, categories: &[ProtocolCategory]) -> Self {
        self.categories = categories.iter().copied().collect();
        self
    }

    pub fn with_standards(mut self, standards: &[&str]) -> Self {
        self.standards = standards.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_key_technologies(mut self, technologies: &[&str]) -> Self {
        self.key_technologies = technologies.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn has_category(&self, category: ProtocolCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Returns the first standard whose text contains `protocol`, case-sensitively.
    pub fn standard_for(&self, protocol: &str) -> Option<&str> {
        self.standards
            .iter()
            .find(|standard| standard.contains(protocol))
            .map(String::as_str)
    }

    /// Protocols whose name contains `query`, ignoring case.
    pub fn matching_protocols(&self, query: &str) -> Vec<&str> {
        let needle = query.to_uppercase();
        self.protocols
            .iter()
            .filter(|protocol| protocol.to_uppercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}
