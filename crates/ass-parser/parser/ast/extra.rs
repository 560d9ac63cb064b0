//! Captured content of unrecognized sections
//!
//! Sections the parser does not interpret are kept as ordered `name: value`
//! maps so their content survives a parse without loss.

use alloc::string::String;
use core::fmt::Write as _;

use crate::utils::hashers::{create_ordered_map, OrderedMap};

/// Fields of one unrecognized section, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExtraSection<'a> {
    /// Field name to raw value
    pub fields: OrderedMap<&'a str, &'a str>,
}

impl Default for ExtraSection<'_> {
    fn default() -> Self {
        Self {
            fields: create_ordered_map(),
        }
    }
}

impl<'a> ExtraSection<'a> {
    /// Create an empty section
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing the value of an earlier field with that name
    ///
    /// Returns the replaced value.
    pub fn insert(&mut self, field: &'a str, value: &'a str) -> Option<&'a str> {
        self.fields.insert(field, value)
    }

    /// Value of `field`
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'a str> {
        self.fields.get(field).copied()
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the section has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render the fields back into `name: value` lines joined by `line_ending`
    #[must_use]
    pub fn to_lines(&self, line_ending: &str) -> String {
        let mut out = String::new();
        for (field, value) in &self.fields {
            let _ = write!(out, "{field}: {value}{line_ending}");
        }
        out
    }
}

/// Unrecognized sections by name, in first-seen order
pub type ExtraSections<'a> = OrderedMap<&'a str, ExtraSection<'a>>;
