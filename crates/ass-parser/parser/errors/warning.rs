//! Recoverable issues recorded while parsing
//!
//! Warnings are produced only when a leniency option turned a violation from
//! fatal into recoverable. They borrow field and section names from the
//! decoded buffer and render their message lazily through `Display`.

use alloc::{string::String, vec::Vec};
use core::fmt;

/// Single recoverable issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning<'a> {
    /// Free-form message
    Simple(String),

    /// Unknown field or line key that was skipped
    UnexpectedField {
        /// Section the field appeared in
        section: &'a str,
        /// Raw field name
        field: &'a str,
        /// 1-based line number
        line: usize,
    },

    /// Field repeated in a section, later value kept
    DuplicateField {
        /// Section the field appeared in
        section: &'a str,
        /// Raw field name
        field: &'a str,
        /// 1-based line number of the repetition
        line: usize,
    },
}

impl fmt::Display for Warning<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(message) => f.write_str(message),
            Self::UnexpectedField {
                section,
                field,
                line,
            } => write!(f, "unexpected field '{field}' in '{section}' section (line {line})"),
            Self::DuplicateField {
                section,
                field,
                line,
            } => write!(
                f,
                "duplicate field '{field}' in '{section}' section, the later value is used (line {line})"
            ),
        }
    }
}

/// Ordered list of warnings collected during one parse
///
/// Every pushed warning is also emitted through the `log` facade at warn level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warnings<'a> {
    entries: Vec<Warning<'a>>,
}

impl<'a> Warnings<'a> {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a warning
    pub fn push(&mut self, warning: Warning<'a>) {
        log::warn!("{warning}");
        self.entries.push(warning);
    }

    /// Record a free-form warning
    pub fn push_simple(&mut self, message: impl Into<String>) {
        self.push(Warning::Simple(message.into()));
    }

    /// Append every warning of `other`, keeping order
    pub fn extend(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Number of recorded warnings
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no warning was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in recording order
    pub fn iter(&self) -> core::slice::Iter<'_, Warning<'a>> {
        self.entries.iter()
    }

    /// Borrow as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Warning<'a>] {
        &self.entries
    }

    /// Render every warning to an owned message
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(alloc::string::ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for Warnings<'a> {
    type Item = Warning<'a>;
    type IntoIter = alloc::vec::IntoIter<Warning<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'w, 'a> IntoIterator for &'w Warnings<'a> {
    type Item = &'w Warning<'a>;
    type IntoIter = core::slice::Iter<'w, Warning<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn warnings_keep_order() {
        let mut warnings = Warnings::new();
        warnings.push_simple("first");
        warnings.push(Warning::UnexpectedField {
            section: "Script Info",
            field: "Foo",
            line: 3,
        });
        warnings.push(Warning::DuplicateField {
            section: "Script Info",
            field: "Title",
            line: 4,
        });

        assert_eq!(warnings.len(), 3);
        let messages = warnings.messages();
        assert_eq!(messages[0], "first");
        assert_eq!(
            messages[1],
            "unexpected field 'Foo' in 'Script Info' section (line 3)"
        );
        assert!(messages[2].starts_with("duplicate field 'Title'"));
    }

    #[test]
    fn extend_appends() {
        let mut first = Warnings::new();
        first.push_simple("a");
        let mut second = Warnings::new();
        second.push_simple("b");
        first.extend(second);
        let rendered: Vec<_> = first.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["a", "b"]);
    }

    #[test]
    fn empty_by_default() {
        let warnings = Warnings::default();
        assert!(warnings.is_empty());
        assert!(warnings.as_slice().is_empty());
    }
}
