//! Document model for parsed ASS scripts
//!
//! All text in the model is borrowed from the decoded buffer owned by
//! [`crate::parser::DecodedScript`]; the borrow checker keeps that buffer alive
//! for as long as any document built from it.
//!
//! # Thread Safety
//!
//! Documents are immutable after construction and `Send + Sync`.

use alloc::vec::Vec;

mod event;
mod extra;
mod script_info;
mod style;
mod values;

pub use event::{EventEntry, EventFormat, EventKind};
pub use extra::{ExtraSection, ExtraSections};
pub use script_info::{ScriptInfo, DEFAULT_ORIGINAL_SCRIPT, DEFAULT_TITLE};
pub use style::{StyleEntry, StyleFormat};
pub use values::{Alignment, AssColor, AssTime, BorderStyle, MarginValue, WrapStyle};

use crate::utils::{FileEncoding, LineEnding};

/// Properties of the input file detected before parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FileProps {
    /// Encoding announced by the byte order mark
    pub encoding: FileEncoding,
    /// Line terminator used throughout the file
    pub line_ending: LineEnding,
}

/// Validated ASS script
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AssDocument<'a> {
    /// `[Script Info]` record
    pub script_info: ScriptInfo<'a>,
    /// Style rows of every `[V4+ Styles]` section, in order
    pub styles: Vec<StyleEntry<'a>>,
    /// Event rows of every `[Events]` section, in order
    pub events: Vec<EventEntry<'a>>,
    /// Unrecognized sections
    pub extra_sections: ExtraSections<'a>,
    /// Detected file properties
    pub file_props: FileProps,
}

impl<'a> AssDocument<'a> {
    /// Find a style by name, the last definition wins
    #[must_use]
    pub fn style(&self, name: &str) -> Option<&StyleEntry<'a>> {
        self.styles.iter().rev().find(|style| style.name == name)
    }

    /// Iterate over events of one kind
    pub fn events_of_kind(&self, kind: EventKind) -> impl Iterator<Item = &EventEntry<'a>> {
        self.events.iter().filter(move |event| event.kind == kind)
    }

    /// Captured content of an unrecognized section
    #[must_use]
    pub fn extra_section(&self, name: &str) -> Option<&ExtraSection<'a>> {
        self.extra_sections.get(name)
    }
}
