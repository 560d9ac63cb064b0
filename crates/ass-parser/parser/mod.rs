//! ASS script parser module
//!
//! Turns decoded script text into a validated [`AssDocument`]. Every string in
//! the document borrows from the [`DecodedScript`] it was parsed from; strictness
//! settings decide which violations are fatal and which become warnings.
//!
//! # Example
//!
//! ```rust
//! use ass_parser::{parser::ast::EventKind, DecodedScript, StrictSettings};
//!
//! let script_text = "[Script Info]\n\
//! Title: Example\n\
//! ScriptType: v4.00+\n\
//! \n\
//! [Events]\n\
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n\
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Hello, World!\n";
//!
//! let script = DecodedScript::from_string(script_text.to_string());
//! let document = script.parse(&StrictSettings::strict()).result?;
//!
//! assert_eq!(document.script_info.title, "Example");
//! assert_eq!(document.events_of_kind(EventKind::Dialogue).count(), 1);
//! assert_eq!(document.events[0].text, "Hello, World!");
//! # Ok::<(), ass_parser::ParseError>(())
//! ```

pub mod ast;
pub mod cursor;
pub mod errors;
pub mod fields;
mod main;
mod report;
mod script;
pub mod sections;
pub mod settings;

pub use ast::AssDocument;
pub use errors::{ParseError, ParseOutcome, ParseResult, Warning, Warnings};
pub use report::{check_bytes, CheckReport};
pub use script::DecodedScript;
pub use settings::{ScriptInfoStrictSettings, StrictSettings};

