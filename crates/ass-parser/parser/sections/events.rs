//! `[Events]` section parser
//!
//! Rows are keyed by one of the six event kinds. A `Text` column swallows the
//! rest of the row, so it may only be declared last.

use alloc::{string::ToString, vec::Vec};

use super::{
    check_column_count, field_error,
    format::{parse_format_line, split_row},
    FormatSpec, SectionReader, EVENTS,
};
use crate::parser::{
    ast::{EventEntry, EventFormat, EventKind, MarginValue},
    errors::ParseError,
    fields::{parse_str_as_margin_value, parse_str_as_time},
};

/// Parse one `[Events]` section body, appending to `events`
///
/// # Errors
///
/// Returns the first fatal violation in the section.
pub fn parse_events<'a>(
    reader: &mut SectionReader<'_, 'a>,
    events: &mut Vec<EventEntry<'a>>,
) -> Result<(), ParseError> {
    let mut format: FormatSpec<EventFormat> = None;

    while let Some(line) = reader.next_line() {
        let (key, value) = line.split_field(EVENTS)?;

        if key == "Format" {
            if format.is_some() {
                return Err(ParseError::DuplicateFormatLine {
                    section: EVENTS.to_string(),
                    line: line.number,
                });
            }
            format = Some(parse_format_line(EVENTS, value, line.number, EventFormat::from_key)?);
            continue;
        }

        let Some(kind) = EventKind::from_key(key) else {
            reader.unexpected_field(EVENTS, key, line.number)?;
            continue;
        };

        let columns = format.as_deref().ok_or_else(|| ParseError::MissingFormatLine {
            section: EVENTS.to_string(),
            line: line.number,
        })?;
        let event = parse_event_row(reader, kind, columns, value, line.number)?;
        events.push(event);
    }

    Ok(())
}

/// Split one event row and fill an entry column by column
fn parse_event_row<'a>(
    reader: &mut SectionReader<'_, 'a>,
    kind: EventKind,
    columns: &[EventFormat],
    row: &'a str,
    line: usize,
) -> Result<EventEntry<'a>, ParseError> {
    let text_position = columns.iter().position(|&column| column == EventFormat::Text);
    let text_last = match text_position {
        Some(position) if position + 1 != columns.len() => {
            return Err(ParseError::TextFieldNotLast { line });
        }
        Some(_) => true,
        None => false,
    };

    let values = split_row(row, columns.len(), text_last);
    check_column_count(EVENTS, columns.len(), values.len(), line)?;

    let mut event = EventEntry {
        kind,
        ..EventEntry::default()
    };
    for (&column, value) in columns.iter().zip(values) {
        assign_column(reader, &mut event, column, value, line)?;
    }
    Ok(event)
}

/// Convert one column value into its event field
fn assign_column<'a>(
    reader: &mut SectionReader<'_, 'a>,
    event: &mut EventEntry<'a>,
    column: EventFormat,
    value: &'a str,
    line: usize,
) -> Result<(), ParseError> {
    let name = column.name();
    let wrap = || field_error(name, value, line);

    match column {
        EventFormat::Layer => event.layer = reader.unsigned(name, value, line)?,
        EventFormat::Start => event.start = parse_str_as_time(value).map_err(wrap())?,
        EventFormat::End => event.end = parse_str_as_time(value).map_err(wrap())?,
        EventFormat::Style => event.style = value,
        EventFormat::Name => event.name = value,
        EventFormat::MarginL => event.margin_l = margin(reader, name, value, line)?,
        EventFormat::MarginR => event.margin_r = margin(reader, name, value, line)?,
        EventFormat::MarginV => event.margin_v = margin(reader, name, value, line)?,
        EventFormat::Effect => event.effect = value,
        EventFormat::Text => event.text = value,
    }
    Ok(())
}

/// Event margin with the `0000` sentinel, truncating like other integers
fn margin(
    reader: &mut SectionReader<'_, '_>,
    name: &str,
    value: &str,
    line: usize,
) -> Result<MarginValue, ParseError> {
    match parse_str_as_margin_value(value) {
        Ok(margin) => Ok(margin),
        Err(_) => reader.unsigned(name, value, line).map(MarginValue::Explicit),
    }
}
