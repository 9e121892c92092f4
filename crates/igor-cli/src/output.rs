//! Response renderers for CLI commands.
//!
//! Structured responses are printed as indented `key: value` blocks, one tab per
//! nesting level. Record-list responses carry server-formatted lines and are
//! printed verbatim, one per line.

use std::io::{self, Write};

use thiserror::Error;

use crate::client::{CliError, CliResult};
use crate::value::RenderValue;

const INDENT: &str = "\t";
const INLINE_SEPARATOR: &str = ", ";

/// How sequences are laid out. Fixed for a whole render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListStyle {
    /// Elements joined with `", "` on the key's line.
    Inline,
    /// Each element rendered as an indented block followed by a blank line.
    Composite,
}

/// Response shapes the renderer refuses to print.
#[derive(Debug, Error)]
pub(crate) enum RenderError {
    #[error("expected a mapping at the top level of the response, found a {found}")]
    NotAMapping { found: &'static str },
    #[error("field '{key}' holds a {found} inside an inline list")]
    InlineElement { key: String, found: &'static str },
    #[error("field '{key}' holds a nested sequence inside a composite list")]
    CompositeElement { key: String },
    #[error("response did not contain a 'records' list")]
    MissingRecords,
    #[error("record {index} is a {found}, expected pre-formatted text")]
    RecordNotText { index: usize, found: &'static str },
    #[error("failed to write output")]
    Io(#[from] io::Error),
}

/// Render a mapping response at `indent` tab stops.
pub(crate) fn render<W: Write>(
    out: &mut W,
    value: &RenderValue,
    indent: usize,
    style: ListStyle,
) -> Result<(), RenderError> {
    let RenderValue::Mapping(entries) = value else {
        return Err(RenderError::NotAMapping {
            found: value.kind(),
        });
    };
    render_entries(out, entries, indent, style)
}

fn render_entries<W: Write>(
    out: &mut W,
    entries: &[(String, RenderValue)],
    indent: usize,
    style: ListStyle,
) -> Result<(), RenderError> {
    for (key, value) in entries {
        write_indent(out, indent)?;
        write!(out, "{key}:")?;
        match value {
            RenderValue::Mapping(nested) => {
                writeln!(out)?;
                render_entries(out, nested, indent + 1, style)?;
            }
            RenderValue::Sequence(items) => match style {
                ListStyle::Inline => writeln!(out, " {}", join_inline(key, items)?)?,
                ListStyle::Composite => {
                    writeln!(out)?;
                    for item in items {
                        render_element(out, key, item, indent + 1, style)?;
                        writeln!(out)?;
                    }
                }
            },
            RenderValue::Scalar(scalar) => writeln!(out, " {scalar}")?,
        }
    }
    Ok(())
}

fn render_element<W: Write>(
    out: &mut W,
    key: &str,
    item: &RenderValue,
    indent: usize,
    style: ListStyle,
) -> Result<(), RenderError> {
    match item {
        RenderValue::Mapping(entries) => render_entries(out, entries, indent, style),
        RenderValue::Scalar(scalar) => {
            write_indent(out, indent)?;
            writeln!(out, "{scalar}")?;
            Ok(())
        }
        RenderValue::Sequence(_) => Err(RenderError::CompositeElement {
            key: key.to_string(),
        }),
    }
}

fn join_inline(key: &str, items: &[RenderValue]) -> Result<String, RenderError> {
    let parts = items
        .iter()
        .map(|item| match item {
            RenderValue::Scalar(scalar) => Ok(scalar.to_string()),
            other => Err(RenderError::InlineElement {
                key: key.to_string(),
                found: other.kind(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join(INLINE_SEPARATOR))
}

fn write_indent<W: Write>(out: &mut W, indent: usize) -> io::Result<()> {
    for _ in 0..indent {
        out.write_all(INDENT.as_bytes())?;
    }
    Ok(())
}

/// Print each entry of the response's `records` list on its own line.
pub(crate) fn write_records<W: Write>(out: &mut W, value: &RenderValue) -> Result<(), RenderError> {
    let Some(RenderValue::Sequence(records)) = value.field("records") else {
        return Err(RenderError::MissingRecords);
    };
    for (index, record) in records.iter().enumerate() {
        let RenderValue::Scalar(line) = record else {
            return Err(RenderError::RecordNotText {
                index,
                found: record.kind(),
            });
        };
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Render a structured response to stdout.
pub(crate) fn print_value(value: &RenderValue, style: ListStyle) -> CliResult<()> {
    emit(&mut io::stdout().lock(), |buffer| render(buffer, value, 0, style))
}

/// Print a record-list response to stdout.
pub(crate) fn print_records(value: &RenderValue) -> CliResult<()> {
    emit(&mut io::stdout().lock(), |buffer| write_records(buffer, value))
}

/// Buffer the whole document so a failed render leaves `out` untouched.
fn emit<W, F>(out: &mut W, draw: F) -> CliResult<()>
where
    W: Write,
    F: FnOnce(&mut Vec<u8>) -> Result<(), RenderError>,
{
    let mut buffer = Vec::new();
    draw(&mut buffer).map_err(CliError::failure)?;
    out.write_all(&buffer)
        .and_then(|()| out.flush())
        .map_err(CliError::failure)
}
