//! Report formatting: `Label: value` blocks and spaced JSON.

use std::collections::BTreeMap;
use std::io;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::Formatter;

use crate::console::Console;

/// Line printed between list entries.
pub const SEPARATOR: &str = "--------------------";

/// Labeled fields of one entity in print order.
#[derive(Debug, Default)]
pub struct Block {
    fields: Vec<(&'static str, String)>,
}

impl Block {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(mut self, label: &'static str, value: impl ToString) -> Self {
        self.fields.push((label, value.to_string()));
        self
    }
}

/// Print blocks separated by [`SEPARATOR`], with none before the first.
pub fn print_blocks(console: &mut Console, blocks: &[Block]) -> io::Result<()> {
    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            console.line(SEPARATOR)?;
        }
        for (label, value) in &block.fields {
            console.line(format_args!("{label}: {value}"))?;
        }
    }
    Ok(())
}

/// Compact JSON with `", "` and `": "` separators.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Render a JSON object with keys in alphabetical order.
pub fn options_json(options: &serde_json::Map<String, Value>) -> serde_json::Result<String> {
    let sorted: BTreeMap<&String, &Value> = options.iter().collect();
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, SpacedFormatter);
    sorted.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
