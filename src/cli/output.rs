use crate::cli::args::OutputFormat;
use crate::core::table::{Displayable, Item, OutputError, RenderOptions, Table};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::io::{self, Write};

/// Output writer trait for the result of a command
pub trait OutputWriter {
    fn write_records<T: Displayable + Serialize>(&mut self, records: &[T]) -> Result<(), OutputError>;
    fn write_record<T: Displayable + Serialize>(&mut self, record: &T) -> Result<(), OutputError>;
    fn write_raw(&mut self, value: JsonValue) -> Result<(), OutputError>;
    fn write_message(&mut self, message: &str) -> Result<(), OutputError>;
}

/// Writes tables, CSV or JSON to stdout (or any stream in tests)
pub struct ConsoleWriter<W: Write = io::Stdout> {
    writer: W,
    format: OutputFormat,
    options: RenderOptions,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat, options: RenderOptions) -> Self {
        Self::with_writer(io::stdout(), format, options)
    }
}

impl<W: Write> ConsoleWriter<W> {
    pub fn with_writer(writer: W, format: OutputFormat, options: RenderOptions) -> Self {
        Self {
            writer,
            format,
            options,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_table(&mut self, table: &Table) -> Result<(), OutputError> {
        if table.is_empty() {
            return Ok(());
        }
        table.render_with(&mut self.writer, &self.options)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), OutputError> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for ConsoleWriter<W> {
    fn write_records<T: Displayable + Serialize>(&mut self, records: &[T]) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => self.write_json(records),
            OutputFormat::Table | OutputFormat::Csv => {
                let mut table = Table::new();
                table.insert(Item::records(records));
                self.write_table(&table)
            }
        }
    }

    fn write_record<T: Displayable + Serialize>(&mut self, record: &T) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => self.write_json(record),
            OutputFormat::Table | OutputFormat::Csv => {
                let mut table = Table::new();
                table.insert(Item::record(record));
                self.write_table(&table)
            }
        }
    }

    fn write_raw(&mut self, value: JsonValue) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => self.write_json(&value),
            OutputFormat::Table | OutputFormat::Csv => {
                let mut table = Table::new();
                table.insert_json(value)?;
                self.write_table(&table)
            }
        }
    }

    fn write_message(&mut self, message: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "message": message,
                    "level": "info"
                });
                self.write_json(&output)
            }
            _ => {
                writeln!(self.writer, "{}", message)?;
                Ok(())
            }
        }
    }
}
