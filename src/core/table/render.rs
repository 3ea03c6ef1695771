use super::{OutputError, Table};
use std::io::Write;

/// Separator and alignment used when rendering a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub separator: String,
    /// Pad every cell to the width of its column
    pub pretty: bool,
}

impl RenderOptions {
    pub fn new(separator: impl Into<String>, pretty: bool) -> Self {
        Self {
            separator: separator.into(),
            pretty,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new("  ", true)
    }
}

impl Table {
    /// Write the header line followed by one line per row.
    ///
    /// Cells containing `separator` are wrapped in double quotes, with an
    /// empty separator that is every cell. Embedded quotes are written as
    /// is, so the output is not strict CSV. In pretty
    /// mode a quoted cell may exceed its column width by the two quotes.
    ///
    /// The first failed write is returned, lines written before it stay on
    /// the stream.
    pub fn render<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        separator: &str,
        pretty: bool,
    ) -> Result<(), OutputError> {
        let header: Vec<String> = self
            .columns()
            .iter()
            .map(|column| {
                let name = column.name.to_uppercase();
                if pretty {
                    column.pad(&name)
                } else {
                    name
                }
            })
            .collect();
        writeln!(writer, "{}", header.join(separator))?;

        for row in self.rows() {
            let cells: Vec<String> = row
                .iter()
                .zip(self.columns())
                .map(|(cell, column)| {
                    let cell = if cell.contains(separator) {
                        format!("\"{}\"", cell)
                    } else {
                        cell.clone()
                    };
                    if pretty {
                        column.pad(&cell)
                    } else {
                        cell
                    }
                })
                .collect();
            writeln!(writer, "{}", cells.join(separator))?;
        }

        Ok(())
    }

    pub fn render_with<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        options: &RenderOptions,
    ) -> Result<(), OutputError> {
        self.render(writer, &options.separator, options.pretty)
    }
}
