/// Table column with the widest cell seen so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Position of the column in every row
    pub index: usize,
    /// Header text as inserted, upper-cased only when rendered
    pub name: String,
    /// Width in characters, at least the header length
    pub width: usize,
}

impl Column {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        let name = name.into();
        let width = text_width(&name);
        Self { index, name, width }
    }

    /// Widen the column so that `cell` fits
    pub fn fit(&mut self, cell: &str) {
        self.width = self.width.max(text_width(cell));
    }

    /// Left-justify `text` to the column width
    pub fn pad(&self, text: &str) -> String {
        format!("{:<width$}", text, width = self.width)
    }
}

/// Width as counted by the `{:<width$}` padding used for pretty output
pub(crate) fn text_width(text: &str) -> usize {
    text.chars().count()
}
