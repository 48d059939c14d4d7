use serde::{Deserialize, Serialize};

/// Number of lines shown in the dashboard preview, header included.
pub const PREVIEW_ROWS: usize = 10;

/// Approximate grid of the first lines of an uploaded file.
///
/// Built by splitting on line breaks and then on every comma. Quotes, escapes
/// and embedded newlines are not understood, so a quoted field containing a
/// comma shows up as two cells. This is a display aid, not a CSV reader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvPreview {
    pub rows: Vec<Vec<String>>,
}

impl CsvPreview {
    /// Splits `text` into at most `max_rows` rows of comma-separated cells.
    ///
    /// `\n` and `\r\n` both end a line; a trailing line break does not add an
    /// empty row, and empty input yields no rows at all.
    pub fn from_text(text: &str, max_rows: usize) -> Self {
        let rows = text
            .lines()
            .take(max_rows)
            .map(|line| line.split(',').map(str::to_string).collect())
            .collect();
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// First row, rendered as table headers.
    pub fn headers(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every row after the header.
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}
