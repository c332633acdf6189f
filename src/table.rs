//! Plain console table printer
//!
//! Columns are left-aligned, padded to the widest cell and separated by three
//! spaces. Headers are printed upper-cased. The output is meant to be stable
//! enough to parse with `awk`, so no borders and no colors.

use std::io::{self, Write};

const COLUMN_SEPARATOR: &str = "   ";

/// A table layout: headers plus an optional case-insensitive column filter
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    filter: Vec<String>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            filter: Vec::new(),
        }
    }

    /// Keep only the columns whose header matches one of `filter`
    ///
    /// An empty filter keeps every column. A filter matching nothing renders
    /// one empty line per header and row.
    pub fn with_filter<I, S>(mut self, filter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = filter
            .into_iter()
            .map(|f| f.into().to_uppercase())
            .collect();
        self
    }

    fn selected_columns(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, header)| {
                self.filter.is_empty() || self.filter.contains(&header.to_uppercase())
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Render the header line and one line per row
    pub fn render<R, C>(&self, rows: &[R]) -> String
    where
        R: AsRef<[C]>,
        C: AsRef<str>,
    {
        let columns = self.selected_columns();
        let cell = |row: &R, index: usize| -> String {
            row.as_ref()
                .get(index)
                .map(|c| c.as_ref().to_string())
                .unwrap_or_default()
        };

        let mut widths: Vec<usize> = columns
            .iter()
            .map(|&index| self.headers[index].chars().count())
            .collect();
        for row in rows {
            for (width, &index) in widths.iter_mut().zip(&columns) {
                *width = (*width).max(cell(row, index).chars().count());
            }
        }

        let format_line = |cells: Vec<String>| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(value, &width)| format!("{:<width$}", value, width = width))
                .collect();
            let mut line = padded.join(COLUMN_SEPARATOR);
            line.push('\n');
            line
        };

        let mut out = format_line(
            columns
                .iter()
                .map(|&index| self.headers[index].to_uppercase())
                .collect(),
        );
        for row in rows {
            out.push_str(&format_line(
                columns.iter().map(|&index| cell(row, index)).collect(),
            ));
        }
        out
    }

    /// Write the rendered table to `out`
    pub fn print<W, R, C>(&self, out: &mut W, rows: &[R]) -> io::Result<()>
    where
        W: Write + ?Sized,
        R: AsRef<[C]>,
        C: AsRef<str>,
    {
        out.write_all(self.render(rows).as_bytes())
    }
}
