// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Minimal GitHub-flavored markdown table.

use std::fmt;

/// Column alignment marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A table of string cells with a header row.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownTable {
    header: Vec<String>,
    align: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl MarkdownTable {
    /// Create a table. Columns without an alignment default to left.
    pub fn new<S: Into<String>>(header: impl IntoIterator<Item = S>, align: &[Align]) -> Self {
        let header: Vec<String> = header.into_iter().map(Into::into).collect();
        let align = (0..header.len())
            .map(|i| align.get(i).copied().unwrap_or(Align::Left))
            .collect();
        Self {
            header,
            align,
            rows: Vec::new(),
        }
    }

    /// Append a row. Short rows are padded with empty cells, extra cells are dropped.
    pub fn push_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.header.len(), String::new());
        self.rows.push(row);
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Cell lookup by row label (first column).
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.first().is_some_and(|c| c == label))
            .and_then(|r| r.get(1))
            .map(String::as_str)
    }

    fn column_widths(&self) -> Vec<usize> {
        (0..self.header.len())
            .map(|i| {
                std::iter::once(&self.header[i])
                    .chain(self.rows.iter().map(|r| &r[i]))
                    .map(|c| escape_cell(c).chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(3)
            })
            .collect()
    }
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', " ")
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    cells: &[String],
    widths: &[usize],
    align: &[Align],
) -> fmt::Result {
    write!(f, "|")?;
    for ((cell, width), align) in cells.iter().zip(widths).zip(align) {
        let cell = escape_cell(cell);
        match align {
            Align::Left => write!(f, " {:<width$} |", cell, width = width)?,
            Align::Center => write!(f, " {:^width$} |", cell, width = width)?,
            Align::Right => write!(f, " {:>width$} |", cell, width = width)?,
        }
    }
    writeln!(f)
}

impl fmt::Display for MarkdownTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        write_row(f, &self.header, &widths, &self.align)?;

        write!(f, "|")?;
        for (width, align) in widths.iter().zip(&self.align) {
            let dashes = "-".repeat(width.saturating_sub(1));
            match align {
                Align::Left => write!(f, " :{} |", dashes)?,
                Align::Center => write!(f, " :{}: |", "-".repeat(width.saturating_sub(2)))?,
                Align::Right => write!(f, " {}: |", dashes)?,
            }
        }
        writeln!(f)?;

        for row in &self.rows {
            write_row(f, row, &widths, &self.align)?;
        }
        Ok(())
    }
}
