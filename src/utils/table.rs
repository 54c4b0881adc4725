//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured on the visible text, so cells may carry ANSI colour.
//! Plain cells wider than their column's limit are wrapped onto extra lines.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

pub fn strip_ansi(s: &str) -> String {
    match ANSI.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub struct Column {
    pub header: String,
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .max()
                    .unwrap_or(0);
                widest.min(col.max_width).max(visible_width(&col.header))
            })
            .collect()
    }

    fn cell_lines(cell: &str, width: usize) -> Vec<String> {
        if cell.contains('\x1b') || visible_width(cell) <= width {
            return vec![cell.to_string()];
        }
        textwrap::wrap(cell, width)
            .into_iter()
            .map(|l| l.into_owned())
            .collect()
    }

    fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
        for (cell, w) in cells.iter().zip(widths) {
            let pad = w.saturating_sub(visible_width(cell));
            out.push_str(cell);
            out.push_str(&" ".repeat(pad + 2));
        }
        let trimmed = out.trim_end_matches(' ').len();
        out.truncate(trimmed);
        out.push('\n');
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        Self::push_line(&mut out, &headers, &widths);

        let rules: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        Self::push_line(&mut out, &rules, &widths);

        for row in &self.rows {
            let wrapped: Vec<Vec<String>> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| Self::cell_lines(row.get(i).map(String::as_str).unwrap_or(""), *w))
                .collect();
            let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

            for line in 0..height {
                let cells: Vec<String> = wrapped
                    .iter()
                    .map(|lines| lines.get(line).cloned().unwrap_or_default())
                    .collect();
                Self::push_line(&mut out, &cells, &widths);
            }
        }

        out
    }
}
