//! Delimited-text tables as returned by `output=csvtable`
//!
//! PRTG answers table queries with comma-separated text: a header row followed
//! by one row per object. Fields may be quoted with `"`, in which case they can
//! contain commas, line breaks and doubled `""` quotes.

use crate::{DeleterError, Result};

/// Label suffix PRTG uses for machine-oriented duplicate columns
pub const RAW_SUFFIX: &str = "(RAW)";

/// A header row plus data rows, all of the same width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// One data row viewed as an ordered label → value mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Value of the first column with the given label
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, value)| value.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

impl Table {
    /// Build a table, checking that no row is wider than the header
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let mut table = Self {
            headers,
            rows: Vec::with_capacity(rows.len()),
        };
        for (index, mut row) in rows.into_iter().enumerate() {
            if row.len() > table.headers.len() {
                return Err(DeleterError::Parse(format!(
                    "row {} has {} fields but the header has {}",
                    index + 1,
                    row.len(),
                    table.headers.len()
                )));
            }
            // Short rows are padded, the way missing trailing cells read as empty
            row.resize(table.headers.len(), String::new());
            table.rows.push(row);
        }
        Ok(table)
    }

    /// Parse comma-separated text whose first line is the header row
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut lines = split_rows(text)?.into_iter();
        let headers = lines
            .next()
            .ok_or_else(|| DeleterError::Parse("response is empty".to_string()))?;
        Self::new(headers, lines.collect())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as label → value records, in row order
    pub fn records(&self) -> Vec<Record> {
        self.rows
            .iter()
            .map(|row| Record {
                fields: self.headers.iter().cloned().zip(row.iter().cloned()).collect(),
            })
            .collect()
    }
}

/// Drop every column whose label ends in `(RAW)`, keeping the rest in order
pub fn remove_raw_columns(table: Table) -> Table {
    let keep: Vec<bool> = table
        .headers
        .iter()
        .map(|label| !label.ends_with(RAW_SUFFIX))
        .collect();

    let retain = |values: Vec<String>| -> Vec<String> {
        values
            .into_iter()
            .zip(&keep)
            .filter_map(|(value, keep)| keep.then_some(value))
            .collect()
    };

    Table {
        headers: retain(table.headers),
        rows: table.rows.into_iter().map(retain).collect(),
    }
}

/// Split delimited text into rows of unquoted fields. Blank lines are skipped.
fn split_rows(text: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    let mut end_row = |row: &mut Vec<String>, field: &mut String, quoted: &mut bool| {
        row.push(std::mem::take(field));
        let blank = row.len() == 1 && row[0].is_empty() && !*quoted;
        if blank {
            row.clear();
        } else {
            rows.push(std::mem::take(row));
        }
        *quoted = false;
    };

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() && !quoted => {
                in_quotes = true;
                quoted = true;
            }
            ',' => {
                row.push(std::mem::take(&mut field));
                quoted = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => end_row(&mut row, &mut field, &mut quoted),
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(DeleterError::Parse("unterminated quoted field".to_string()));
    }
    if !field.is_empty() || !row.is_empty() || quoted {
        end_row(&mut row, &mut field, &mut quoted);
    }

    Ok(rows)
}
