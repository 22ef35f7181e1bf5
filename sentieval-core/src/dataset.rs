// sentieval-core/src/dataset.rs
//! Loads labelled text records from delimited files.
//!
//! Every row carries an integer ground-truth label in column 0 and the text
//! to classify in column 1. Further columns are allowed but ignored. Rows
//! are returned in file order.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::DatasetError;

/// One labelled input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub true_label: i64,
    pub text: String,
}

/// What to do with a label column that is not an integer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPolicy {
    /// Unparseable labels become 0.
    #[default]
    Lenient,
    /// Unparseable labels abort the load.
    Strict,
}

/// Options controlling how a dataset file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DatasetOptions {
    /// Skip the first row.
    pub has_headers: bool,
    /// Field delimiter; must be a single ASCII character.
    pub delimiter: char,
    pub label_policy: LabelPolicy,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            has_headers: false,
            delimiter: ',',
            label_policy: LabelPolicy::Lenient,
        }
    }
}

impl DatasetOptions {
    /// The delimiter as the byte the CSV reader expects, if it is ASCII.
    pub fn delimiter_byte(&self) -> Option<u8> {
        if self.delimiter.is_ascii() {
            Some(self.delimiter as u8)
        } else {
            None
        }
    }
}

/// Opens `path` and reads every record from it.
pub fn load_records<P: AsRef<Path>>(path: P, options: &DatasetOptions) -> Result<Vec<Record>, DatasetError> {
    let path = path.as_ref();
    info!("Loading dataset from: {}", path.display());

    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_records(file, options)?;
    info!("Loaded {} records from {}.", records.len(), path.display());
    Ok(records)
}

/// Reads every record from an already opened source.
///
/// Any malformed row (bad quoting, a field count that differs from the first
/// row, fewer than two columns) fails the whole read.
pub fn read_records<R: Read>(mut reader: R, options: &DatasetOptions) -> Result<Vec<Record>, DatasetError> {
    let delimiter = options
        .delimiter_byte()
        .ok_or(DatasetError::InvalidDelimiter { delimiter: options.delimiter })?;

    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(DatasetError::Read)?;
    check_quotes(&data, delimiter)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(options.has_headers)
        .delimiter(delimiter)
        .flexible(false)
        .from_reader(data.as_slice());

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        if row.len() < 2 {
            return Err(DatasetError::MissingColumn { line, found: row.len() });
        }

        let raw_label = &row[0];
        let true_label = match raw_label.parse::<i64>() {
            Ok(label) => label,
            Err(_) => match options.label_policy {
                LabelPolicy::Lenient => {
                    debug!("Line {}: label '{}' is not an integer, using 0.", line, raw_label);
                    0
                }
                LabelPolicy::Strict => {
                    return Err(DatasetError::InvalidLabel {
                        line,
                        value: raw_label.to_string(),
                    });
                }
            },
        };

        records.push(Record {
            true_label,
            text: row[1].to_string(),
        });
    }

    Ok(records)
}

/// Rejects input whose last quoted field runs to end of input.
///
/// A field is quoted when its first byte is `"`. Inside it `""` is an escaped
/// quote and a lone `"` closes the field. The CSV reader itself accepts an
/// unclosed field and swallows every following row into it.
fn check_quotes(data: &[u8], delimiter: u8) -> Result<(), DatasetError> {
    let mut line: u64 = 1;
    let mut field_start = true;
    let mut open_line: Option<u64> = None;
    let mut i = 0;

    while i < data.len() {
        let byte = data[i];
        match open_line {
            Some(_) => {
                if byte == b'"' {
                    if data.get(i + 1) == Some(&b'"') {
                        i += 1;
                    } else {
                        open_line = None;
                    }
                } else if byte == b'\n' {
                    line += 1;
                }
            }
            None => {
                if byte == b'"' && field_start {
                    open_line = Some(line);
                }
                if byte == b'\n' {
                    line += 1;
                }
                field_start = byte == delimiter || byte == b'\n';
            }
        }
        i += 1;
    }

    match open_line {
        Some(line) => Err(DatasetError::UnterminatedQuote { line }),
        None => Ok(()),
    }
}
