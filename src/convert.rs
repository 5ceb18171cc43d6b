//! End-to-end conversion: read blocks, resolve headers, write CSV.

use std::fmt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{Config, LineTerminator};
use crate::error::ConvertError;
use crate::header::resolve_headers;
use crate::parser::parse_records;
use crate::writer::{to_csv_string, write_csv};

/// Outcome of a successful run, printed as the console summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CSV file '{}' created with {} row(s) and {} column(s).",
            self.output.display(),
            self.rows,
            self.columns
        )
    }
}

/// Convert block-formatted text to CSV text in memory.
///
/// Returns (csv_text, row_count, column_count) on success.
pub fn convert_text(
    input_text: &str,
    terminator: LineTerminator,
) -> Result<(String, usize, usize), csv::Error> {
    let records = parse_records(input_text);
    let headers = resolve_headers(&records);
    let output = to_csv_string(&headers, &records, terminator)?;
    Ok((output, records.len(), headers.len()))
}

/// Run a conversion from `config.input` to `config.output`.
///
/// The whole input is read before the output is touched, so a read failure
/// leaves no output file behind. A write failure may leave a partial file.
pub fn convert(config: &Config) -> Result<Summary, ConvertError> {
    debug!("reading {}", config.input.display());
    let input_text =
        fs::read_to_string(&config.input).map_err(|source| ConvertError::InputRead {
            path: config.input.clone(),
            source,
        })?;

    let records = parse_records(&input_text);
    let headers = resolve_headers(&records);

    create_parent_dir(&config.output)?;
    debug!("writing {}", config.output.display());
    let file = File::create(&config.output).map_err(|source| ConvertError::OutputWrite {
        path: config.output.clone(),
        source,
    })?;
    let rows = write_csv(file, &headers, &records, config.terminator).map_err(|source| {
        ConvertError::Csv {
            path: config.output.clone(),
            source,
        }
    })?;

    Ok(Summary {
        output: config.output.clone(),
        rows,
        columns: headers.len(),
    })
}

fn create_parent_dir(path: &Path) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        debug!("creating output directory {}", parent.display());
        fs::create_dir_all(parent).map_err(|source| ConvertError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
