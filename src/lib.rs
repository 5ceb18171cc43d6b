//! # block-csv
//!
//! Flattens blocks of `key: value` lines into a CSV table.
//!
//! Input is split into blocks on lines containing `@@`. Each block becomes
//! one row; the columns are the sorted union of every key seen in any block,
//! and a row that lacks a key gets an empty cell.
//!
//! ## Example
//!
//! ```
//! use block_csv::{LineTerminator, convert_text};
//!
//! let input = "@@\nname: Alice\nage: 30\n@@\nname: Bob\ncity: Paris\n";
//! let (csv, rows, columns) = convert_text(input, LineTerminator::Lf).unwrap();
//!
//! assert_eq!(csv, "age,city,name\n30,,Alice\n,Paris,Bob\n");
//! assert_eq!((rows, columns), (2, 3));
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod header;
pub mod parser;
pub mod record;
pub mod writer;

pub use config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT, LineTerminator};
pub use convert::{Summary, convert, convert_text};
pub use error::ConvertError;
pub use header::resolve_headers;
pub use parser::{Line, MARKER, SEPARATOR, classify_line, parse_lines, parse_records, split_lines};
pub use record::Record;
pub use writer::{to_csv_string, write_csv};
