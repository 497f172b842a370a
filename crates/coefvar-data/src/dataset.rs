//! Two-column population data files
//!
//! A data file holds one record per line, each with two whitespace-separated
//! real numbers: a height and a weight.
//!
//! ```text
//! 172.35 68.10
//! 165.02 59.87
//! 181.44 83.25
//! ```
//!
//! Loading stops after the requested number of records; anything after that is
//! never read. The first malformed line aborts the load with its 1-based line
//! number, so a partially read population is never returned.
//!
//! # Examples
//!
//! ```
//! use coefvar_data::dataset::Dataset;
//!
//! let text = "172.35 68.10\n165.02 59.87\n181.44 83.25\n";
//! let dataset = Dataset::from_reader(text.as_bytes(), 3).unwrap();
//!
//! assert_eq!(dataset.len(), 3);
//! assert_eq!(dataset.heights, vec![172.35, 165.02, 181.44]);
//! assert_eq!(dataset.weights, vec![68.10, 59.87, 83.25]);
//! ```

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

/// Heights and weights of a population, index-aligned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub heights: Vec<f64>,
    pub weights: Vec<f64>,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    /// The data file does not exist or cannot be opened.
    #[display("failed to open data file {}", path.display())]
    NotFound { path: PathBuf, source: io::Error },
    #[display("failed to read data")]
    Io { source: io::Error },
    /// A line is not a valid record.
    #[display("line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
}

/// Why a line could not be read as a record.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseErrorKind {
    #[display("missing {column} field")]
    MissingField { column: &'static str },
    #[display("invalid number {token:?}")]
    InvalidNumber { token: String },
    #[display("{token:?} is not a finite number")]
    NonFinite { token: String },
    #[display("unexpected extra field {token:?}")]
    ExtraField { token: String },
    /// The line is not valid UTF-8 text.
    #[display("line is not valid UTF-8")]
    InvalidEncoding,
    /// The file ended before the requested number of records.
    #[display("missing record (file ended early)")]
    MissingRecord,
}

impl Dataset {
    /// Reads the first `records` records from the file at `path`.
    pub fn load<P>(path: P, records: usize) -> Result<Self, LoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::NotFound {
            path: path.to_owned(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), records)
    }

    /// Reads the first `records` records from `reader`.
    pub fn from_reader<R>(reader: R, records: usize) -> Result<Self, LoadError>
    where
        R: BufRead,
    {
        let mut dataset = Self::default();
        let mut lines = reader.split(b'\n');

        for line_no in 1..=records {
            let line = lines
                .next()
                .transpose()
                .map_err(|source| LoadError::Io { source })?
                .ok_or(LoadError::Parse {
                    line: line_no,
                    kind: ParseErrorKind::MissingRecord,
                })?;
            let (height, weight) = std::str::from_utf8(&line)
                .map_err(|_| ParseErrorKind::InvalidEncoding)
                .and_then(parse_record)
                .map_err(|kind| LoadError::Parse {
                    line: line_no,
                    kind,
                })?;
            dataset.heights.push(height);
            dataset.weights.push(weight);
        }

        Ok(dataset)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Writes the dataset in the format [`Dataset::from_reader`] reads, with two
    /// decimal places per value.
    pub fn write_to<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        for (height, weight) in self.heights.iter().zip(&self.weights) {
            writeln!(writer, "{height:.2} {weight:.2}")?;
        }
        Ok(())
    }
}

fn parse_record(line: &str) -> Result<(f64, f64), ParseErrorKind> {
    let mut fields = line.split_whitespace();
    let height = parse_field(fields.next(), "height")?;
    let weight = parse_field(fields.next(), "weight")?;
    if let Some(token) = fields.next() {
        return Err(ParseErrorKind::ExtraField {
            token: token.to_owned(),
        });
    }
    Ok((height, weight))
}

fn parse_field(token: Option<&str>, column: &'static str) -> Result<f64, ParseErrorKind> {
    let token = token.ok_or(ParseErrorKind::MissingField { column })?;
    let value = token
        .parse::<f64>()
        .map_err(|_| ParseErrorKind::InvalidNumber {
            token: token.to_owned(),
        })?;
    if !value.is_finite() {
        return Err(ParseErrorKind::NonFinite {
            token: token.to_owned(),
        });
    }
    Ok(value)
}
