use crate::data_config::TableFormat;
use crate::error::LoadError;
use csv::{ReaderBuilder, StringRecord};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A delimited file decoded to text, with its header row resolved.
///
/// Records are streamed from the decoded text on demand so large files are
/// never held twice.
pub struct Table {
    path: PathBuf,
    format: TableFormat,
    text: String,
    headers: Vec<String>,
}

impl Table {
    pub fn load(path: &Path, format: TableFormat) -> Result<Self, LoadError> {
        if !path.is_file() {
            return Err(LoadError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(path, &bytes, format)
    }

    /// `path` only labels diagnostics; nothing is read from it.
    pub fn from_bytes(
        path: impl Into<PathBuf>,
        bytes: &[u8],
        format: TableFormat,
    ) -> Result<Self, LoadError> {
        let path = path.into();
        let (text, _, had_errors) = format.encoding.decode(bytes);
        if had_errors {
            warn!(
                path = %path.display(),
                encoding = format.encoding.name(),
                "file contains byte sequences invalid for its encoding"
            );
        }
        let text = text.into_owned();

        let headers = reader_builder(format)
            .from_reader(text.as_bytes())
            .headers()
            .map_err(|source| LoadError::Csv {
                path: path.clone(),
                source,
            })?
            .iter()
            .map(|header| header.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        Ok(Self {
            path,
            format,
            text,
            headers,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column(&self, name: &str) -> Result<usize, LoadError> {
        self.optional_column(name)
            .ok_or_else(|| LoadError::MissingColumn {
                path: self.path.clone(),
                column: name.to_string(),
            })
    }

    pub fn optional_column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Data rows with their 1-based line numbers. Rows the CSV reader
    /// cannot frame are skipped with a warning.
    pub fn records(&self) -> impl Iterator<Item = (u64, StringRecord)> + '_ {
        reader_builder(self.format)
            .from_reader(self.text.as_bytes())
            .into_records()
            .filter_map(move |result| match result {
                Ok(record) => {
                    let line = record.position().map_or(0, |position| position.line());
                    Some((line, record))
                }
                Err(error) => {
                    warn!(path = %self.path.display(), %error, "skipping unreadable row");
                    None
                }
            })
    }
}

fn reader_builder(format: TableFormat) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(format.delimiter)
        .has_headers(true)
        .flexible(true);
    builder
}

/// Trimmed cell content, `None` when the cell is absent or blank.
pub fn field(record: &StringRecord, index: usize) -> Option<&str> {
    record
        .get(index)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Parses French-formatted numbers: decimal comma, spaces (including the
/// no-break and narrow no-break variants) as thousands separators.
pub fn parse_locale_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Values usable as rents, surfaces or prices.
pub fn parse_positive_number(raw: &str) -> Option<f64> {
    parse_locale_number(raw).filter(|value| *value > 0.0)
}

/// Accepted / rejected row tally for one loaded file.
#[derive(Debug, Default, Clone)]
pub struct LoadReport {
    pub accepted: usize,
    pub rejected: BTreeMap<&'static str, usize>,
}

impl LoadReport {
    pub fn accept(&mut self) {
        self.accepted += 1;
    }

    pub fn reject(&mut self, line: u64, reason: &'static str) {
        debug!(line, reason, "row excluded");
        *self.rejected.entry(reason).or_default() += 1;
    }

    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }

    pub fn log_summary(&self, path: &Path) {
        info!(path = %path.display(), rows = self.accepted, "loaded");
        for (reason, count) in &self.rejected {
            warn!(path = %path.display(), reason, count, "rows excluded");
        }
    }
}
