// File: crates/pricechart-core/src/dataset.rs
// Summary: Blocking CSV load that produces the read-only, normalized phone dataset.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::normalize::{normalize, RawRecord, Record, REQUIRED_COLUMNS};

/// The normalized dataset. Populated once by `load`; only shared references
/// to its records are ever handed out.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Load and normalize a comma-separated file with a header row.
    /// Files that are not valid UTF-8 are decoded as Latin-1.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let text = decode_text(bytes);
        let dataset = Self::from_reader(text.as_bytes())?;
        info!(path = %path.display(), records = dataset.len(), "dataset loaded");
        Ok(dataset)
    }

    /// Parse CSV from any reader. Extra columns are ignored, short rows get empty fields.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        debug!(?headers, "dataset headers");
        for want in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == want) {
                return Err(Error::MissingColumn(want));
            }
        }

        let mut records = Vec::new();
        for row in rdr.deserialize::<RawRecord>() {
            records.push(normalize(&row?));
        }
        Ok(Self { records })
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct launch years; records without a year are not offered.
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .filter_map(|r| r.launched_year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted distinct RAM sizes, skipping the `0` placeholder for unparseable values.
    pub fn ram_sizes(&self) -> Vec<u64> {
        self.records
            .iter()
            .map(|r| r.ram_mb)
            .filter(|&ram| ram > 0)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        // Latin-1: each byte maps to the same Unicode code point
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_fallback() {
        let text = decode_text(vec![b'C', 0xE9]);
        assert_eq!(text, "C\u{e9}");
    }
}
