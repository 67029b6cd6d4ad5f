use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use encoding_rs::WINDOWS_1252;
use tracing::debug;

use crate::error::{Error, Result};

/// Column holding the first measurement (1970 population).
pub const FIRST_MEASUREMENT: usize = 4;
/// Total number of columns a data row must carry.
pub const COLUMN_COUNT: usize = 27;
/// Column holding the 2010 population, used for the size cohorts.
pub const POPULATION_2010: usize = 8;

const MEASUREMENT_COUNT: usize = COLUMN_COUNT - FIRST_MEASUREMENT;

/// One study row: a measurement set for one urban agglomeration.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationRecord {
    pub name: String,
    pub country: String,
    pub region_key: String,
    pub oid: String,
    measurements: [Option<f64>; MEASUREMENT_COUNT],
}

impl LocationRecord {
    /// Value of an absolute column index; `None` for blank cells and for
    /// the descriptive columns.
    pub fn value(&self, column: usize) -> Option<f64> {
        column
            .checked_sub(FIRST_MEASUREMENT)
            .and_then(|i| self.measurements.get(i).copied().flatten())
    }

    /// 2010 population in thousands.
    pub fn population_2010(&self) -> Option<f64> {
        self.value(POPULATION_2010)
    }

    fn from_csv(row: &StringRecord, line: u64) -> Result<Self> {
        if row.len() < COLUMN_COUNT {
            return Err(Error::MissingColumns {
                line,
                expected: COLUMN_COUNT,
                found: row.len(),
            });
        }

        let mut measurements = [None; MEASUREMENT_COUNT];
        for (i, slot) in measurements.iter_mut().enumerate() {
            let column = FIRST_MEASUREMENT + i;
            *slot = parse_cell(&row[column], line, column)?;
        }

        Ok(Self {
            name: row[0].to_string(),
            country: row[1].to_string(),
            region_key: row[2].to_string(),
            oid: row[3].to_string(),
            measurements,
        })
    }
}

fn parse_cell(raw: &str, line: u64, column: usize) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<f64>().map(Some).map_err(|_| Error::Parse {
        line,
        column,
        value: raw.to_string(),
    })
}

/// Reads the measurement table. The file is decoded as Windows-1252 so
/// accented agglomeration names survive regardless of the host locale.
pub fn read_records(path: &Path) -> Result<Vec<LocationRecord>> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let (text, _, had_errors) = WINDOWS_1252.decode(&bytes);
    if had_errors {
        debug!(path = %path.display(), "input contained undecodable bytes");
    }
    parse_records(text.as_bytes())
}

/// Parses already-decoded CSV text. The first line is a header.
pub fn parse_records<R: std::io::Read>(reader: R) -> Result<Vec<LocationRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        records.push(LocationRecord::from_csv(&row, line)?);
    }
    debug!(rows = records.len(), "parsed location records");
    Ok(records)
}
