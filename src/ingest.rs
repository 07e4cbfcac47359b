// src/ingest.rs
//! CSV ingestion.
//!
//! Expected columns: `id, firstName, lastName, salary, managerId`. The first
//! row is a header and is skipped. Cells are trimmed; extra columns are
//! ignored. Any malformed row fails the whole load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{OrgAuditError, Result};
use crate::store::RecordStore;
use crate::types::Employee;

const COLUMNS: usize = 5;

/// Reads every row of `reader` into `store`.
///
/// # Errors
/// Returns [`OrgAuditError::MalformedRecord`] for short rows,
/// [`OrgAuditError::InvalidSalary`] for non-numeric salaries, and
/// [`OrgAuditError::Csv`] for unreadable input.
pub fn load_from_reader<R: Read>(reader: R, store: &mut RecordStore) -> Result<usize> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut loaded = 0;
    for row in csv.records() {
        let record = row?;
        store.add(parse_record(&record)?);
        loaded += 1;
    }
    tracing::debug!(loaded, "records ingested");
    Ok(loaded)
}

/// Opens `path` and loads it with [`load_from_reader`].
///
/// # Errors
/// Returns [`OrgAuditError::Io`] if the file cannot be opened, plus any
/// [`load_from_reader`] error.
pub fn load_from_path(path: &Path, store: &mut RecordStore) -> Result<usize> {
    let file = File::open(path).map_err(|source| OrgAuditError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    load_from_reader(file, store)
}

/// Convenience: load a fresh store from `path`.
///
/// # Errors
/// See [`load_from_path`].
pub fn read_store(path: &Path) -> Result<RecordStore> {
    let mut store = RecordStore::new();
    load_from_path(path, &mut store)?;
    Ok(store)
}

fn parse_record(record: &StringRecord) -> Result<Employee> {
    let line = record.position().map_or(0, csv::Position::line);

    if record.len() < COLUMNS {
        return Err(OrgAuditError::MalformedRecord {
            line,
            reason: format!("expected {COLUMNS} columns, found {}", record.len()),
        });
    }

    let field = |i: usize| record.get(i).unwrap_or_default();
    let raw_salary = field(3);
    let salary = raw_salary
        .parse::<u64>()
        .map_err(|_| OrgAuditError::InvalidSalary {
            line,
            value: raw_salary.to_string(),
        })?;

    Ok(Employee::new(
        field(0),
        field(1),
        field(2),
        salary,
        Some(field(4)),
    ))
}
