//! Batch-level types: processed records, file formats and the run report

use std::fmt;
use std::path::Path;
use weft_domain::{ExtractionResult, Record};

/// An input record paired with its extraction result
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRecord {
    /// The record as read from the input
    pub input: Record,

    /// What extraction produced for it
    pub result: ExtractionResult,
}

impl AnnotatedRecord {
    /// The augmented output record: input fields plus the result's fields
    pub fn augmented(&self) -> Record {
        self.input.merged(&self.result)
    }
}

/// On-disk format of an input or output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// A JSON array of objects
    Json,
    /// A CSV table with a header row
    Csv,
}

impl RecordFormat {
    /// Pick the format from a path's extension: `.csv` is CSV, anything else JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => RecordFormat::Csv,
            _ => RecordFormat::Json,
        }
    }
}

/// Records loaded from an input file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Column names in order (CSV header, or union of record keys for JSON)
    pub columns: Vec<String>,

    /// Records in input order
    pub records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset from records, deriving columns from their keys
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for name in record.field_names() {
                if !columns.iter().any(|c| c == name) {
                    columns.push(name.to_string());
                }
            }
        }
        Self { columns, records }
    }
}

/// Summary of a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Records processed
    pub total: usize,

    /// Records with extracted attributes
    pub extracted: usize,

    /// Records kept as raw model output
    pub raw_output: usize,

    /// Records that ended in an error
    pub errors: usize,
}

impl BatchReport {
    /// Tally the results of a run
    pub fn from_annotated(annotated: &[AnnotatedRecord]) -> Self {
        let mut report = BatchReport {
            total: annotated.len(),
            ..Default::default()
        };
        for record in annotated {
            match record.result {
                ExtractionResult::Attributes(_) => report.extracted += 1,
                ExtractionResult::RawOutput(_) => report.raw_output += 1,
                ExtractionResult::Error(_) => report.errors += 1,
            }
        }
        report
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records: {} extracted, {} raw output, {} errors",
            self.total, self.extracted, self.raw_output, self.errors
        )
    }
}
