//! Record file readers and writers (JSON array and CSV)

use crate::error::ExtractorError;
use crate::types::{AnnotatedRecord, Dataset, RecordFormat};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use weft_domain::Record;

/// Load records from a file, picking the format from its extension
pub fn load_dataset(path: &Path) -> Result<Dataset, ExtractorError> {
    match RecordFormat::from_path(path) {
        RecordFormat::Json => read_json(path),
        RecordFormat::Csv => read_csv(path),
    }
}

/// Read a JSON array of objects
pub fn read_json(path: &Path) -> Result<Dataset, ExtractorError> {
    let reader = BufReader::new(File::open(path)?);
    let value: Value = serde_json::from_reader(reader)?;

    let Value::Array(items) = value else {
        return Err(ExtractorError::InvalidInput(format!(
            "{} must contain a JSON array of records",
            path.display()
        )));
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            Record::from_value(item).ok_or_else(|| {
                ExtractorError::InvalidInput(format!("Element {} is not a JSON object", idx))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dataset::from_records(records))
}

/// Read a CSV file with a header row; every value is read as a string
pub fn read_csv(path: &Path) -> Result<Dataset, ExtractorError> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::new();
        for (column, value) in columns.iter().zip(row.iter()) {
            record.insert(column.clone(), value);
        }
        records.push(record);
    }

    Ok(Dataset { columns, records })
}

/// Write records as a pretty-printed JSON array
pub fn write_json(path: &Path, records: &[Record]) -> Result<(), ExtractorError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write the input columns plus one column holding each result as JSON text
pub fn write_csv(
    path: &Path,
    columns: &[String],
    annotated: &[AnnotatedRecord],
    result_column: &str,
) -> Result<(), ExtractorError> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header: Vec<&str> = columns.iter().map(String::as_str).collect();
    header.push(result_column);
    writer.write_record(&header)?;

    for record in annotated {
        let mut row: Vec<String> = columns.iter().map(|c| record.input.text(c)).collect();
        row.push(serde_json::to_string(&record.result.to_value())?);
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write results in the format chosen by the output path's extension
pub fn save_results(
    path: &Path,
    columns: &[String],
    annotated: &[AnnotatedRecord],
    result_column: &str,
) -> Result<(), ExtractorError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    match RecordFormat::from_path(path) {
        RecordFormat::Json => {
            let records: Vec<Record> = annotated.iter().map(AnnotatedRecord::augmented).collect();
            write_json(path, &records)
        }
        RecordFormat::Csv => write_csv(path, columns, annotated, result_column),
    }
}
