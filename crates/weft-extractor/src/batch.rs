//! Batch Driver: run the Extractor over every record of a file

use crate::error::ExtractorError;
use crate::extractor::Extractor;
use crate::formats::{load_dataset, save_results};
use crate::types::{AnnotatedRecord, BatchReport};
use std::path::Path;
use tracing::{info, warn};
use weft_domain::{CompletionService, Record};

/// Processes records strictly one after another, in input order
pub struct BatchDriver<C>
where
    C: CompletionService,
{
    extractor: Extractor<C>,
}

impl<C> BatchDriver<C>
where
    C: CompletionService,
{
    /// Create a new driver around an Extractor
    pub fn new(extractor: Extractor<C>) -> Self {
        Self { extractor }
    }

    /// The wrapped Extractor
    pub fn extractor(&self) -> &Extractor<C> {
        &self.extractor
    }

    /// Extract every record; output has the same length and order as input
    pub async fn run(&self, records: &[Record]) -> Vec<AnnotatedRecord> {
        let total = records.len();
        let mut annotated = Vec::with_capacity(total);

        for (idx, record) in records.iter().enumerate() {
            info!("Processing record {}/{}", idx + 1, total);
            let result = self.extractor.extract_result(record).await;
            annotated.push(AnnotatedRecord {
                input: record.clone(),
                result,
            });
        }

        annotated
    }

    /// Load `input`, extract every record, write the results to `output`
    ///
    /// Input and output formats follow the file extensions, so a CSV input
    /// can be written out as JSON and vice versa.
    pub async fn process_file(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<BatchReport, ExtractorError> {
        let dataset = load_dataset(input)?;
        info!(
            "Loaded {} records from {}",
            dataset.records.len(),
            input.display()
        );

        let description_field = &self.extractor.config().description_field;
        if !dataset.records.is_empty() && !dataset.columns.iter().any(|c| c == description_field) {
            warn!(
                "Input has no '{}' field; descriptions will be empty",
                description_field
            );
        }

        let annotated = self.run(&dataset.records).await;

        save_results(
            output,
            &dataset.columns,
            &annotated,
            &self.extractor.config().result_column,
        )?;

        let report = BatchReport::from_annotated(&annotated);
        info!("Extraction complete ({}). Results saved to {}", report, output.display());

        Ok(report)
    }
}
