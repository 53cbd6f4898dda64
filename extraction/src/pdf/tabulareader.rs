use std::path::Path;

use anyhow::{Context, Result};

use super::{ExtractedTable, JsonTableSet, TableReader};
use crate::layout::TabulaExtractionMethod;

/// [TableReader] that delegates to Tabula running in an embedded JVM.
///
/// Must be created and run on the thread that attached to the [tabula::TabulaVM].
pub struct TabulaTableReader<'env> {
    tabula_env: tabula::TabulaEnv<'env>,
}

impl<'env> TabulaTableReader<'env> {
    /// Creates a [TabulaTableReader] with the given [tabula::TabulaEnv].
    pub fn new(tabula_env: tabula::TabulaEnv<'env>) -> Self {
        Self { tabula_env }
    }
}

impl<'env> TableReader for TabulaTableReader<'env> {
    fn read_page_tables(
        &self,
        pdf_path: &Path,
        page: i32,
        method: TabulaExtractionMethod,
    ) -> Result<Vec<ExtractedTable>> {
        log::debug!("Reading tables from page {page} of {pdf_path:?} using {method}.");

        let pages = [page];
        let tabula = self
            .tabula_env
            .configure_tabula(
                None,
                Some(&pages),
                tabula::OutputFormat::Json,
                method.guess_area(),
                method.to_tabula_extraction_method(),
                false,
                None,
            )
            .context("configuring Tabula to extract tables")?;

        let extracted_file = tempfile::NamedTempFile::new()
            .context("creating temporary file for extracting PDF table data")?;
        tabula
            .parse_document_into(pdf_path, extracted_file.path())
            .with_context(|| format!("extracting tables from page {page} of {pdf_path:?}"))?;

        let result: JsonTableSet = serde_json::from_reader(extracted_file)
            .context("parsing JSON output from Tabula")?;
        log::debug!("Tabula found {} table(s) on page {page}.", result.0.len());

        Ok(result.0.into_iter().map(Into::into).collect())
    }
}
