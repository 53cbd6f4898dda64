use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    layout::CodebookLayout,
    locate::Locations,
    output,
    pdf::TableReader,
    table::Table,
    transform,
};

/// Extraction event emitted to track progress.
#[derive(Debug)]
pub enum ExtractEvent<'t> {
    /// The cleaned table is ready, and is about to be written.
    Cleaned { table: &'t Table },
    /// The cleaned table has been written to `path`.
    Written { path: &'t Path, rows: usize },
}

/// Trait to implement to receive notifications about extraction events.
pub trait ExtractEvents {
    fn on_event(&mut self, event: ExtractEvent);
}

/// [ExtractEvents] that ignores all events.
pub struct NoEvents;

impl ExtractEvents for NoEvents {
    fn on_event(&mut self, _event: ExtractEvent) {}
}

/// Extracts the correspondence table from a codebook PDF into a CSV file.
pub struct Extractor<'a> {
    table_reader: &'a dyn TableReader,
    layout: &'a CodebookLayout,
}

impl<'a> Extractor<'a> {
    /// Create a new [Extractor]. Fails if `layout` is invalid.
    pub fn new(layout: &'a CodebookLayout, table_reader: &'a dyn TableReader) -> Result<Self> {
        layout.validate()?;
        Ok(Self {
            table_reader,
            layout,
        })
    }

    /// Reads the labelled table from the layout's page of `pdf_path`, before any cleanup.
    pub fn read_raw_table(&self, pdf_path: &Path) -> Result<Table> {
        let page = self.layout.page;
        let tables = self
            .table_reader
            .read_page_tables(pdf_path, page, self.layout.method)
            .with_context(|| format!("reading tables from page {page} of {pdf_path:?}"))?;
        let extracted = transform::single_table(tables, page)?;
        Ok(Table::from_grid(extracted.data))
    }

    /// Runs the whole extraction, returning the table that was written.
    ///
    /// Nothing is written to the output path if any step fails.
    pub fn extract(&self, locations: &Locations, events: &mut dyn ExtractEvents) -> Result<Table> {
        let pdf_path = locations.locate_source().context("locating codebook")?;
        log::info!("Extracting correspondence table from {pdf_path:?}.");

        let raw = self.read_raw_table(&pdf_path)?;
        log::debug!(
            "Extracted table has columns {:?} and {} rows.",
            raw.columns(),
            raw.len()
        );

        let table = transform::clean_table(&raw, self.layout)
            .with_context(|| format!("cleaning table from page {}", self.layout.page))?;
        events.on_event(ExtractEvent::Cleaned { table: &table });

        let output_path = locations.output_path();
        output::write_csv(&table, &output_path)?;
        events.on_event(ExtractEvent::Written {
            path: &output_path,
            rows: table.len(),
        });

        Ok(table)
    }
}
