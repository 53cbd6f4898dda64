pub mod tabulareader;

use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::{layout::TabulaExtractionMethod, table::Grid};

/// Reads the tables found on a single page of a PDF.
pub trait TableReader {
    /// Returns every table found on `page` (1-based) of the PDF, in the order the reader found
    /// them. A page without tables gives an empty result rather than an error.
    fn read_page_tables(
        &self,
        pdf_path: &Path,
        page: i32,
        method: TabulaExtractionMethod,
    ) -> Result<Vec<ExtractedTable>>;
}

/// A single table read from a PDF page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtractedTable {
    pub page: i32,
    pub data: Grid,
}

/// A sequence of tables as serialised by Tabula's JSON output.
#[derive(Deserialize, Debug)]
#[serde(transparent)]
pub struct JsonTableSet(pub Vec<JsonTable>);

/// A single extracted table from a PDF file.
#[allow(dead_code)]
#[derive(Deserialize, Debug)]
pub struct JsonTable {
    pub extraction_method: String,
    pub page_number: i32,
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub right: f32,
    pub bottom: f32,
    pub data: Vec<JsonRow>,
}

/// A single extracted table row from a PDF file.
#[derive(Deserialize, Debug)]
pub struct JsonRow(pub Vec<JsonCell>);

/// A single extracted table cell from a PDF file.
#[allow(dead_code)]
#[derive(Deserialize, Debug)]
pub struct JsonCell {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub text: String,
}

impl From<JsonTable> for ExtractedTable {
    fn from(value: JsonTable) -> Self {
        ExtractedTable {
            page: value.page_number,
            data: Grid::from(
                value
                    .data
                    .into_iter()
                    .map(|row| row.0.into_iter().map(|cell| cell.text)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use googletest::prelude::*;

    use super::*;
    use crate::table::Row;

    #[gtest]
    fn test_converts_tabula_json_output() -> Result<()> {
        const JSON: &str = r#"[
            {
                "extraction_method": "lattice",
                "page_number": 2,
                "top": 10.0, "left": 20.0, "width": 100.0, "height": 50.0,
                "right": 120.0, "bottom": 60.0,
                "data": [
                    [
                        {"top": 10.0, "left": 20.0, "width": 50.0, "height": 10.0, "text": ""},
                        {"top": 10.0, "left": 70.0, "width": 50.0, "height": 10.0, "text": "0"}
                    ],
                    [
                        {"top": 20.0, "left": 20.0, "width": 50.0, "height": 10.0, "text": "Autauga"},
                        {"top": 20.0, "left": 70.0, "width": 50.0, "height": 10.0, "text": "001"}
                    ]
                ]
            }
        ]"#;

        let table_set: JsonTableSet = serde_json::from_str(JSON)?;
        let tables: Vec<ExtractedTable> = table_set.0.into_iter().map(Into::into).collect();

        expect_that!(
            tables,
            elements_are![eq(&ExtractedTable {
                page: 2,
                data: Grid(vec![Row::from(["", "0"]), Row::from(["Autauga", "001"])]),
            })]
        );
        Ok(())
    }
}
