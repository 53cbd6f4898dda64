//! Where the correspondence table sits in the codebook, and how to clean it up.

use std::{collections::HashSet, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Name of the codebook PDF, relative to the data directory.
pub const DEFAULT_INPUT_FILENAME: &str = "08611-0001-Codebook.pdf";
/// Name of the output CSV, relative to the data directory.
pub const DEFAULT_OUTPUT_FILENAME: &str = "Correspondences.csv";

/// Extraction algorithm for Tabula to use.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TabulaExtractionMethod {
    #[default]
    Guess,
    Lattice,
    Stream,
}

impl TabulaExtractionMethod {
    pub fn to_tabula_extraction_method(self) -> tabula::ExtractionMethod {
        match self {
            TabulaExtractionMethod::Stream => tabula::ExtractionMethod::Basic,
            TabulaExtractionMethod::Guess => tabula::ExtractionMethod::Decide,
            TabulaExtractionMethod::Lattice => tabula::ExtractionMethod::Spreadsheet,
        }
    }

    /// Whether Tabula should guess the table area on the page.
    pub fn guess_area(self) -> bool {
        self == TabulaExtractionMethod::Guess
    }
}

/// Maps a raw extracted column label to the name it is written under.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ColumnMapping {
    pub source: String,
    pub target: String,
}

impl ColumnMapping {
    fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_owned(),
            target: target.to_owned(),
        }
    }
}

/// Layout of the correspondence table within the codebook.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodebookLayout {
    /// 1-based page number holding the table.
    pub page: i32,
    pub method: TabulaExtractionMethod,
    /// Columns to keep, in output order.
    pub columns: Vec<ColumnMapping>,
    /// Position of the first record to keep. Records before it repeat the header.
    pub first_row: usize,
    /// Number of records to keep.
    pub row_count: usize,
}

impl Default for CodebookLayout {
    /// Layout of page 2 of the ICPSR 8611 codebook.
    ///
    /// Tabula finds two extra columns there: a duplicate of the county names (`Unnamed: 3`) and
    /// blank spacers. The first data record repeats the header text.
    fn default() -> Self {
        Self {
            page: 2,
            method: TabulaExtractionMethod::Guess,
            columns: vec![
                ColumnMapping::new("Unnamed: 0", "County name"),
                ColumnMapping::new("Unnamed: 1", "ICPSR State"),
                ColumnMapping::new("Unnamed: 2", "ICPSR County"),
                ColumnMapping::new("Unnamed: 4", "FIPS State"),
                ColumnMapping::new("0", "FIPS County"),
            ],
            first_row: 1,
            row_count: 25,
        }
    }
}

impl CodebookLayout {
    /// Loads a layout from a YAML file. Keys that are absent take their default value.
    pub fn load_yaml(path: &Path) -> Result<Self> {
        let file =
            std::fs::File::open(path).with_context(|| format!("opening layout file {path:?}"))?;
        let layout: Self = serde_yaml_ng::from_reader(file)
            .with_context(|| format!("parsing layout file {path:?}"))?;
        layout
            .validate()
            .with_context(|| format!("validating layout file {path:?}"))?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page < 1 {
            return Err(invalid(format!("page must be 1 or more, got {}", self.page)));
        }
        if self.columns.is_empty() {
            return Err(invalid("no columns selected".into()));
        }
        if self.row_count == 0 {
            return Err(invalid("row_count must be 1 or more".into()));
        }
        if self.first_row.checked_add(self.row_count).is_none() {
            return Err(invalid(format!(
                "first_row {} plus row_count {} is out of range",
                self.first_row, self.row_count
            )));
        }
        let mut targets = HashSet::with_capacity(self.columns.len());
        for mapping in &self.columns {
            if !targets.insert(mapping.target.as_str()) {
                return Err(invalid(format!(
                    "column name {:?} is used more than once",
                    mapping.target
                )));
            }
        }
        Ok(())
    }

    pub fn source_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|mapping| mapping.source.as_str())
            .collect()
    }

    pub fn target_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|mapping| mapping.target.as_str())
            .collect()
    }
}

fn invalid(reason: String) -> anyhow::Error {
    ExtractError::InvalidLayout(reason).into()
}
