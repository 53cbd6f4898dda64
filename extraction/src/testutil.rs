use std::{
    cell::RefCell,
    path::{Path, PathBuf},
};

use anyhow::{Result, anyhow};

use crate::{
    layout::TabulaExtractionMethod,
    pdf::{ExtractedTable, TableReader},
    table::{Grid, Row},
};

/// Fields of the `n`th county in a synthetic codebook table, in raw column order: name, ICPSR
/// state, ICPSR county, duplicated name, FIPS state, FIPS county.
pub fn county_row(n: usize) -> Vec<String> {
    vec![
        format!("County {n}"),
        "41".to_string(),
        format!("{:04}", n * 10),
        format!("County {n}"),
        "01".to_string(),
        format!("{:03}", 2 * n - 1),
    ]
}

/// Grid shaped like Tabula's output for the codebook page: a mostly blank label row, a record
/// repeating the printed header, then `counties` county records.
pub fn codebook_grid(counties: usize) -> Grid {
    let mut rows = vec![
        Row::from(["", "", "", "", "", "0"]),
        Row::from([
            "County name",
            "ICPSR State",
            "ICPSR County",
            "County name",
            "FIPS State",
            "FIPS County",
        ]),
    ];
    rows.extend((1..=counties).map(|n| Row(county_row(n))));
    Grid(rows)
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReadCall {
    pub pdf_path: PathBuf,
    pub page: i32,
    pub method: TabulaExtractionMethod,
}

/// [TableReader] returning canned tables and recording its calls.
pub struct FakeTableReader {
    tables: Option<Vec<ExtractedTable>>,
    calls: RefCell<Vec<ReadCall>>,
}

impl FakeTableReader {
    pub fn returning(tables: Vec<ExtractedTable>) -> Self {
        Self {
            tables: Some(tables),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            tables: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls_snapshot(&self) -> Vec<ReadCall> {
        self.calls.borrow().clone()
    }
}

impl TableReader for FakeTableReader {
    fn read_page_tables(
        &self,
        pdf_path: &Path,
        page: i32,
        method: TabulaExtractionMethod,
    ) -> Result<Vec<ExtractedTable>> {
        self.calls.borrow_mut().push(ReadCall {
            pdf_path: pdf_path.to_owned(),
            page,
            method,
        });
        self.tables
            .clone()
            .ok_or_else(|| anyhow!("fake Tabula failure"))
    }
}
