//! Turns the raw extracted table into the cleaned correspondence table.

use anyhow::{Context, Result};

use crate::{
    error::ExtractError,
    layout::CodebookLayout,
    pdf::ExtractedTable,
    table::Table,
};

/// Picks the only table extracted from `page`.
pub fn single_table(mut tables: Vec<ExtractedTable>, page: i32) -> Result<ExtractedTable> {
    match tables.len() {
        0 => Err(ExtractError::NoTables { page }.into()),
        1 => Ok(tables.remove(0)),
        count => Err(ExtractError::MultipleTables { page, count }.into()),
    }
}

/// Projects, renames and slices the raw labelled table according to `layout`.
pub fn clean_table(raw: &Table, layout: &CodebookLayout) -> Result<Table> {
    let table = raw
        .project(&layout.source_columns())
        .context("selecting columns")?
        .rename(&layout.target_columns())
        .context("renaming columns")?
        .slice_rows(layout.first_row, layout.row_count)
        .context("selecting rows")?;
    log::debug!(
        "Kept {} of {} columns and {} of {} rows.",
        table.columns().len(),
        raw.columns().len(),
        table.len(),
        raw.len(),
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use googletest::prelude::*;
    use testutils::anyhow_downcasts_to;

    use super::*;
    use crate::{
        table::{Grid, Row},
        testutil::{codebook_grid, county_row},
    };

    #[gtest]
    fn test_single_table_rejects_empty_page() {
        expect_that!(
            single_table(vec![], 2),
            err(anyhow_downcasts_to::<ExtractError, _>(eq(
                &ExtractError::NoTables { page: 2 }
            )))
        );
    }

    #[gtest]
    fn test_single_table_rejects_multiple_tables() {
        let table = ExtractedTable {
            page: 2,
            data: Grid::default(),
        };

        expect_that!(
            single_table(vec![table.clone(), table], 2),
            err(anyhow_downcasts_to::<ExtractError, _>(eq(
                &ExtractError::MultipleTables { page: 2, count: 2 }
            )))
        );
    }

    #[gtest]
    fn test_clean_table_selects_and_renames_columns() -> Result<()> {
        let raw = Table::from_grid(codebook_grid(25));

        let table = clean_table(&raw, &CodebookLayout::default())?;

        expect_that!(
            table.columns(),
            elements_are![
                eq("County name"),
                eq("ICPSR State"),
                eq("ICPSR County"),
                eq("FIPS State"),
                eq("FIPS County"),
            ]
        );
        let expected_first = county_row(1);
        expect_that!(
            &table.records()[0].fields,
            eq(&Row::from([
                expected_first[0].as_str(),
                expected_first[1].as_str(),
                expected_first[2].as_str(),
                expected_first[4].as_str(),
                expected_first[5].as_str(),
            ]))
        );
        Ok(())
    }

    #[gtest]
    fn test_clean_table_drops_header_record() -> Result<()> {
        let raw = Table::from_grid(codebook_grid(25));

        let table = clean_table(&raw, &CodebookLayout::default())?;

        expect_that!(table.len(), eq(25));
        expect_that!(
            table.records().iter().map(|record| record.index).collect::<Vec<_>>(),
            eq(&(1..=25).collect::<Vec<usize>>())
        );
        expect_that!(
            table.records().iter().all(|record| record.fields[0] != "County name"),
            eq(true)
        );
        Ok(())
    }

    #[gtest]
    fn test_clean_table_ignores_rows_after_range() -> Result<()> {
        let raw = Table::from_grid(codebook_grid(30));

        let table = clean_table(&raw, &CodebookLayout::default())?;

        expect_that!(table.len(), eq(25));
        expect_that!(table.records().last().map(|record| record.index), some(eq(25)));
        Ok(())
    }

    // A table shorter than the layout's row range is not repaired by truncating the range.
    #[gtest]
    fn test_clean_table_rejects_short_table() {
        let raw = Table::from_grid(codebook_grid(20));

        expect_that!(
            clean_table(&raw, &CodebookLayout::default()),
            err(anyhow_downcasts_to::<ExtractError, _>(eq(
                &ExtractError::TooFewRows {
                    needed: 26,
                    actual: 21,
                }
            )))
        );
    }

    #[gtest]
    fn test_clean_table_rejects_unexpected_columns() {
        let raw = Table::from_grid(Grid::from([vec!["a", "b"], vec!["1", "2"]]));

        expect_that!(
            clean_table(&raw, &CodebookLayout::default()),
            err(anyhow_downcasts_to::<ExtractError, _>(eq(
                &ExtractError::MissingColumn {
                    label: "Unnamed: 0".into(),
                    available: vec!["a".into(), "b".into()],
                }
            )))
        );
    }
}
