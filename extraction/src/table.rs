//! Labelled tables of text cells, as extracted from a PDF and as written to CSV.

use std::ops::{Deref, DerefMut};

use anyhow::Result;

use crate::error::ExtractError;

/// Label given to a column whose header cell is blank.
pub fn unnamed_label(position: usize) -> String {
    format!("Unnamed: {position}")
}

/// A grid of text cells without labels, in the shape the extraction engine produces it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Grid(pub Vec<Row>);

impl Deref for Grid {
    type Target = Vec<Row>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Grid {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<C, R> From<C> for Grid
where
    C: IntoIterator<Item = R>,
    R: Into<Row>,
{
    fn from(value: C) -> Self {
        Grid(value.into_iter().map(Into::into).collect())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Row(pub Vec<String>);

impl Deref for Row {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Row {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<C, S> From<C> for Row
where
    C: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from(value: C) -> Self {
        Row(value.into_iter().map(Into::into).collect())
    }
}

/// A row of a [Table] together with its index label.
///
/// The index label is the row's position in the table it was first created in, and survives row
/// slicing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    pub index: usize,
    pub fields: Row,
}

/// Table with labelled columns and indexed records.
///
/// Every record has exactly as many fields as there are column labels.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Table {
    /// Creates a [Table] from column labels and rows. Rows are indexed from zero, and are padded
    /// with empty fields or truncated to the number of columns.
    pub fn new<C, S>(columns: C, rows: Vec<Row>) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let width = columns.len();
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(index, mut fields)| {
                fields.resize(width, String::new());
                Record { index, fields }
            })
            .collect();
        Self { columns, records }
    }

    /// Labels the columns of a raw [Grid] from its first row.
    ///
    /// A blank header cell at position `i` is labelled `Unnamed: i`. The remaining rows become
    /// records indexed from zero. An empty grid produces an empty table.
    pub fn from_grid(grid: Grid) -> Self {
        let mut rows = grid.0.into_iter();
        let header = match rows.next() {
            Some(header) => header,
            None => return Self::default(),
        };

        let mut rows: Vec<Row> = rows.collect();
        let width = rows
            .iter()
            .map(|row| row.len())
            .max()
            .unwrap_or(0)
            .max(header.len());

        let mut columns: Vec<String> = header
            .0
            .into_iter()
            .enumerate()
            .map(|(position, label)| {
                if label.is_empty() {
                    unnamed_label(position)
                } else {
                    label
                }
            })
            .collect();
        columns.extend((columns.len()..width).map(unnamed_label));

        for row in &mut rows {
            row.resize(width, String::new());
        }

        Self::new(columns, rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the position of the column with the given label.
    pub fn column_position(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == label)
    }

    /// Returns a table with only the columns named by `labels`, in that order.
    pub fn project<S>(&self, labels: &[S]) -> Result<Table>
    where
        S: AsRef<str>,
    {
        let positions = labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                self.column_position(label)
                    .ok_or_else(|| ExtractError::MissingColumn {
                        label: label.to_owned(),
                        available: self.columns.clone(),
                    })
            })
            .collect::<std::result::Result<Vec<usize>, _>>()?;

        let records = self
            .records
            .iter()
            .map(|record| Record {
                index: record.index,
                fields: Row(positions
                    .iter()
                    .map(|&position| record.fields[position].clone())
                    .collect()),
            })
            .collect();

        Ok(Table {
            columns: positions
                .iter()
                .map(|&position| self.columns[position].clone())
                .collect(),
            records,
        })
    }

    /// Replaces all column labels, positionally.
    pub fn rename<S>(mut self, labels: &[S]) -> Result<Table>
    where
        S: AsRef<str>,
    {
        if labels.len() != self.columns.len() {
            return Err(ExtractError::ColumnCountMismatch {
                expected: self.columns.len(),
                actual: labels.len(),
            }
            .into());
        }
        self.columns = labels.iter().map(|label| label.as_ref().to_owned()).collect();
        Ok(self)
    }

    /// Keeps `count` records starting at position `first`, dropping the rest.
    ///
    /// Fails if the table holds fewer than `first + count` records; it is never padded or
    /// truncated to fit.
    pub fn slice_rows(mut self, first: usize, count: usize) -> Result<Table> {
        let needed = match first.checked_add(count) {
            Some(needed) if needed <= self.records.len() => needed,
            _ => {
                return Err(ExtractError::TooFewRows {
                    needed: first.saturating_add(count),
                    actual: self.records.len(),
                }
                .into());
            }
        };
        self.records.truncate(needed);
        self.records.drain(..first);
        Ok(self)
    }
}
