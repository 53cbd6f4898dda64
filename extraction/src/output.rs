//! Writes the cleaned table to CSV, and renders it for the console.

use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;

use crate::{error::ExtractError, table::Table};

/// Writes `table` as CSV to `path`, replacing any existing file.
///
/// The first column holds each record's index label under an empty header. The file only appears
/// at `path` once it has been completely written.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    write_csv_inner(table, path).context(ExtractError::SinkWrite {
        path: path.to_owned(),
    })
}

fn write_csv_inner(table: &Table, path: &Path) -> Result<()> {
    let file = AtomicWriteFile::open(path).context("opening output file")?;

    let mut output = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);

    output
        .write_record(std::iter::once("").chain(table.columns().iter().map(String::as_str)))
        .context("writing header row")?;

    for record in table.records() {
        let index = record.index.to_string();
        output
            .write_record(
                std::iter::once(index.as_str()).chain(record.fields.iter().map(String::as_str)),
            )
            .with_context(|| format!("writing row index {}", record.index))?;
    }

    let mut file = output
        .into_inner()
        .map_err(|err| anyhow::anyhow!("flushing CSV output: {}", err.error()))?;
    file.flush().context("flushing CSV output")?;
    file.commit().context("committing output file")?;

    log::info!("Wrote {} rows to {:?}.", table.len(), path);
    Ok(())
}

/// Renders `table` as a text grid, including the index column.
pub fn render_table(table: &Table) -> String {
    let mut rendered = prettytable::Table::new();
    rendered.set_format(*prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

    rendered.set_titles(prettytable::Row::new(
        std::iter::once(prettytable::Cell::new(""))
            .chain(table.columns().iter().map(|label| prettytable::Cell::new(label)))
            .collect(),
    ));

    for record in table.records() {
        rendered.add_row(prettytable::Row::new(
            std::iter::once(prettytable::Cell::new(&record.index.to_string()).style_spec("r"))
                .chain(record.fields.iter().map(|field| prettytable::Cell::new(field)))
                .collect(),
        ));
    }

    rendered.to_string()
}
