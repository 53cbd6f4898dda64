use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use extraction::{
    CodebookLayout, Table, TabulaExtractionMethod,
    output::render_table,
    pdf::{TableReader, tabulareader::TabulaTableReader},
};

use super::tabulaargs::{TabulaArgs, parse_method};

/// Prints every table Tabula finds on a page of a PDF, with the column labels that a layout
/// refers to.
#[derive(Args, Debug)]
pub struct Command {
    /// Path to the PDF.
    pdf: PathBuf,

    /// Page number to read tables from.
    #[arg(long, default_value_t = CodebookLayout::default().page)]
    page: i32,

    /// Tabula extraction method.
    #[arg(long, value_parser = parse_method, default_value = "guess")]
    method: TabulaExtractionMethod,

    #[command(flatten)]
    tabula: TabulaArgs,
}

/// Runs the subcommand.
pub fn run(cmd: &Command) -> Result<()> {
    let vm = cmd.tabula.start_vm()?;
    let env = vm.attach().context("attaching to Tabula JVM")?;
    let table_reader = TabulaTableReader::new(env);

    let tables = table_reader
        .read_page_tables(&cmd.pdf, cmd.page, cmd.method)
        .with_context(|| format!("reading tables from page {} of {:?}", cmd.page, cmd.pdf))?;

    if tables.is_empty() {
        eprintln!("No tables found on page {}.", cmd.page);
        return Ok(());
    }

    for (i, extracted) in tables.into_iter().enumerate() {
        let table = Table::from_grid(extracted.data);
        println!(
            "Table {i} on page {}: {} columns, {} rows.",
            extracted.page,
            table.columns().len(),
            table.len(),
        );
        print!("{}", render_table(&table));
        println!();
    }

    Ok(())
}
