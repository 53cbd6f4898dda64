use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use extraction::{
    CodebookLayout, ExtractEvent, ExtractEvents, Extractor, Locations, TabulaExtractionMethod,
    layout::{DEFAULT_INPUT_FILENAME, DEFAULT_OUTPUT_FILENAME},
    output::render_table,
    pdf::tabulareader::TabulaTableReader,
};

use super::tabulaargs::{TabulaArgs, parse_method};

/// Extracts the county code correspondence table from the codebook PDF into a CSV file.
#[derive(Args, Debug)]
pub struct Command {
    /// Directory containing the codebook. Input and output paths are relative to it.
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Path to the codebook PDF.
    #[arg(long, default_value = DEFAULT_INPUT_FILENAME)]
    input: PathBuf,

    /// Path to write the CSV file to. Any existing file is replaced.
    #[arg(long, default_value = DEFAULT_OUTPUT_FILENAME)]
    output: PathBuf,

    /// YAML file describing where the table is and which columns to keep. Defaults to the layout
    /// of the ICPSR 8611 codebook.
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Overrides the page number in the layout.
    #[arg(long)]
    page: Option<i32>,

    /// Overrides the Tabula extraction method in the layout.
    #[arg(long, value_parser = parse_method)]
    method: Option<TabulaExtractionMethod>,

    /// Do not print the extracted table.
    #[arg(long)]
    quiet: bool,

    #[command(flatten)]
    tabula: TabulaArgs,
}

impl Command {
    fn layout(&self) -> Result<CodebookLayout> {
        let mut layout = match &self.layout {
            Some(path) => CodebookLayout::load_yaml(path)?,
            None => CodebookLayout::default(),
        };
        if let Some(page) = self.page {
            layout.page = page;
        }
        if let Some(method) = self.method {
            layout.method = method;
        }
        Ok(layout)
    }

    fn locations(&self) -> Locations {
        Locations {
            data_dir: self.dir.clone(),
            input: self.input.clone(),
            output: self.output.clone(),
        }
    }
}

/// Runs the subcommand.
pub fn run(cmd: &Command) -> Result<()> {
    let layout = cmd.layout()?;

    let vm = cmd.tabula.start_vm()?;
    let env = vm.attach().context("attaching to Tabula JVM")?;
    let table_reader = TabulaTableReader::new(env);

    let extractor = Extractor::new(&layout, &table_reader)?;
    let mut events = EventDisplayer { quiet: cmd.quiet };
    extractor.extract(&cmd.locations(), &mut events)?;

    Ok(())
}

struct EventDisplayer {
    quiet: bool,
}

impl ExtractEvents for EventDisplayer {
    fn on_event(&mut self, event: ExtractEvent) {
        match event {
            ExtractEvent::Cleaned { table } => {
                if !self.quiet {
                    print!("{}", render_table(table));
                }
            }
            ExtractEvent::Written { path, rows } => {
                eprintln!("Wrote {rows} rows to {path:?}.");
            }
        }
    }
}
