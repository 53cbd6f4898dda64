use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Args;

use extraction::TabulaExtractionMethod;

const TABULA_JAR_NAME: &str = "tabula.jar";

/// Options relating to running Tabula.
#[derive(Args, Debug)]
pub struct TabulaArgs {
    /// Path to the tabula-java JAR file (with dependencies).
    ///
    /// Defaults to tabula.jar in the same directory as this executable.
    #[arg(long)]
    tabula_libpath: Option<PathBuf>,

    /// Enables verbose JVM output.
    #[arg(long)]
    tabula_debug: bool,
}

impl TabulaArgs {
    /// Starts the JVM hosting Tabula.
    pub fn start_vm(&self) -> Result<tabula::TabulaVM> {
        let libpath = self.resolve_libpath()?;
        log::debug!("Starting Tabula from {libpath:?}.");
        let libpath = libpath
            .to_str()
            .ok_or_else(|| anyhow!("Tabula JAR path {libpath:?} is not valid UTF-8"))?;
        tabula::TabulaVM::new(libpath, self.tabula_debug)
            .with_context(|| format!("starting Tabula JVM with {libpath:?}"))
    }

    fn resolve_libpath(&self) -> Result<PathBuf> {
        if let Some(libpath) = &self.tabula_libpath {
            return Ok(libpath.clone());
        }
        let mut beside_exe = std::env::current_exe().context("locating this executable")?;
        beside_exe.set_file_name(TABULA_JAR_NAME);
        if !beside_exe.is_file() {
            return Err(anyhow!(
                "{TABULA_JAR_NAME} not found at {beside_exe:?}, specify --tabula-libpath"
            ));
        }
        Ok(beside_exe)
    }
}

/// Parses `--method` values.
pub fn parse_method(value: &str) -> Result<TabulaExtractionMethod> {
    value
        .parse()
        .map_err(|_| anyhow!("expected one of guess, lattice or stream, got {value:?}"))
}
