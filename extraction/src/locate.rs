//! Resolution of input and output files within a data directory.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::{
    error::ExtractError,
    layout::{DEFAULT_INPUT_FILENAME, DEFAULT_OUTPUT_FILENAME},
};

/// Input and output files of an extraction, relative to a shared data directory.
///
/// Paths are joined onto `data_dir` rather than changing the process working directory, so an
/// absolute `input` or `output` replaces the directory entirely.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Locations {
    pub data_dir: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Locations {
    /// Locations of the codebook and the correspondence CSV in `data_dir`.
    pub fn in_dir<P>(data_dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            data_dir: data_dir.into(),
            input: DEFAULT_INPUT_FILENAME.into(),
            output: DEFAULT_OUTPUT_FILENAME.into(),
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.data_dir.join(&self.input)
    }

    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.output)
    }

    /// Returns the path to the input PDF, checking that it is an existing file.
    pub fn locate_source(&self) -> Result<PathBuf> {
        let path = self.input_path();
        if !is_file(&path) {
            return Err(ExtractError::SourceNotFound { path }.into());
        }
        Ok(path)
    }
}

fn is_file(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use googletest::prelude::*;
    use testutils::anyhow_downcasts_to;

    use super::*;

    #[gtest]
    fn test_in_dir_uses_codebook_names() {
        let locations = Locations::in_dir("/data/ICPSR_08611");

        expect_that!(
            locations.input_path(),
            eq(Path::new("/data/ICPSR_08611/08611-0001-Codebook.pdf"))
        );
        expect_that!(
            locations.output_path(),
            eq(Path::new("/data/ICPSR_08611/Correspondences.csv"))
        );
    }

    #[gtest]
    fn test_absolute_input_overrides_dir() {
        let locations = Locations {
            input: "/elsewhere/codebook.pdf".into(),
            ..Locations::in_dir("/data")
        };

        expect_that!(
            locations.input_path(),
            eq(Path::new("/elsewhere/codebook.pdf"))
        );
    }

    #[gtest]
    fn test_locate_source_finds_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join(DEFAULT_INPUT_FILENAME), "%PDF-1.4")?;

        let locations = Locations::in_dir(dir.path());

        expect_that!(
            locations.locate_source(),
            ok(eq(&dir.path().join(DEFAULT_INPUT_FILENAME)))
        );
        Ok(())
    }

    #[gtest]
    fn test_locate_source_rejects_missing_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let locations = Locations::in_dir(dir.path());

        expect_that!(
            locations.locate_source(),
            err(anyhow_downcasts_to::<ExtractError, _>(eq(
                &ExtractError::SourceNotFound {
                    path: dir.path().join(DEFAULT_INPUT_FILENAME),
                }
            )))
        );
        Ok(())
    }

    #[gtest]
    fn test_locate_source_rejects_directory() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::create_dir(dir.path().join(DEFAULT_INPUT_FILENAME))?;
        let locations = Locations::in_dir(dir.path());

        expect_that!(
            locations.locate_source(),
            err(anyhow_downcasts_to::<ExtractError, _>(anything()))
        );
        Ok(())
    }
}
