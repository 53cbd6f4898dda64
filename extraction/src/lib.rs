//! Extraction of the ICPSR to FIPS county code correspondence table from the ICPSR 8611
//! codebook PDF.
//!
//! The [Extractor] reads the single table on the codebook page, keeps and renames the code
//! columns, drops the header record that Tabula reads as data, and writes the result as CSV.

pub mod error;
pub mod extractor;
pub mod layout;
pub mod locate;
pub mod output;
pub mod pdf;
pub mod table;
#[cfg(test)]
mod testutil;
pub mod transform;

pub use error::ExtractError;
pub use extractor::{ExtractEvent, ExtractEvents, Extractor, NoEvents};
pub use layout::{CodebookLayout, TabulaExtractionMethod};
pub use locate::Locations;
pub use table::Table;
