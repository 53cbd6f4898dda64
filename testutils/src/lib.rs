//! Utilities used in tests in multiple crates within the workspace.

use std::{
    fmt::{Debug, Display},
    marker::PhantomData,
    path::Path,
};

use anyhow::{Context, Result};
use googletest::{
    description::Description,
    matcher::{Matcher, MatcherBase, MatcherResult},
};

/// Creates a matcher against an `anyhow::Error` that downcasts to the given
/// type and matches a reference to it against the inner matcher.
///
/// Downcasting also sees error values that were attached with
/// [anyhow::Context::context].
pub fn anyhow_downcasts_to<E, M>(inner: M) -> AnyhowDowncastTo<E, M> {
    AnyhowDowncastTo::<E, M> {
        inner,
        phantom_e: Default::default(),
    }
}

pub struct AnyhowDowncastTo<E, M> {
    inner: M,
    phantom_e: PhantomData<E>,
}

impl<E, M> AnyhowDowncastTo<E, M> {
    fn type_name() -> &'static str {
        std::any::type_name::<E>()
    }
}

impl<E, M> MatcherBase for AnyhowDowncastTo<E, M> {}

impl<'a, E, M> Matcher<&'a anyhow::Error> for AnyhowDowncastTo<E, M>
where
    E: Display + Debug + Send + Sync + 'static,
    M: Matcher<&'a E>,
{
    fn matches(&self, actual: &'a anyhow::Error) -> MatcherResult {
        actual
            .downcast_ref::<E>()
            .map(|v| self.inner.matches(v))
            .unwrap_or(MatcherResult::NoMatch)
    }

    fn explain_match(&self, actual: &'a anyhow::Error) -> Description {
        match actual.downcast_ref::<E>() {
            Some(e) => Description::new()
                .text(format!(
                    "which is of the expected concrete error type {}",
                    Self::type_name()
                ))
                .text("with value")
                .nested(self.inner.explain_match(e)),
            None => Description::new().text(format!(
                "which is not the expected concrete error type {}, but is: {actual:#}",
                Self::type_name()
            )),
        }
    }

    fn describe(&self, matcher_result: MatcherResult) -> Description {
        match matcher_result {
            MatcherResult::Match => format!(
                "is of concrete error type {} with value which {}",
                Self::type_name(),
                self.inner.describe(MatcherResult::Match)
            )
            .into(),
            MatcherResult::NoMatch => format!(
                "is not a concrete error type {} with value which {}",
                Self::type_name(),
                self.inner.describe(MatcherResult::Match)
            )
            .into(),
        }
    }
}

/// Reads every record of a CSV file, including its header line, as plain strings.
pub fn read_csv_records(path: &Path) -> Result<Vec<Vec<String>>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {path:?} to read CSV"))?
        .records()
        .map(|str_record_result| {
            str_record_result.map(|str_record| {
                str_record
                    .iter()
                    .map(str::to_string)
                    .collect::<Vec<String>>()
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("reading CSV records from {path:?}"))
}

/// Converts a slice of static string rows into owned rows, for comparing against
/// [read_csv_records] output.
pub fn owned_records(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|&row| row.iter().map(|&field| field.to_owned()).collect())
        .collect()
}
