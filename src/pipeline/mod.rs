//! The weigh-in transform pipeline: text -> JSON value -> validated records -> sorted records -> candles.
//!
//! Every stage is a pure function. Errors and warnings are accumulated into the result, never raised.

mod aggregator;
mod error;
mod parser;
mod sequencer;
mod validator;

use serde::Serialize;

pub use aggregator::{summarize, to_candles};
pub use error::{ErrorKind, RowDefect, SeriesWarning, TransformError};
pub use parser::parse_document;
pub use sequencer::{SequencedRecords, collect_warnings, sequence};
pub use validator::{ValidatedRecords, validate_document};

use crate::domain::{CandlestickPoint, TrendSummary};
use crate::shared::serde_util::display_seq;

/// Sole output of the pipeline.
///
/// Non-empty `errors` always comes with empty `candles`, the zero summary and no warnings.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TransformResult {
    pub candles: Vec<CandlestickPoint>,
    pub summary: TrendSummary,
    #[serde(serialize_with = "display_seq::serialize")]
    pub errors: Vec<TransformError>,
    #[serde(serialize_with = "display_seq::serialize")]
    pub warnings: Vec<SeriesWarning>,
}

impl TransformResult {
    fn rejected(errors: Vec<TransformError>) -> Self {
        Self {
            candles: Vec::new(),
            summary: TrendSummary::ZERO,
            errors,
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Candles and summary are only meaningful when no error was reported.
    pub fn is_renderable(&self) -> bool {
        !self.has_errors()
    }

    pub fn entry_count(&self) -> usize {
        self.candles.len()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Runs the whole pipeline over one input document.
pub fn transform_weigh_ins(input: &str) -> TransformResult {
    crate::trace_time!("Weigh-in pipeline", {
        run_pipeline(input)
    })
}

fn run_pipeline(input: &str) -> TransformResult {
    let document = match parse_document(input) {
        Ok(document) => document,
        Err(e) => return TransformResult::rejected(vec![e]),
    };

    let validated = match validate_document(&document) {
        Ok(validated) => validated,
        Err(e) => {
            log::warn!("Weigh-in document rejected: {}", e);
            return TransformResult::rejected(vec![e]);
        }
    };

    // Any row defect voids the run; warnings are only computed for clean input.
    if !validated.errors.is_empty() {
        log::info!(
            "Weigh-in input has {} row errors, skipping chart data",
            validated.errors.len()
        );
        return TransformResult::rejected(validated.errors);
    }

    let sequenced = sequence(validated.records);
    let candles = to_candles(&sequenced.records);
    let summary = summarize(&candles);

    log::info!(
        "Transformed {} weigh-ins ({} warnings, trend {})",
        candles.len(),
        sequenced.warnings.len(),
        summary.direction
    );

    TransformResult {
        candles,
        summary,
        errors: Vec::new(),
        warnings: sequenced.warnings,
    }
}
