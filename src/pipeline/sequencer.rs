use itertools::Itertools;

use crate::config::TREND;
use crate::domain::WeighInRecord;
use crate::pipeline::SeriesWarning;
use crate::utils::days_between;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SequencedRecords {
    pub records: Vec<WeighInRecord>,
    pub warnings: Vec<SeriesWarning>,
}

/// Sorts records chronologically and flags duplicate or gapped dates.
///
/// The sort is stable: records sharing a date keep their input order.
pub fn sequence(mut records: Vec<WeighInRecord>) -> SequencedRecords {
    records.sort_by_key(|record| record.date);
    let warnings = collect_warnings(&records);
    log::debug!(
        "Sequenced {} records with {} warnings",
        records.len(),
        warnings.len()
    );
    SequencedRecords { records, warnings }
}

/// Scans adjacent pairs of an already sorted slice, in order. No deduplication of repeats.
pub fn collect_warnings(sorted: &[WeighInRecord]) -> Vec<SeriesWarning> {
    sorted
        .iter()
        .tuple_windows()
        .filter_map(|(prev, curr)| {
            if prev.date == curr.date {
                Some(SeriesWarning::DuplicateDate { date: curr.date })
            } else if days_between(prev.date, curr.date) > TREND.gap_threshold_days {
                Some(SeriesWarning::DateGap {
                    from: prev.date,
                    to: curr.date,
                })
            } else {
                None
            }
        })
        .collect()
}
