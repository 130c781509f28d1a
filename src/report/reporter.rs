use crate::category::CategoryFilter;
use crate::error::ReportError;
use crate::transaction::Transaction;

use std::io::Write;
use std::iter::{Enumerate, FusedIterator};
use std::slice;
use tracing::{debug, trace};

/// Produces filtered views over a borrowed transaction history.
///
/// The reporter keeps no cursor: every call to
/// [`generate_report`](Self::generate_report) walks the collection from the
/// start, so one reporter can serve any number of reports.
#[derive(Debug, Clone, Copy)]
pub struct TransactionReporter<'a> {
    transactions: &'a [Transaction],
}

impl<'a> TransactionReporter<'a> {
    pub fn new(transactions: &'a [Transaction]) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &'a [Transaction] {
        self.transactions
    }

    /// Lazily yields the transactions whose `type` matches `category_filter`
    /// case-insensitively, in their original order. `None` yields everything.
    ///
    /// With a filter active, a record whose `type` is missing or not text
    /// yields a [`ReportError::FieldAccess`] at its position and ends the
    /// report.
    pub fn generate_report(&self, category_filter: Option<&str>) -> Report<'a> {
        debug!(
            transactions = self.transactions.len(),
            category = category_filter.unwrap_or("<all>"),
            "Generating report"
        );

        Report {
            records: self.transactions.iter().enumerate(),
            filter: category_filter.map(CategoryFilter::new),
            done: false,
        }
    }
}

/// A single pass over a [`TransactionReporter`]'s collection.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    records: Enumerate<slice::Iter<'a, Transaction>>,
    filter: Option<CategoryFilter>,
    done: bool,
}

impl Report<'_> {
    pub fn category_filter(&self) -> Option<&CategoryFilter> {
        self.filter.as_ref()
    }
}

impl<'a> Iterator for Report<'a> {
    type Item = Result<&'a Transaction, ReportError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(filter) = &self.filter else {
            return self.records.next().map(|(index, tx)| {
                trace!(index, "Yielding transaction");
                Ok(tx)
            });
        };

        for (index, tx) in self.records.by_ref() {
            match filter.matches(tx) {
                Ok(true) => {
                    trace!(index, "Yielding transaction");
                    return Some(Ok(tx));
                }
                Ok(false) => continue,
                Err(source) => {
                    self.done = true;
                    return Some(Err(ReportError::FieldAccess { index, source }));
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }

        let remaining = self.records.len();
        match self.filter {
            None => (remaining, Some(remaining)),
            Some(_) => (0, Some(remaining)),
        }
    }
}

impl FusedIterator for Report<'_> {}

/// Writes every record of `report` to `writer`, one per line, and returns how
/// many were written. Stops at the first error.
pub fn write_report<'a, I, W>(report: I, mut writer: W) -> Result<usize, ReportError>
where
    I: IntoIterator<Item = Result<&'a Transaction, ReportError>>,
    W: Write,
{
    let mut written = 0;

    for tx in report {
        writeln!(&mut writer, "{}", tx?)?;
        written += 1;
    }

    writer.flush()?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::sample_transactions;

    mod generate_report_tests {
        use super::*;

        #[test]
        fn test_unfiltered_yields_everything() {
            let txs = sample_transactions();
            let reporter = TransactionReporter::new(&txs);

            let report: Vec<_> = reporter
                .generate_report(None)
                .collect::<Result<_, _>>()
                .unwrap();

            assert_eq!(report.len(), 4);
            assert!(report.iter().zip(&txs).all(|(a, b)| std::ptr::eq(*a, b)));
        }

        #[test]
        fn test_filtered_yields_matching_records() {
            let txs = sample_transactions();
            let reporter = TransactionReporter::new(&txs);

            let report: Vec<_> = reporter
                .generate_report(Some("deposit"))
                .collect::<Result<_, _>>()
                .unwrap();

            assert_eq!(report, vec![&txs[0], &txs[3]]);
        }

        #[test]
        fn test_empty_collection() {
            let reporter = TransactionReporter::new(&[]);

            assert_eq!(reporter.generate_report(None).count(), 0);
            assert_eq!(reporter.generate_report(Some("deposit")).count(), 0);
        }

        #[test]
        fn test_report_keeps_filter() {
            let txs = sample_transactions();
            let reporter = TransactionReporter::new(&txs);

            let report = reporter.generate_report(Some("Transfer"));

            assert_eq!(report.category_filter().map(|f| f.category()), Some("Transfer"));
            assert!(reporter.generate_report(None).category_filter().is_none());
        }
    }

    mod size_hint_tests {
        use super::*;

        #[test]
        fn test_unfiltered_size_hint_is_exact() {
            let txs = sample_transactions();
            let reporter = TransactionReporter::new(&txs);
            let mut report = reporter.generate_report(None);

            assert_eq!(report.size_hint(), (4, Some(4)));
            report.next();
            assert_eq!(report.size_hint(), (3, Some(3)));
        }

        #[test]
        fn test_filtered_size_hint_is_bounded() {
            let txs = sample_transactions();
            let reporter = TransactionReporter::new(&txs);
            let report = reporter.generate_report(Some("deposit"));

            assert_eq!(report.size_hint(), (0, Some(4)));
        }
    }

    mod write_report_tests {
        use super::*;

        #[test]
        fn test_write_report_one_record_per_line() {
            let txs = sample_transactions();
            let reporter = TransactionReporter::new(&txs);
            let mut out = Vec::new();

            let written = write_report(reporter.generate_report(Some("withdrawal")), &mut out)
                .unwrap();

            assert_eq!(written, 1);
            assert_eq!(
                String::from_utf8(out).unwrap(),
                "{\"type\":\"withdrawal\",\"amount\":200.0,\"timestamp\":\"2023-01-02T14:30:00\"}\n"
            );
        }

        #[test]
        fn test_write_report_empty() {
            let txs = sample_transactions();
            let reporter = TransactionReporter::new(&txs);
            let mut out = Vec::new();

            let written =
                write_report(reporter.generate_report(Some("nonexistent")), &mut out).unwrap();

            assert_eq!(written, 0);
            assert!(out.is_empty());
        }
    }
}
