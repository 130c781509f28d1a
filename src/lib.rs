//! Lazy, category-filtered reports over an in-memory transaction history.
//!
//! ```
//! use ledger_report::{sample_transactions, TransactionReporter};
//!
//! let txs = sample_transactions();
//! let reporter = TransactionReporter::new(&txs);
//!
//! let deposits: Vec<_> = reporter
//!     .generate_report(Some("Deposit"))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(deposits.len(), 2);
//! ```

pub mod category;
pub mod error;
pub mod report;
pub mod transaction;

pub use category::CategoryFilter;
pub use error::{FieldError, ReportError};
pub use report::{write_report, Report, TransactionReporter};
pub use transaction::{sample_transactions, Transaction};
