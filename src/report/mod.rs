pub mod reporter;


pub use reporter::{write_report, Report, TransactionReporter};
