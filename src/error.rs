use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("missing field `{field}`")]
    Missing { field: &'static str },

    #[error("field `{field}` is not text (found {found})")]
    NotText {
        field: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("transaction {index}: {source}")]
    FieldAccess {
        index: usize,
        #[source]
        source: FieldError,
    },

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
