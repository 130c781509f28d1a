use crate::error::FieldError;
use crate::transaction::Transaction;

/// Case-insensitive match on a transaction's `type`.
///
/// Comparison is plain lowercase equality. Accents are significant, so
/// `deposito` and `depósito` are different categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    category: String,
    folded: String,
}

impl CategoryFilter {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            folded: category.to_lowercase(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn matches(&self, tx: &Transaction) -> Result<bool, FieldError> {
        let kind = tx.kind()?;

        Ok(kind.to_lowercase() == self.folded)
    }
}
