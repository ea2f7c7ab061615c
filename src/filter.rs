//! Filter Engine
//!
//! Derives the visible transaction list from the loaded dataset and the two
//! raw filter inputs (customer name, maximum amount). Filtering never mutates
//! the dataset.

use crate::dataset::{CustomerIndex, Dataset, Transaction};

/// Parsed filter inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    /// Lowercased, trimmed name fragment; `None` when blank
    pub name: Option<String>,
    /// Inclusive upper bound on `amount`; `None` when absent or not positive
    pub amount_ceiling: Option<f64>,
}

impl FilterQuery {
    /// Interpret raw input values
    ///
    /// A blank name means no name filter. The amount is read like a typed
    /// number field: the longest numeric prefix counts, and anything that is
    /// not a positive number means no ceiling.
    pub fn from_inputs(raw_name: &str, raw_amount: &str) -> Self {
        let name = raw_name.trim().to_lowercase();
        let amount_ceiling = parse_number_prefix(raw_amount).filter(|n| *n > 0.0);

        Self {
            name: (!name.is_empty()).then_some(name),
            amount_ceiling,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.amount_ceiling.is_none()
    }

    fn matches(&self, tx: &Transaction, customers: &CustomerIndex<'_>) -> bool {
        if let Some(name) = &self.name {
            let customer_name = customers
                .get(tx.customer_id)
                .map(|c| c.name.to_lowercase())
                .unwrap_or_default();
            if !customer_name.contains(name.as_str()) {
                return false;
            }
        }

        match self.amount_ceiling {
            Some(ceiling) => tx.amount <= ceiling,
            None => true,
        }
    }
}

/// Transactions matching both filters, in dataset order
pub fn filter_transactions(query: &FilterQuery, dataset: &Dataset) -> Vec<Transaction> {
    if query.is_empty() {
        return dataset.transactions.clone();
    }

    let customers = dataset.customer_index();
    dataset
        .transactions
        .iter()
        .filter(|tx| query.matches(tx, &customers))
        .cloned()
        .collect()
}

/// Apply raw filter inputs to a dataset that may not be loaded yet
///
/// With no dataset there is nothing to show, so the result is empty.
pub fn filter(raw_name: &str, raw_amount: &str, dataset: Option<&Dataset>) -> Vec<Transaction> {
    let Some(dataset) = dataset else {
        return Vec::new();
    };

    let query = FilterQuery::from_inputs(raw_name, raw_amount);
    let matched = filter_transactions(&query, dataset);
    tracing::debug!(
        ?query,
        matched = matched.len(),
        total = dataset.transactions.len(),
        "Applied filters"
    );
    matched
}

/// Parse the longest leading decimal number in `input`
///
/// Leading whitespace is skipped; an optional sign, digits with an optional
/// fraction, and an optional exponent are accepted. `"12abc"` gives 12,
/// `".5"` gives 0.5, `"abc"` gives `None`.
pub fn parse_number_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].parse().ok();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
