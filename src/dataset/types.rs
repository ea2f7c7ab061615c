//! Core record types for the dashboard
//!
//! This module defines the records the dashboard loads and displays:
//! - `Customer`: a named account holder
//! - `Transaction`: a dated amount charged to a customer
//! - `Dataset`: customers and transactions loaded together as one unit
//! - `CustomerIndex`: id lookup used when joining transactions to customers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label shown for a transaction whose customer is not in the dataset
pub const UNKNOWN_CUSTOMER: &str = "Unknown Customer";

/// A customer record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
}

impl Customer {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A single transaction
///
/// `date` is kept as the string the endpoint sent (`YYYY-MM-DD`); the table
/// and chart display it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub customer_id: i64,
    pub date: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(id: i64, customer_id: i64, date: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            customer_id,
            date: date.into(),
            amount,
        }
    }

    /// Parse the date string, if it is a valid `YYYY-MM-DD` date
    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Customers and transactions, fetched or replaced as one unit
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub transactions: Vec<Transaction>,
}

impl Dataset {
    pub fn new(customers: Vec<Customer>, transactions: Vec<Transaction>) -> Self {
        Self {
            customers,
            transactions,
        }
    }

    /// Build an id index over this dataset's customers
    pub fn customer_index(&self) -> CustomerIndex<'_> {
        CustomerIndex::new(&self.customers)
    }

    /// Earliest and latest parseable transaction dates
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut days = self.transactions.iter().filter_map(Transaction::day);
        let first = days.next()?;
        Some(days.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }
}

/// Customer lookup by id
///
/// On duplicate ids the first customer in input order wins, which keeps
/// lookups identical to a front-to-back scan of the customer list.
#[derive(Debug, Clone, Default)]
pub struct CustomerIndex<'a> {
    by_id: HashMap<i64, &'a Customer>,
}

impl<'a> CustomerIndex<'a> {
    pub fn new(customers: &'a [Customer]) -> Self {
        let mut by_id = HashMap::with_capacity(customers.len());
        for customer in customers {
            by_id.entry(customer.id).or_insert(customer);
        }
        Self { by_id }
    }

    pub fn get(&self, id: i64) -> Option<&'a Customer> {
        self.by_id.get(&id).copied()
    }

    /// Customer name for display, or the unknown-customer label
    pub fn display_name(&self, id: i64) -> &'a str {
        self.get(id)
            .map(|c| c.name.as_str())
            .unwrap_or(UNKNOWN_CUSTOMER)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_deserialize_ignores_extra_fields() {
        let json = r#"{
            "customers": [{"id": 1, "name": "Ahmed Ali", "email": "a@example.com"}],
            "transactions": [{"id": 7, "customer_id": 1, "date": "2022-01-01", "amount": 12.5}],
            "generated_at": "today"
        }"#;

        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.customers, vec![Customer::new(1, "Ahmed Ali")]);
        assert_eq!(
            dataset.transactions,
            vec![Transaction::new(7, 1, "2022-01-01", 12.5)]
        );
    }

    #[test]
    fn test_customer_index_first_match_wins() {
        let customers = vec![
            Customer::new(1, "First"),
            Customer::new(2, "Other"),
            Customer::new(1, "Second"),
        ];
        let index = CustomerIndex::new(&customers);

        assert_eq!(index.len(), 2);
        assert_eq!(index.display_name(1), "First");
        assert_eq!(index.display_name(2), "Other");
    }

    #[test]
    fn test_customer_index_unknown_label() {
        let customers = vec![Customer::new(1, "Ahmed Ali")];
        let index = CustomerIndex::new(&customers);

        assert!(index.get(42).is_none());
        assert_eq!(index.display_name(42), UNKNOWN_CUSTOMER);
    }

    #[test]
    fn test_transaction_day() {
        let tx = Transaction::new(1, 1, "2022-01-02", 5.0);
        assert_eq!(tx.day(), NaiveDate::from_ymd_opt(2022, 1, 2));

        let bad = Transaction::new(2, 1, "yesterday", 5.0);
        assert!(bad.day().is_none());
    }

    #[test]
    fn test_date_span() {
        let dataset = Dataset::new(
            vec![],
            vec![
                Transaction::new(1, 1, "2022-01-03", 1.0),
                Transaction::new(2, 1, "not a date", 1.0),
                Transaction::new(3, 1, "2022-01-01", 1.0),
            ],
        );

        let (lo, hi) = dataset.date_span().unwrap();
        assert_eq!(lo, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        assert_eq!(hi, NaiveDate::from_ymd_opt(2022, 1, 3).unwrap());
        assert!(Dataset::default().date_span().is_none());
    }
}
