//! Built-in dataset shown when the endpoint cannot be used

use super::types::{Customer, Dataset, Transaction};

/// The fixed stand-in dataset: 5 customers, 9 transactions over two days
pub fn fallback_dataset() -> Dataset {
    let customers = vec![
        Customer::new(1, "Ahmed Ali"),
        Customer::new(2, "Aya Elsayed"),
        Customer::new(3, "Mina Adel"),
        Customer::new(4, "Sarah Reda"),
        Customer::new(5, "Mohamed Sayed"),
    ];

    let transactions = vec![
        Transaction::new(1, 1, "2022-01-01", 1000.0),
        Transaction::new(2, 1, "2022-01-02", 2000.0),
        Transaction::new(3, 2, "2022-01-01", 550.0),
        Transaction::new(4, 3, "2022-01-01", 500.0),
        Transaction::new(5, 2, "2022-01-02", 1300.0),
        Transaction::new(6, 4, "2022-01-01", 750.0),
        Transaction::new(7, 3, "2022-01-02", 1250.0),
        Transaction::new(8, 5, "2022-01-01", 2500.0),
        Transaction::new(9, 5, "2022-01-02", 875.0),
    ];

    Dataset::new(customers, transactions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let dataset = fallback_dataset();
        assert_eq!(dataset.customers.len(), 5);
        assert_eq!(dataset.transactions.len(), 9);

        let index = dataset.customer_index();
        assert!(dataset
            .transactions
            .iter()
            .all(|tx| index.get(tx.customer_id).is_some()));
    }
}
