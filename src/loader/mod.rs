//! Data Loader
//!
//! Fetches the dataset once from a [`DataSource`]. Loading never fails from
//! the caller's point of view: any error is logged, surfaced as a notice, and
//! replaced by the built-in fallback dataset.
//!
//! Sources only deliver the raw body; decoding and validation happen here so
//! that every source is held to the same rules:
//!
//! - the body must be JSON
//! - `customers` and `transactions` must both be present and non-null
//! - every record must have the expected field types
//!
//! Failure in any of these replaces the whole dataset; live and fallback
//! records are never merged.

mod error;
#[cfg(feature = "native")]
mod file;
#[cfg(feature = "native")]
mod http;

pub use error::{LoadError, LoadResult};
#[cfg(feature = "native")]
pub use file::FileSource;
#[cfg(feature = "native")]
pub use http::{HttpSource, HttpSourceConfig};

use async_trait::async_trait;

use crate::dataset::{fallback_dataset, Dataset};
use crate::view::{show_error, NoticeSink, FALLBACK_NOTICE};

/// Default data endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/api/data";

/// Where the raw dataset body comes from
///
/// Futures are not required to be `Send`: loading happens on a single
/// cooperative thread (browser event loop or the CLI's main task).
#[async_trait(?Send)]
pub trait DataSource {
    /// Human-readable location, for logs
    fn describe(&self) -> String;

    /// Fetch the raw body
    async fn fetch(&self) -> LoadResult<String>;
}

/// Decode and validate a response body
pub fn parse_dataset(body: &str) -> LoadResult<Dataset> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    for field in ["customers", "transactions"] {
        if value.get(field).map_or(true, serde_json::Value::is_null) {
            return Err(LoadError::MissingField(field));
        }
    }

    Ok(serde_json::from_value(value)?)
}

/// Fetch and decode without falling back
pub async fn try_load<S: DataSource + ?Sized>(source: &S) -> LoadResult<Dataset> {
    let body = source.fetch().await?;
    parse_dataset(&body)
}

/// Load the dataset, falling back to the built-in one on any failure
///
/// On failure exactly one notice is appended to `notices`.
pub async fn load<S, N>(source: &S, notices: &mut N) -> Dataset
where
    S: DataSource + ?Sized,
    N: NoticeSink + ?Sized,
{
    match try_load(source).await {
        Ok(dataset) => {
            tracing::info!(
                source = %source.describe(),
                customers = dataset.customers.len(),
                transactions = dataset.transactions.len(),
                "Loaded dataset"
            );
            dataset
        }
        Err(e) => {
            tracing::error!(source = %source.describe(), error = %e, "Fetch error, using fallback data");
            show_error(notices, FALLBACK_NOTICE);
            fallback_dataset()
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::StaticSource;
    use super::*;
    use crate::dataset::{Customer, Transaction};
    use crate::view::NoticeBoard;

    const LIVE_BODY: &str = r#"{
        "customers": [{"id": 10, "name": "Live Customer"}],
        "transactions": [{"id": 100, "customer_id": 10, "date": "2023-05-01", "amount": 42}]
    }"#;

    #[test]
    fn test_parse_valid_body() {
        let dataset = parse_dataset(LIVE_BODY).unwrap();
        assert_eq!(dataset.customers, vec![Customer::new(10, "Live Customer")]);
        assert_eq!(
            dataset.transactions,
            vec![Transaction::new(100, 10, "2023-05-01", 42.0)]
        );
    }

    #[test]
    fn test_parse_empty_arrays_pass() {
        let dataset = parse_dataset(r#"{"customers": [], "transactions": []}"#).unwrap();
        assert!(dataset.customers.is_empty());
        assert!(dataset.transactions.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_or_null_fields() {
        assert!(matches!(
            parse_dataset(r#"{"customers": []}"#),
            Err(LoadError::MissingField("transactions"))
        ));
        assert!(matches!(
            parse_dataset(r#"{"transactions": []}"#),
            Err(LoadError::MissingField("customers"))
        ));
        assert!(matches!(
            parse_dataset(r#"{"customers": null, "transactions": []}"#),
            Err(LoadError::MissingField("customers"))
        ));
        assert!(matches!(
            parse_dataset("[]"),
            Err(LoadError::MissingField("customers"))
        ));
    }

    #[test]
    fn test_parse_rejects_bad_json_and_bad_records() {
        assert!(matches!(parse_dataset("<html>"), Err(LoadError::InvalidJson(_))));
        assert!(matches!(
            parse_dataset(
                r#"{"customers": [], "transactions": [{"id": 1, "customer_id": 1, "date": "2022-01-01", "amount": "ten"}]}"#
            ),
            Err(LoadError::InvalidJson(_))
        ));
    }

    #[tokio::test]
    async fn test_load_success_has_no_notice() {
        let source = StaticSource::Body(LIVE_BODY.to_string());
        let mut notices = NoticeBoard::new();

        let dataset = load(&source, &mut notices).await;

        assert_eq!(dataset.transactions.len(), 1);
        assert!(notices.is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_falls_back_with_one_notice() {
        let source = StaticSource::Fails(|| LoadError::Status { status: 500 });
        let mut notices = NoticeBoard::new();

        let dataset = load(&source, &mut notices).await;

        assert_eq!(dataset, fallback_dataset());
        assert_eq!(notices.messages(), &[FALLBACK_NOTICE.to_string()]);
    }

    #[tokio::test]
    async fn test_transport_failure_falls_back() {
        let source = StaticSource::Fails(|| LoadError::Transport("connection refused".into()));
        let mut notices = NoticeBoard::new();

        let dataset = load(&source, &mut notices).await;

        assert_eq!(dataset.customers.len(), 5);
        assert_eq!(dataset.transactions.len(), 9);
        assert_eq!(notices.len(), 1);
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn test_failure_logs_the_underlying_error() {
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl std::io::Write for Captured {
            fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(bytes);
                Ok(bytes.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let source = StaticSource::Fails(|| LoadError::Status { status: 503 });
        let mut notices = NoticeBoard::new();
        load(&source, &mut notices).await;

        let logged = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("ERROR"));
        assert!(logged.contains("Endpoint returned HTTP 503"));
        assert_eq!(notices.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_falls_back() {
        let source = StaticSource::Body(r#"{"customers": [{"id": 1, "name": "X"}]}"#.to_string());
        let mut notices = NoticeBoard::new();

        let dataset = load(&source, &mut notices).await;

        assert_eq!(dataset, fallback_dataset());
        assert_eq!(notices.len(), 1);
    }
}
