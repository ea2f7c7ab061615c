//! Dashboard controller
//!
//! Owns the loaded dataset and the view, and runs the two flows a front end
//! needs: the one-time load at startup, and re-presenting a filtered subset
//! whenever a filter input changes. Filtering never re-fetches.

use crate::dataset::{Customer, Dataset, Transaction};
use crate::filter;
use crate::loader::{self, DataSource};
use crate::view::{draw_chart, render, DashboardView};

/// Render the table and redraw the chart for `transactions`
pub fn present<V: DashboardView + ?Sized>(
    view: &mut V,
    customers: &[Customer],
    transactions: &[Transaction],
) {
    render(view, customers, transactions);
    draw_chart(view, transactions);
}

/// Dataset state plus the view it is presented on
pub struct Dashboard<V> {
    dataset: Option<Dataset>,
    view: V,
}

impl<V: DashboardView> Dashboard<V> {
    /// A dashboard with nothing loaded yet
    pub fn new(view: V) -> Self {
        Self {
            dataset: None,
            view,
        }
    }

    /// A dashboard with an already loaded dataset
    pub fn with_dataset(view: V, dataset: Dataset) -> Self {
        Self {
            dataset: Some(dataset),
            view,
        }
    }

    /// Load from `source` (falling back on failure) and present everything
    pub async fn start<S: DataSource + ?Sized>(&mut self, source: &S) {
        let dataset = loader::load(source, &mut self.view).await;
        present(&mut self.view, &dataset.customers, &dataset.transactions);
        self.dataset = Some(dataset);
    }

    /// Present the subset matching the raw filter inputs
    ///
    /// Returns the number of transactions shown. Before a dataset is loaded
    /// this shows an empty table and chart.
    pub fn apply_filter(&mut self, raw_name: &str, raw_amount: &str) -> usize {
        let matched = filter::filter(raw_name, raw_amount, self.dataset.as_ref());
        let customers = self
            .dataset
            .as_ref()
            .map(|d| d.customers.as_slice())
            .unwrap_or(&[]);
        present(&mut self.view, customers, &matched);
        matched.len()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fallback_dataset;
    use crate::loader::testing::StaticSource;
    use crate::loader::LoadError;
    use crate::view::{BufferedView, ChartSpec, FALLBACK_NOTICE};

    fn chart_dates(view: &BufferedView) -> Vec<String> {
        view.chart
            .spec()
            .and_then(ChartSpec::series)
            .map(|s| s.x.clone())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_start_presents_full_dataset() {
        let body = serde_json::to_string(&fallback_dataset()).unwrap();
        let mut dashboard = Dashboard::new(BufferedView::new());

        dashboard.start(&StaticSource::Body(body)).await;

        let view = dashboard.view();
        assert_eq!(view.table.len(), 9);
        assert_eq!(chart_dates(view), vec!["2022-01-01", "2022-01-02"]);
        assert!(view.notices.is_empty());
        assert!(dashboard.is_loaded());
    }

    #[tokio::test]
    async fn test_start_failure_shows_fallback_and_one_notice() {
        let mut dashboard = Dashboard::new(BufferedView::new());

        dashboard
            .start(&StaticSource::Fails(|| LoadError::Status { status: 502 }))
            .await;

        assert_eq!(dashboard.dataset(), Some(&fallback_dataset()));
        assert_eq!(dashboard.view().table.len(), 9);
        assert_eq!(dashboard.view().notices.messages(), &[FALLBACK_NOTICE.to_string()]);
    }

    #[tokio::test]
    async fn test_repeated_failures_stack_notices() {
        let mut dashboard = Dashboard::new(BufferedView::new());
        let source = StaticSource::Fails(|| LoadError::Timeout);

        dashboard.start(&source).await;
        dashboard.start(&source).await;

        assert_eq!(dashboard.view().notices.len(), 2);
        assert_eq!(dashboard.view().table.len(), 9);
    }

    #[test]
    fn test_apply_filter_redraws_table_and_chart() {
        let mut dashboard = Dashboard::with_dataset(BufferedView::new(), fallback_dataset());

        let shown = dashboard.apply_filter("aya", "");
        assert_eq!(shown, 2);

        let view = dashboard.view();
        let names: Vec<&str> = view.table.rows().iter().map(|r| r.customer.as_str()).collect();
        assert_eq!(names, vec!["Aya Elsayed", "Aya Elsayed"]);
        let series = view.chart.spec().and_then(ChartSpec::series).unwrap();
        assert_eq!(series.x, vec!["2022-01-01", "2022-01-02"]);
        assert_eq!(series.y, vec![550.0, 1300.0]);
    }

    #[test]
    fn test_clearing_filters_restores_everything() {
        let mut dashboard = Dashboard::with_dataset(BufferedView::new(), fallback_dataset());

        dashboard.apply_filter("mohamed", "900");
        assert_eq!(dashboard.view().table.len(), 1);

        assert_eq!(dashboard.apply_filter("", ""), 9);
        assert_eq!(dashboard.view().table.len(), 9);
        assert_eq!(dashboard.dataset(), Some(&fallback_dataset()));
    }

    #[test]
    fn test_filter_before_load_is_harmless() {
        let mut dashboard = Dashboard::new(BufferedView::new());

        assert_eq!(dashboard.apply_filter("aya", "100"), 0);

        let view = dashboard.into_view();
        assert!(view.table.is_empty());
        assert_eq!(view.chart.draws(), 1);
        assert!(view.chart.spec().unwrap().is_empty());
        assert!(view.notices.is_empty());
    }
}
