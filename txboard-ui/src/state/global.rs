//! Global Application State
//!
//! Reactive state management using Leptos signals. The dashboard controller
//! from the core crate writes into these signals through [`SignalView`].

use leptos::*;
use txboard::loader::DataSource;
use txboard::view::{ChartSink, ChartSpec, NoticeSink, TableRow, TableSink};
use txboard::{filter, present, Dashboard};

use crate::api::GlooSource;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Signals the dashboard renders into
    pub view: SignalView,
    /// Dashboard controller holding the loaded dataset
    pub dashboard: StoredValue<Dashboard<SignalView>>,
    /// Raw value of the customer name input
    pub name_filter: RwSignal<String>,
    /// Raw value of the maximum amount input
    pub amount_filter: RwSignal<String>,
    /// Load in progress
    pub loading: RwSignal<bool>,
    /// When the current dataset was loaded (ms since epoch)
    pub loaded_at: RwSignal<Option<i64>>,
}

/// Signal-backed implementation of the dashboard's view sinks
#[derive(Clone, Copy)]
pub struct SignalView {
    /// Rendered table rows
    pub rows: RwSignal<Vec<TableRow>>,
    /// Current chart description
    pub chart: RwSignal<Option<ChartSpec>>,
    /// Error banners, oldest first
    pub notices: RwSignal<Vec<String>>,
}

impl SignalView {
    fn new() -> Self {
        Self {
            rows: create_rw_signal(Vec::new()),
            chart: create_rw_signal(None),
            notices: create_rw_signal(Vec::new()),
        }
    }
}

impl TableSink for SignalView {
    fn clear(&mut self) {
        self.rows.update(Vec::clear);
    }

    fn insert_row(&mut self, row: TableRow) {
        self.rows.update(|rows| rows.push(row));
    }

    fn replace_rows(&mut self, rows: Vec<TableRow>) {
        self.rows.set(rows);
    }
}

impl ChartSink for SignalView {
    fn plot(&mut self, spec: &ChartSpec) {
        self.chart.set(Some(spec.clone()));
    }
}

impl NoticeSink for SignalView {
    fn append(&mut self, message: &str) {
        let message = message.to_string();
        self.notices.update(|notices| notices.push(message));
    }
}

impl GlobalState {
    /// Fresh state with nothing loaded
    pub fn new() -> Self {
        let view = SignalView::new();
        Self {
            view,
            dashboard: store_value(Dashboard::new(view)),
            name_filter: create_rw_signal(String::new()),
            amount_filter: create_rw_signal(String::new()),
            loading: create_rw_signal(false),
            loaded_at: create_rw_signal(None),
        }
    }

    /// Fetch the dataset from the configured endpoint in the background
    pub fn load(self) {
        spawn_local(async move {
            self.load_from(&GlooSource::from_storage()).await;
        });
    }

    /// Fetch the dataset and present it, replacing any previous one
    ///
    /// Filter inputs are not re-applied: a fresh load shows everything,
    /// and the next keystroke filters again.
    pub async fn load_from<S: DataSource + ?Sized>(self, source: &S) {
        self.loading.set(true);

        let mut dashboard = Dashboard::new(self.view);
        dashboard.start(source).await;
        self.dashboard.set_value(dashboard);

        self.loaded_at.set(Some(chrono::Utc::now().timestamp_millis()));
        self.loading.set(false);
    }

    /// Re-derive the visible rows and chart from the current filter inputs
    pub fn refilter(self) {
        let name = self.name_filter.get_untracked();
        let amount = self.amount_filter.get_untracked();

        // Presenting writes signals whose effects read the dashboard again,
        // so it must happen after the borrow is released.
        let (customers, matched) = self.dashboard.with_value(|dashboard| {
            let dataset = dashboard.dataset();
            let customers = dataset.map(|d| d.customers.clone()).unwrap_or_default();
            (customers, filter(&name, &amount, dataset))
        });

        let mut view = self.view;
        batch(|| present(&mut view, &customers, &matched));
    }

    /// Number of rows currently shown
    pub fn shown(&self) -> usize {
        self.view.rows.with(Vec::len)
    }

    /// Total transactions in the loaded dataset
    pub fn total(&self) -> usize {
        self.dashboard
            .with_value(|d| d.dataset().map(|ds| ds.transactions.len()).unwrap_or(0))
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::rc::Rc;
    use txboard::loader::{LoadError, LoadResult};
    use txboard::{fallback_dataset, FALLBACK_NOTICE};

    struct FailingSource;

    #[async_trait(?Send)]
    impl DataSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        async fn fetch(&self) -> LoadResult<String> {
            Err(LoadError::Status { status: 500 })
        }
    }

    fn loaded_state() -> GlobalState {
        let state = GlobalState::new();
        state
            .dashboard
            .set_value(Dashboard::with_dataset(state.view, fallback_dataset()));
        state
    }

    fn chart_dates(state: &GlobalState) -> Vec<String> {
        state.view.chart.with_untracked(|chart| {
            chart
                .as_ref()
                .and_then(ChartSpec::series)
                .map(|s| s.x.clone())
                .unwrap_or_default()
        })
    }

    #[test]
    fn test_refilter_with_header_effect_reading_dashboard() {
        let runtime = create_runtime();
        let state = loaded_state();

        // Same reads as the page header
        let headers = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&headers);
        create_render_effect(move |_| {
            state.loaded_at.track();
            seen.borrow_mut()
                .push(format!("{} of {}", state.shown(), state.total()));
        });

        state.name_filter.set("aya".to_string());
        state.refilter();

        assert_eq!(headers.borrow().last().map(String::as_str), Some("2 of 9"));
        let customers: Vec<String> = state
            .view
            .rows
            .get_untracked()
            .into_iter()
            .map(|row| row.customer)
            .collect();
        assert_eq!(customers, vec!["Aya Elsayed", "Aya Elsayed"]);
        assert_eq!(chart_dates(&state), vec!["2022-01-01", "2022-01-02"]);

        runtime.dispose();
    }

    #[test]
    fn test_refilter_publishes_rows_once() {
        let runtime = create_runtime();
        let state = loaded_state();

        let runs = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&runs);
        create_render_effect(move |_| {
            state.view.rows.track();
            *counter.borrow_mut() += 1;
        });
        assert_eq!(*runs.borrow(), 1);

        state.amount_filter.set("1000".to_string());
        state.refilter();

        assert_eq!(*runs.borrow(), 2);
        assert_eq!(state.shown(), 5);

        runtime.dispose();
    }

    #[test]
    fn test_refilter_before_load_shows_nothing() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        state.name_filter.set("aya".to_string());
        state.refilter();

        assert_eq!(state.shown(), 0);
        assert_eq!(state.total(), 0);
        assert_eq!(chart_dates(&state), Vec::<String>::new());

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_failed_load_shows_banner_and_fallback() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        state.load_from(&FailingSource).await;

        assert_eq!(
            state.view.notices.get_untracked(),
            vec![FALLBACK_NOTICE.to_string()]
        );
        assert_eq!(state.shown(), 9);
        assert_eq!(state.total(), 9);
        assert!(state.loaded_at.get_untracked().is_some());
        assert!(!state.loading.get_untracked());

        // A second failure stacks a second banner
        state.load_from(&FailingSource).await;
        assert_eq!(state.view.notices.with_untracked(Vec::len), 2);

        runtime.dispose();
    }
}
