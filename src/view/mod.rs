//! Presentation contracts
//!
//! The core never touches a UI toolkit. Front ends implement three sinks:
//!
//! - [`TableSink`]: clear the table and insert rows
//! - [`ChartSink`]: receive a declarative chart description
//! - [`NoticeSink`]: append a visible error notice
//!
//! In-memory implementations ([`RowBuffer`], [`LastChart`], [`NoticeBoard`])
//! back the terminal front end and the tests.

pub mod chart;
pub mod notice;
pub mod table;

pub use chart::{
    aggregate_by_date, draw_chart, ChartSink, ChartSpec, DailyTotals, LastChart, Series,
};
pub use notice::{show_error, NoticeBoard, NoticeSink, FALLBACK_NOTICE};
pub use table::{format_amount, render, table_rows, RowBuffer, TableRow, TableSink};

/// Everything a dashboard front end has to provide
pub trait DashboardView: TableSink + ChartSink + NoticeSink {}

impl<T: TableSink + ChartSink + NoticeSink + ?Sized> DashboardView for T {}

/// In-memory view made of the three buffer sinks
#[derive(Debug, Clone, Default)]
pub struct BufferedView {
    pub table: RowBuffer,
    pub chart: LastChart,
    pub notices: NoticeBoard,
}

impl BufferedView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TableSink for BufferedView {
    fn clear(&mut self) {
        self.table.clear();
    }

    fn insert_row(&mut self, row: TableRow) {
        self.table.insert_row(row);
    }
}

impl ChartSink for BufferedView {
    fn plot(&mut self, spec: &ChartSpec) {
        self.chart.plot(spec);
    }
}

impl NoticeSink for BufferedView {
    fn append(&mut self, message: &str) {
        self.notices.append(message);
    }
}
