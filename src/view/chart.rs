//! Daily totals chart
//!
//! Groups transactions by date, sums each group, and describes the result as
//! a single filled line series. The description serializes to the
//! `{ data, layout }` shape Plotly's `newPlot` accepts.

use serde::Serialize;
use std::collections::HashMap;

use crate::dataset::Transaction;

/// Series color
pub const SERIES_COLOR: &str = "rgb(75, 192, 192)";
/// Chart title
pub const CHART_TITLE: &str = "Total Transaction Amount";
pub const X_AXIS_TITLE: &str = "Date";
pub const Y_AXIS_TITLE: &str = "Amount";

/// Summed amounts per date, dates in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyTotals {
    pub dates: Vec<String>,
    pub totals: Vec<f64>,
}

impl DailyTotals {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// `(date, total)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.dates
            .iter()
            .map(String::as_str)
            .zip(self.totals.iter().copied())
    }

    /// Sum over all dates
    pub fn grand_total(&self) -> f64 {
        self.totals.iter().sum()
    }
}

/// Group by date and sum amounts
///
/// Dates keep the order in which they first appear; dates without
/// transactions are simply absent.
pub fn aggregate_by_date(transactions: &[Transaction]) -> DailyTotals {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut totals = DailyTotals::default();

    for tx in transactions {
        match slots.get(tx.date.as_str()) {
            Some(&slot) => totals.totals[slot] += tx.amount,
            None => {
                slots.insert(tx.date.as_str(), totals.dates.len());
                totals.dates.push(tx.date.clone());
                totals.totals.push(tx.amount);
            }
        }
    }

    totals
}

/// A single plotted series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub mode: String,
    pub line: LineStyle,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

/// Declarative chart description handed to a [`ChartSink`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Series>,
    pub layout: Layout,
}

impl ChartSpec {
    /// Area chart of date vs. total
    pub fn daily_totals(totals: DailyTotals) -> Self {
        Self {
            data: vec![Series {
                x: totals.dates,
                y: totals.totals,
                kind: "scatter".to_string(),
                mode: "lines+markers".to_string(),
                line: LineStyle {
                    color: SERIES_COLOR.to_string(),
                },
                fill: "tozeroy".to_string(),
            }],
            layout: Layout {
                title: CHART_TITLE.to_string(),
                xaxis: Axis {
                    title: X_AXIS_TITLE.to_string(),
                },
                yaxis: Axis {
                    title: Y_AXIS_TITLE.to_string(),
                },
            },
        }
    }

    /// The first (and only) series
    pub fn series(&self) -> Option<&Series> {
        self.data.first()
    }

    pub fn is_empty(&self) -> bool {
        self.series().map(|s| s.x.is_empty()).unwrap_or(true)
    }

    /// The plotted points back as per-date totals
    pub fn totals(&self) -> DailyTotals {
        self.series()
            .map(|s| DailyTotals {
                dates: s.x.clone(),
                totals: s.y.clone(),
            })
            .unwrap_or_default()
    }
}

/// Charting collaborator: draws whatever it is handed, replacing the previous chart
pub trait ChartSink {
    fn plot(&mut self, spec: &ChartSpec);
}

/// Aggregate `transactions` and hand one chart description to the sink
pub fn draw_chart<S: ChartSink + ?Sized>(sink: &mut S, transactions: &[Transaction]) {
    let spec = ChartSpec::daily_totals(aggregate_by_date(transactions));
    sink.plot(&spec);
}

/// Keeps the most recent chart
#[derive(Debug, Clone, Default)]
pub struct LastChart {
    spec: Option<ChartSpec>,
    draws: usize,
}

impl LastChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spec(&self) -> Option<&ChartSpec> {
        self.spec.as_ref()
    }

    /// Number of redraws so far
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl ChartSink for LastChart {
    fn plot(&mut self, spec: &ChartSpec) {
        self.spec = Some(spec.clone());
        self.draws += 1;
    }
}
