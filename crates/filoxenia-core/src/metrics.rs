//! Period-over-period trend aggregation for dashboard cards.

use serde::Serialize;

/// Display precision for percentage deltas (one decimal place).
const DELTA_PRECISION: f64 = 10.0;

/// Direction of a metric's movement against the prior period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    /// The wire token for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
        }
    }
}

/// A trend-annotated metric value, recomputed on every dashboard refresh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    /// The current-period value.
    pub value: f64,
    /// Signed percentage change against the prior period, rounded to one
    /// decimal place.
    pub delta_percent: f64,
    /// Movement classification.
    pub direction: TrendDirection,
}

/// Computes the signed percentage delta and direction for a metric.
///
/// A zero baseline yields +100% for any non-zero current value and 0% when
/// both periods are zero. A zero delta is classified as `Up`: the check is
/// non-negative by longstanding convention, and dashboards depend on it.
pub fn compute_trend(current: f64, previous: f64) -> Trend {
    let raw_delta = if previous == 0.0 {
        if current == 0.0 {
            0.0
        } else {
            100.0
        }
    } else {
        (current - previous) / previous * 100.0
    };

    let delta_percent = (raw_delta * DELTA_PRECISION).round() / DELTA_PRECISION;
    let direction = if delta_percent >= 0.0 {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    };

    Trend {
        value: current,
        delta_percent,
        direction,
    }
}

/// A named dashboard quantity with its current and prior period totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    /// Card label.
    pub name: String,
    /// Current-period total.
    pub current: f64,
    /// Prior-period total.
    pub previous: f64,
}

impl Metric {
    /// Creates a metric.
    pub fn new(name: impl Into<String>, current: f64, previous: f64) -> Self {
        Self {
            name: name.into(),
            current,
            previous,
        }
    }

    /// The trend for this metric, computed on read.
    pub fn trend(&self) -> Trend {
        compute_trend(self.current, self.previous)
    }
}
