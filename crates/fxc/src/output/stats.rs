//! Dashboard card output formatting.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use serde::Serialize;

use filoxenia_core::metrics::{Metric, Trend, TrendDirection};

/// JSON output structure for one dashboard card.
#[derive(Serialize)]
struct CardOutput<'a> {
    name: &'a str,
    #[serde(flatten)]
    trend: Trend,
}

/// JSON output structure for the stats command.
#[derive(Serialize)]
struct StatsOutput<'a> {
    cards: Vec<CardOutput<'a>>,
}

/// Formats the dashboard cards as pretty-printed JSON.
pub fn format_stats_json(metrics: &[Metric]) -> serde_json::Result<String> {
    let cards = metrics
        .iter()
        .map(|metric| CardOutput {
            name: &metric.name,
            trend: metric.trend(),
        })
        .collect();
    serde_json::to_string_pretty(&StatsOutput { cards })
}

/// Formats the dashboard cards as an aligned table.
pub fn format_stats_table(
    metrics: &[Metric],
    from: NaiveDate,
    to: NaiveDate,
    use_colors: bool,
) -> String {
    let mut output = String::new();

    let title = format!(
        "Περίοδος {} - {}",
        from.format("%d/%m/%Y"),
        to.format("%d/%m/%Y")
    );
    if use_colors {
        output.push_str(&format!("{}\n", title.dimmed()));
    } else {
        output.push_str(&title);
        output.push('\n');
    }

    for metric in metrics {
        let trend = metric.trend();
        let line = format!(
            "{:<18} {:>10}   {}",
            metric.name,
            format_value(trend.value),
            format_delta(&trend, use_colors),
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Renders a card value without a trailing ".0" for whole numbers.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// Renders the delta with its arrow, colored by direction.
fn format_delta(trend: &Trend, use_colors: bool) -> String {
    let (arrow, delta) = match trend.direction {
        TrendDirection::Up => ('▲', trend.delta_percent),
        TrendDirection::Down => ('▼', trend.delta_percent),
    };
    let text = format!("{arrow} {delta:+.1}%");

    if !use_colors {
        return text;
    }
    match trend.direction {
        TrendDirection::Up => text.green().to_string(),
        TrendDirection::Down => text.red().to_string(),
    }
}
