//! Presentation of a returned analysis report.
//!
//! Stateless derivation from the response shape: the workflow hands a
//! [`AnalysisReport`] over and every section below decides for itself whether
//! it has anything to show.

mod charts;
pub use charts::{DistributionChart, TrendChart};

use dioxus::prelude::*;

use crate::api::{self, AnalysisReport, DashboardMetrics};
use crate::core::format;

/// Anchor the workflow scrolls to when a new report lands.
pub const RESULTS_ANCHOR_ID: &str = "results";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: String,
}

/// The four headline tiles, in display order.
pub fn metric_tiles(metrics: &DashboardMetrics) -> Vec<MetricTile> {
    vec![
        MetricTile {
            label: "Row Count",
            value: format::format_count(metrics.row_count),
        },
        MetricTile {
            label: "Col Count",
            value: format::format_count(metrics.col_count),
        },
        MetricTile {
            label: "Missing Cells",
            value: format::format_count(metrics.missing_cells),
        },
        MetricTile {
            label: "Numeric Cols",
            value: format::format_count(metrics.numeric_col_count),
        },
    ]
}

#[component]
pub fn ReportSections(report: AnalysisReport) -> Element {
    let tiles = report
        .dashboard
        .as_ref()
        .map(|dashboard| metric_tiles(&dashboard.metrics));
    let trend = report
        .dashboard
        .as_ref()
        .map(|dashboard| dashboard.trend.clone())
        .unwrap_or_default();
    let distribution = report
        .dashboard
        .as_ref()
        .and_then(|dashboard| dashboard.distribution.clone());
    let pdf_link = api::pdf_download_url(&report);

    rsx! {
        div { id: RESULTS_ANCHOR_ID }

        if let Some(tiles) = tiles {
            section { class: "report-metrics",
                for tile in tiles.iter() {
                    div { class: "report-metrics__tile",
                        span { class: "report-metrics__label", "{tile.label}" }
                        strong { class: "report-metrics__value", "{tile.value}" }
                    }
                }
            }
        }

        if !report.summary.is_empty() {
            section { class: "report-card report-summary",
                p { class: "report-card__title", "Özet" }
                p { class: "report-summary__text", "{report.summary}" }
                p { class: "report-card__title", "AI Özet" }
                p { class: "report-summary__text", "{report.ai_summary}" }
                if let Some(link) = pdf_link.as_ref() {
                    a {
                        class: "report-summary__download",
                        href: "{link}",
                        target: "_blank",
                        rel: "noreferrer",
                        "PDF indir"
                    }
                }
            }
        }

        if !trend.is_empty() {
            section { class: "report-card report-chart",
                p { class: "report-card__title", "Trend (ilk 50 satır)" }
                TrendChart { points: trend }
            }
        }

        if let Some(slices) = distribution {
            section { class: "report-card report-chart",
                p { class: "report-card__title", "Dağılım (ilk 10 kategori)" }
                DistributionChart { slices }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_follow_the_dashboard_metrics() {
        let metrics = DashboardMetrics {
            row_count: 1200,
            col_count: 5,
            missing_cells: 7,
            numeric_col_count: 3,
        };

        let tiles = metric_tiles(&metrics);
        let rendered: Vec<(&str, &str)> = tiles
            .iter()
            .map(|tile| (tile.label, tile.value.as_str()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("Row Count", "1.200"),
                ("Col Count", "5"),
                ("Missing Cells", "7"),
                ("Numeric Cols", "3"),
            ]
        );
    }
}
