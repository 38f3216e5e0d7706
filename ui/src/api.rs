//! Client for the analysis service.
//!
//! One operation: POST the selected file as a multipart upload and decode the
//! JSON report. The wire field names are the service's own (Turkish top-level
//! keys, English dashboard keys); the Rust side keeps English names via serde
//! renames. No retry and no timeout — the request either settles or the
//! workflow stays in flight.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::config;

/// The full response of the `/upload` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(rename = "dosya_adi")]
    pub file_name: String,
    #[serde(rename = "satir_sayisi")]
    pub row_count: u64,
    #[serde(rename = "kolon_sayisi")]
    pub col_count: u64,
    #[serde(rename = "ozet")]
    pub summary: String,
    #[serde(rename = "ai_ozet")]
    pub ai_summary: String,
    #[serde(default)]
    pub dashboard: Option<Dashboard>,
    #[serde(default)]
    pub pdf_url: Option<String>,
}

/// Structured analytics attached to a report. The service caps `trend` at the
/// first 50 rows and `distribution` at the top 10 categories; the client takes
/// that contract as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub metrics: DashboardMetrics,
    #[serde(default)]
    pub trend: Vec<TrendPoint>,
    #[serde(default)]
    pub distribution: Option<Vec<DistributionSlice>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub row_count: u64,
    pub col_count: u64,
    pub missing_cells: u64,
    #[serde(rename = "numeric_cols")]
    pub numeric_col_count: u64,
}

/// One sample of the trend series. `y` is absent where the source cell was
/// missing or non-numeric; absent values render as gaps, never as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub x: f64,
    #[serde(default)]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("analysis request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("analysis service answered with status {0}")]
    Status(u16),
}

/// Submits `bytes` as the single `file` field of a multipart POST to
/// `{api_base}/upload` and decodes the report.
pub async fn analyze_file(file_name: &str, bytes: Vec<u8>) -> Result<AnalysisReport, ApiError> {
    let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
    let form = reqwest::multipart::Form::new().part("file", part);

    let response = reqwest::Client::new()
        .post(format!("{}/upload", config::api_base()))
        .multipart(form)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }

    Ok(response.json::<AnalysisReport>().await?)
}

/// Resolves the report's relative PDF path against the service origin.
pub fn pdf_download_url(report: &AnalysisReport) -> Option<String> {
    report
        .pdf_url
        .as_ref()
        .map(|path| format!("{}{}", config::api_base(), path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_full_service_response() {
        let raw = serde_json::json!({
            "dosya_adi": "sales.csv",
            "satir_sayisi": 120,
            "kolon_sayisi": 5,
            "ozet": "Bu dosyada 120 satır, 5 kolon var.",
            "ai_ozet": "Sales trend upward over the period.",
            "dashboard": {
                "metrics": {
                    "row_count": 120,
                    "col_count": 5,
                    "missing_cells": 7,
                    "numeric_cols": 3
                },
                "trend": [
                    {"x": 0, "y": 12.5},
                    {"x": 1, "y": null},
                    {"x": 2, "y": 14.0}
                ],
                "distribution": [
                    {"label": "North", "value": 40},
                    {"label": "South", "value": 25}
                ]
            },
            "pdf_url": "/reports/rapor_ab12cd34.pdf"
        });

        let report: AnalysisReport = serde_json::from_value(raw).expect("decodes");
        assert_eq!(report.file_name, "sales.csv");
        assert_eq!(report.row_count, 120);

        let dashboard = report.dashboard.as_ref().expect("dashboard present");
        assert_eq!(dashboard.metrics.numeric_col_count, 3);
        assert_eq!(dashboard.trend.len(), 3);
        assert_eq!(dashboard.trend[1].y, None);
        assert_eq!(
            dashboard.distribution.as_ref().map(|slices| slices.len()),
            Some(2)
        );
    }

    #[test]
    fn optional_sections_may_be_absent() {
        let raw = serde_json::json!({
            "dosya_adi": "tiny.csv",
            "satir_sayisi": 1,
            "kolon_sayisi": 1,
            "ozet": "Bu dosyada 1 satır, 1 kolon var.",
            "ai_ozet": "Not much to say.",
        });

        let report: AnalysisReport = serde_json::from_value(raw).expect("decodes");
        assert!(report.dashboard.is_none());
        assert!(report.pdf_url.is_none());
        assert_eq!(pdf_download_url(&report), None);
    }

    #[test]
    fn distribution_null_decodes_as_absent() {
        let raw = serde_json::json!({
            "metrics": {
                "row_count": 3,
                "col_count": 2,
                "missing_cells": 0,
                "numeric_cols": 1
            },
            "trend": [],
            "distribution": null
        });

        let dashboard: Dashboard = serde_json::from_value(raw).expect("decodes");
        assert!(dashboard.distribution.is_none());
        assert!(dashboard.trend.is_empty());
    }

    #[test]
    fn pdf_url_joins_the_service_origin() {
        let report = AnalysisReport {
            file_name: "sales.csv".to_string(),
            row_count: 1,
            col_count: 1,
            summary: String::new(),
            ai_summary: String::new(),
            dashboard: None,
            pdf_url: Some("/reports/rapor.pdf".to_string()),
        };

        let url = pdf_download_url(&report).expect("link present");
        assert!(url.ends_with("/reports/rapor.pdf"));
        assert!(url.starts_with("http"));
    }
}
