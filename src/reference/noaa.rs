//! Client for the NOAA NCEI IGRF/WMM web calculator.
//!
//! Registration for an API key: <https://www.ngdc.noaa.gov/geomag/CalcSurvey.shtml>

use std::future::Future;

use reqwest::Client;
use serde::Deserialize;

use super::{ModelQuery, ReferenceModel};

pub const API_URL: &str = "https://www.ngdc.noaa.gov/geomag-web/calculators/calculateIgrfwmm";

#[derive(Debug, Deserialize)]
struct CalculatorResponse {
    result: Vec<CalculatorResult>,
}

#[derive(Debug, Deserialize)]
struct CalculatorResult {
    totalintensity: f64,
}

pub struct NoaaCalculator {
    client: Client,
    url: String,
    key: String,
}

impl NoaaCalculator {
    pub fn new(key: &str) -> Self {
        NoaaCalculator {
            client: Client::new(),
            url: API_URL.to_string(),
            key: key.to_string(),
        }
    }

    pub fn query_params(&self, query: &ModelQuery) -> Vec<(&'static str, String)> {
        let date = query.date;

        vec![
            ("lat1", query.latitude.to_string()),
            ("lon1", query.longitude.to_string()),
            ("coordinateSystem", "D".to_string()),
            ("model", query.model.as_str().to_string()),
            ("startYear", date.year.to_string()),
            ("startMonth", date.month.to_string()),
            ("startDay", date.day.to_string()),
            ("endYear", date.year.to_string()),
            ("endMonth", date.month.to_string()),
            ("endDay", date.day.to_string()),
            ("resultFormat", "json".to_string()),
            ("key", self.key.clone()),
        ]
    }

    async fn fetch(&self, query: &ModelQuery) -> Result<f64, String> {
        let response = self
            .client
            .get(&self.url)
            .query(&self.query_params(query))
            .send()
            .await
            .map_err(|e| format!("service unavailable: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("service answered {}", status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| format!("could not read response: {}", e))?;

        parse_response(&body)
    }
}

impl ReferenceModel for NoaaCalculator {
    fn total_intensity(&self, query: &ModelQuery) -> impl Future<Output = Result<f64, String>> + Send {
        self.fetch(query)
    }
}

/// Extracts `result[0].totalintensity` from a calculator JSON body.
fn parse_response(body: &str) -> Result<f64, String> {
    let response: CalculatorResponse =
        serde_json::from_str(body).map_err(|e| format!("malformed response: {}", e))?;

    response
        .result
        .first()
        .map(|r| r.totalintensity)
        .ok_or_else(|| "response holds no result".to_string())
}

// -- Tests -------------------------------------------------------------------
