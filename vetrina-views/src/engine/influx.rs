use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::{
    engine::Engine,
    error::{Result, StoreError},
    event::ViewEvent,
};

/// Default bound on a single store call.
///
/// The count query runs on the detail-page request path, so a slow or
/// unreachable store must fail fast instead of holding the page hostage.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_millis(500);

/// Connection settings for an InfluxDB 1.x HTTP endpoint.
#[derive(Debug, Clone)]
pub struct InfluxConfig {
    /// Base url of the HTTP api, e.g. `http://localhost:8086`.
    pub url: String,

    /// Database the view points are written to and counted from.
    pub database: String,

    /// Measurement name the points land in.
    pub measurement: String,

    /// Per-request timeout applied to writes and queries alike.
    pub timeout: Duration,
}

impl Default for InfluxConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8086".to_owned(),
            database: "vetrina".to_owned(),
            measurement: "products".to_owned(),
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Influx {
    client: reqwest::Client,
    config: InfluxConfig,
}

impl Influx {
    pub fn new(config: InfluxConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Engine for Influx {
    async fn insert(&self, event: ViewEvent) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint("write"))
            .query(&[
                ("db", self.config.database.as_str()),
                ("precision", "s"),
            ])
            .body(to_line(&self.config.measurement, &event))
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::BadStatus(status.as_u16(), body));
        }

        Ok(())
    }

    async fn count(&self, product_id: u32) -> Result<u64> {
        let query = format!(
            "SELECT count(\"product_id\") FROM \"{}\" WHERE \"product_id\" = {product_id}",
            self.config.measurement
        );

        let response = self
            .client
            .get(self.endpoint("query"))
            .query(&[
                ("db", self.config.database.as_str()),
                ("q", query.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(StoreError::BadStatus(status.as_u16(), body));
        }

        count_from(serde_json::from_str(&body)?)
    }
}

/// One event as a line-protocol point: the product name doubles as a tag so
/// views stay groupable per product in the store, the id and name travel as
/// fields, and the timestamp is the event's capture time at second precision.
fn to_line(measurement: &str, event: &ViewEvent) -> String {
    format!(
        "{measurement},product={} product_id={}i,product_name=\"{}\" {}",
        escape_tag(&event.product_name),
        event.product_id,
        escape_field(&event.product_name),
        event.recorded_at.timestamp(),
    )
}

fn escape_tag(value: &str) -> String {
    value
        .replace(',', "\\,")
        .replace('=', "\\=")
        .replace(' ', "\\ ")
}

fn escape_field(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<StatementResult>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatementResult {
    series: Option<Vec<Series>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Series {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

fn count_from(payload: QueryResponse) -> Result<u64> {
    if let Some(error) = payload.error {
        return Err(StoreError::QueryFailed(error));
    }

    let Some(result) = payload.results.into_iter().next() else {
        return Err(StoreError::UnexpectedPayload("empty results".to_owned()));
    };

    if let Some(error) = result.error {
        return Err(StoreError::QueryFailed(error));
    }

    // No matching series means nothing has been recorded for this product yet.
    let Some(series) = result.series.and_then(|series| series.into_iter().next()) else {
        return Ok(0);
    };

    let Some(row) = series.values.into_iter().next() else {
        return Ok(0);
    };

    match row.get(1).and_then(Value::as_u64) {
        Some(count) => Ok(count),
        _ => Err(StoreError::UnexpectedPayload(format!(
            "count column missing in {row:?}"
        ))),
    }
}
