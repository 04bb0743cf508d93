use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use super::MarketDataProvider;
use crate::models::{Config, TickerMetrics};

/// Envelope wrapping every quote-summary response
#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummary,
}

/// On success `result` holds one entry per requested symbol and `error` is
/// null; on failure `result` is null and `error` describes the problem.
#[derive(Debug, Deserialize)]
struct QuoteSummary {
    result: Option<Vec<QuoteSummaryResult>>,
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteSummaryResult {
    summary_detail: Option<SummaryDetail>,
    financial_data: Option<FinancialData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryDetail {
    market_cap: Option<FormattedValue>,
}

#[derive(Debug, Deserialize)]
struct FinancialData {
    ebitda: Option<FormattedValue>,
}

/// Numeric fields arrive as `{"raw": 1234.0, "fmt": "1.23k"}`, with `raw`
/// omitted when the service has no value for the symbol.
#[derive(Debug, Deserialize)]
struct FormattedValue {
    raw: Option<f64>,
}

/// Yahoo Finance quote-summary API client
pub struct YahooFinanceClient {
    client: Client,
    base_url: Url,
}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
            // Yahoo rejects requests that do not carry a browser-like user agent
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        let base_url = Url::parse(&config.yahoo_base_url)?;

        Ok(Self { client, base_url })
    }

    /// Request a single quote-summary module for a symbol
    async fn get_module(&self, symbol: &str, module: &str) -> Result<QuoteSummaryResult> {
        let mut url = self
            .base_url
            .join(&format!("v10/finance/quoteSummary/{}", symbol))?;
        url.query_pairs_mut().append_pair("modules", module);

        debug!("Requesting {} module for {}: {}", module, symbol, url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "quote summary request for {} failed with status {}",
                symbol,
                response.status()
            ));
        }

        let envelope: QuoteSummaryEnvelope = response.json().await?;

        if let Some(error) = envelope.quote_summary.error {
            return Err(anyhow!("quote summary error for {}: {}", symbol, error));
        }

        envelope
            .quote_summary
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("empty quote summary result for {}", symbol))
    }

    /// Get the current market capitalization from the summaryDetail module
    async fn get_market_cap(&self, symbol: &str) -> Result<Option<f64>> {
        let result = self.get_module(symbol, "summaryDetail").await?;

        Ok(result
            .summary_detail
            .and_then(|detail| detail.market_cap)
            .and_then(|value| value.raw))
    }

    /// Get the trailing EBITDA from the financialData module
    async fn get_ebitda(&self, symbol: &str) -> Result<Option<f64>> {
        let result = self.get_module(symbol, "financialData").await?;

        Ok(result
            .financial_data
            .and_then(|data| data.ebitda)
            .and_then(|value| value.raw))
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooFinanceClient {
    /// Fetch market cap and earnings with one module query each
    async fn fetch_metrics(&self, symbol: &str) -> Result<TickerMetrics> {
        let market_cap = self.get_market_cap(symbol).await?;
        let ebitda = self.get_ebitda(symbol).await?;

        info!(
            "Fetched data for {}: market cap = {:?}, earnings = {:?}",
            symbol, market_cap, ebitda
        );

        Ok(TickerMetrics { market_cap, ebitda })
    }
}
