use anyhow::Result;

use crate::models::TickerMetrics;

pub mod yahoo_client;
pub use yahoo_client::YahooFinanceClient;

/// Common trait for market data providers
///
/// Implementations resolve a ticker symbol to the pair of fundamentals the
/// screener ranks on. A value the service does not report comes back as
/// `None`; a failed request is an error for the whole fetch.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn fetch_metrics(&self, symbol: &str) -> Result<TickerMetrics>;
}
