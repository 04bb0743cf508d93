use futures::stream::{self, StreamExt};
use tracing::warn;

use crate::api::MarketDataProvider;
use crate::models::{RankedStock, TickerMetrics};

/// Number of ranked entries the screener reports.
pub const TOP_STOCKS: usize = 10;

/// Compute P/E ratios for every listed company and rank the survivors.
///
/// Companies are fetched `concurrency` at a time (a zero bound is treated
/// as one) while results stay in input order, so equal ratios rank in the
/// order the companies were given. A failed fetch, incomplete data, or a
/// non-positive market cap or earnings figure excludes the ticker with a
/// warning instead of failing the batch.
pub async fn calculate_pe_ratios<P: MarketDataProvider>(
    provider: &P,
    companies: &[(String, String)],
    concurrency: usize,
) -> Vec<RankedStock> {
    let metrics = stream::iter(companies)
        .map(|(symbol, _cik)| async move {
            let metrics = match provider.fetch_metrics(symbol).await {
                Ok(metrics) => metrics,
                Err(e) => {
                    warn!("Error fetching data for {}: {}", symbol, e);
                    TickerMetrics::default()
                }
            };
            (symbol.as_str(), metrics)
        })
        .buffered(concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

    let mut candidates = Vec::new();
    for (symbol, metrics) in metrics {
        match (metrics.market_cap, metrics.ebitda) {
            (Some(market_cap), Some(ebitda)) if market_cap > 0.0 && ebitda > 0.0 => {
                candidates.push(RankedStock {
                    symbol: symbol.to_string(),
                    pe_ratio: market_cap / ebitda,
                });
            }
            (Some(market_cap), Some(ebitda)) => {
                warn!(
                    "Invalid P/E ratio for {}: market cap = {}, earnings = {}",
                    symbol, market_cap, ebitda
                );
            }
            _ => {
                warn!("Missing market cap or earnings for {}", symbol);
            }
        }
    }

    rank_undervalued(candidates)
}

/// Sort candidates ascending by ratio and keep the lowest `TOP_STOCKS`.
///
/// The sort is stable, so candidates with equal ratios keep their relative
/// order.
pub fn rank_undervalued(mut candidates: Vec<RankedStock>) -> Vec<RankedStock> {
    candidates.sort_by(|a, b| a.pe_ratio.total_cmp(&b.pe_ratio));
    candidates.truncate(TOP_STOCKS);
    candidates
}
