use tracing::info;

use crate::analysis;
use crate::api::MarketDataProvider;
use crate::cik;
use crate::models::{Config, RankedStock, SP500_TICKERS};

/// Batch screening pipeline
///
/// Loads the CIK lookup, narrows the ticker universe to the companies the
/// lookup knows, ranks them by P/E ratio, and logs the result.
pub struct Screener<P> {
    provider: P,
    config: Config,
}

impl<P: MarketDataProvider> Screener<P> {
    /// Create a new screener
    pub fn new(provider: P, config: Config) -> Self {
        Self { provider, config }
    }

    /// Run one screening pass and return the ranked stocks.
    pub async fn run(&self) -> Vec<RankedStock> {
        let cik_lookup = cik::read_cik_lookup(&self.config.cik_lookup_path);

        let universe: Vec<&str> = SP500_TICKERS
            .iter()
            .take(self.config.company_count)
            .copied()
            .collect();
        info!("Top {} companies: {:?}", self.config.company_count, universe);

        // Universe order drives processing order, which is what breaks
        // ranking ties. Tickers without a CIK mapping are skipped.
        let companies: Vec<(String, String)> = universe
            .iter()
            .filter_map(|ticker| {
                cik_lookup
                    .get(*ticker)
                    .map(|cik| (ticker.to_string(), cik.clone()))
            })
            .collect();

        let ciks: Vec<&String> = companies.iter().map(|(_, cik)| cik).collect();
        info!("Top {} CIKs: {:?}", self.config.company_count, ciks);

        let ranked = analysis::calculate_pe_ratios(
            &self.provider,
            &companies,
            self.config.fetch_concurrency,
        )
        .await;

        info!("Top 10 most undervalued stocks based on P/E ratio:");
        for stock in &ranked {
            info!("{}: {:.2}", stock.symbol, stock.pe_ratio);
        }
        info!("✅ Screening complete: {} stocks ranked", ranked.len());

        ranked
    }
}
