/// Ticker universe evaluated by the screener, in ranking tie-break order.
pub const SP500_TICKERS: [&str; 10] = [
    "AAPL", "MSFT", "GOOGL", "AMZN", "META", "TSLA", "NVDA", "BRK-B", "JPM", "JNJ",
];

/// Fundamentals fetched for a single ticker
///
/// Either value can be absent when the data service does not report it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickerMetrics {
    pub market_cap: Option<f64>,
    pub ebitda: Option<f64>,
}

/// A ticker together with its computed P/E ratio
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStock {
    pub symbol: String,
    pub pe_ratio: f64,
}

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub cik_lookup_path: String,
    pub company_count: usize,
    pub yahoo_base_url: String,
    pub fetch_concurrency: usize,
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Config {
            cik_lookup_path: std::env::var("CIK_LOOKUP_PATH")
                .unwrap_or_else(|_| "cik_lookup.csv".to_string()),
            company_count: std::env::var("COMPANY_COUNT")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            yahoo_base_url: std::env::var("YAHOO_BASE_URL")
                .unwrap_or_else(|_| "https://query2.finance.yahoo.com".to_string()),
            fetch_concurrency: std::env::var("FETCH_CONCURRENCY")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .unwrap_or(1),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        };

        if config.fetch_concurrency == 0 {
            anyhow::bail!("FETCH_CONCURRENCY must be at least 1");
        }

        Ok(config)
    }
}
