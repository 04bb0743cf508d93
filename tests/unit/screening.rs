//! Ranking pipeline tests against a deterministic provider

use pretty_assertions::assert_eq;

use pe_screener::analysis::{calculate_pe_ratios, TOP_STOCKS};
use pe_screener::models::RankedStock;

use crate::common::FakeProvider;

fn companies(symbols: &[&str]) -> Vec<(String, String)> {
    symbols
        .iter()
        .enumerate()
        .map(|(i, symbol)| (symbol.to_string(), format!("{:0>10}", i)))
        .collect()
}

#[test_log::test(tokio::test)]
async fn test_ranking_is_ascending_by_ratio() {
    // Ratios: ORCL 15, INTC 5, CSCO 30, IBM 2
    let provider = FakeProvider::default()
        .with_metrics("ORCL", Some(1500.0), Some(100.0))
        .with_metrics("INTC", Some(500.0), Some(100.0))
        .with_metrics("CSCO", Some(3000.0), Some(100.0))
        .with_metrics("IBM", Some(200.0), Some(100.0));

    let ranked = calculate_pe_ratios(
        &provider,
        &companies(&["ORCL", "INTC", "CSCO", "IBM"]),
        1,
    )
    .await;

    let symbols: Vec<&str> = ranked.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["IBM", "INTC", "ORCL", "CSCO"]);
    assert!(ranked.windows(2).all(|w| w[0].pe_ratio <= w[1].pe_ratio));
}

#[test_log::test(tokio::test)]
async fn test_ranking_truncates_to_ten_entries() {
    let symbols: Vec<String> = (0..12).map(|i| format!("T{:02}", i)).collect();
    let symbol_refs: Vec<&str> = symbols.iter().map(|s| s.as_str()).collect();

    let mut provider = FakeProvider::default();
    for (i, symbol) in symbols.iter().enumerate() {
        // Later symbols get cheaper ratios: T00 -> 13.0 down to T11 -> 2.0
        provider = provider.with_metrics(symbol, Some((13 - i) as f64 * 100.0), Some(100.0));
    }

    let ranked = calculate_pe_ratios(&provider, &companies(&symbol_refs), 1).await;

    assert_eq!(ranked.len(), TOP_STOCKS);
    assert_eq!(ranked[0].symbol, "T11");
    assert_eq!(ranked[0].pe_ratio, 2.0);
    // The two most expensive tickers fall off the end
    assert!(ranked.iter().all(|s| s.symbol != "T00" && s.symbol != "T01"));
}

#[test_log::test(tokio::test)]
async fn test_equal_ratios_rank_in_processing_order() {
    let provider = FakeProvider::default()
        .with_metrics("AAA", Some(1000.0), Some(100.0))
        .with_metrics("BBB", Some(1000.0), Some(100.0))
        .with_metrics("CCC", Some(300.0), Some(100.0));

    let ranked = calculate_pe_ratios(&provider, &companies(&["AAA", "BBB", "CCC"]), 1).await;

    assert_eq!(
        ranked,
        vec![
            RankedStock {
                symbol: "CCC".to_string(),
                pe_ratio: 3.0
            },
            RankedStock {
                symbol: "AAA".to_string(),
                pe_ratio: 10.0
            },
            RankedStock {
                symbol: "BBB".to_string(),
                pe_ratio: 10.0
            },
        ]
    );
}

#[test_log::test(tokio::test)]
async fn test_failures_and_bad_data_never_abort_the_batch() {
    let provider = FakeProvider::default()
        .with_failure("DOWN")
        .with_metrics("LOSS", Some(1000.0), Some(-50.0))
        .with_metrics("SPARSE", None, Some(50.0))
        .with_metrics("GOOD", Some(800.0), Some(100.0));

    let ranked = calculate_pe_ratios(
        &provider,
        &companies(&["DOWN", "LOSS", "SPARSE", "UNKNOWN", "GOOD"]),
        1,
    )
    .await;

    assert_eq!(
        ranked,
        vec![RankedStock {
            symbol: "GOOD".to_string(),
            pe_ratio: 8.0
        }]
    );
}

#[test_log::test(tokio::test)]
async fn test_zero_market_cap_is_excluded() {
    // The quote service reports a zero market cap for some instruments
    // instead of omitting the field
    let provider = FakeProvider::default()
        .with_metrics("SHELL", Some(0.0), Some(50.0))
        .with_metrics("GOOD", Some(1000.0), Some(50.0));

    let ranked = calculate_pe_ratios(&provider, &companies(&["SHELL", "GOOD"]), 1).await;

    assert_eq!(
        ranked,
        vec![RankedStock {
            symbol: "GOOD".to_string(),
            pe_ratio: 20.0
        }]
    );
}

#[test_log::test(tokio::test)]
async fn test_concurrent_fetching_matches_sequential_results() {
    let provider = FakeProvider::default()
        .with_metrics("AAA", Some(900.0), Some(100.0))
        .with_metrics("BBB", Some(100.0), Some(100.0))
        .with_metrics("CCC", Some(500.0), Some(100.0))
        .with_metrics("DDD", Some(500.0), Some(100.0));

    let universe = companies(&["AAA", "BBB", "CCC", "DDD"]);

    let sequential = calculate_pe_ratios(&provider, &universe, 1).await;
    let concurrent = calculate_pe_ratios(&provider, &universe, 4).await;

    assert_eq!(sequential, concurrent);
}
