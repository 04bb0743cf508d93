use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, error, info, warn};

/// Read the ticker -> CIK lookup table from a headerless CSV file.
///
/// A missing or unreadable file is not fatal: the error is logged and an
/// empty map is returned, which leaves the screener with nothing to rank.
/// Rows with fewer than two columns are skipped and duplicate tickers keep
/// the last row seen.
pub fn read_cik_lookup<P: AsRef<Path>>(path: P) -> HashMap<String, String> {
    let path = path.as_ref();

    let mut reader = match csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
    {
        Ok(reader) => reader,
        Err(e) => {
            error!("CIK lookup CSV not available at {}: {}", path.display(), e);
            return HashMap::new();
        }
    };

    let mut cik_lookup = HashMap::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping unreadable row in {}: {}", path.display(), e);
                continue;
            }
        };

        if record.len() >= 2 {
            let ticker = record[0].trim().to_string();
            let cik = record[1].trim().to_string();
            cik_lookup.insert(ticker, cik);
        }
    }

    info!(
        "Loaded {} CIK mappings from {}",
        cik_lookup.len(),
        path.display()
    );
    debug!("CIK lookup: {:?}", cik_lookup);

    cik_lookup
}
