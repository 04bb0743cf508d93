pub mod analysis;
pub mod api;
pub mod cik;
pub mod models;
pub mod screener;
