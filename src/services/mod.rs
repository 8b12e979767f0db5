pub mod api;

pub use api::fetch_prices;
